#![allow(dead_code)] // not every test file uses every helper

use bytes::Bytes;
use dropbox_sdk_transport::client_trait_common::HttpRequest;

/// A request that just remembers what was set on it.
#[derive(Debug, Default)]
pub struct RecordingRequest {
    pub headers: Vec<(String, String)>,
    pub body: Option<Bytes>,
}

impl RecordingRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn header_names(&self) -> Vec<&str> {
        self.headers.iter().map(|(n, _)| n.as_str()).collect()
    }
}

impl HttpRequest for RecordingRequest {
    fn set_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    fn set_body(mut self, body: Bytes) -> Self {
        self.body = Some(body);
        self
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
