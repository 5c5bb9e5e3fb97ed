// Copyright (c) 2019-2021 Dropbox, Inc.

//! Request preparation and response decoding for transports driven by a
//! [`TransportDefaultConfig`].
//!
//! These are the two places where API objects cross the network boundary: arguments are
//! serialized into the request, and the response (or the error inside it) is deserialized into
//! the route's result or error type.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt::Write;
use bytes::Bytes;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use crate::Error;
use crate::client_trait_common::{Endpoint, HttpRequest, ParamsType, Style};
use crate::config::TransportDefaultConfig;

/// When Dropbox returns an error with HTTP 409 or 429, it uses an implicit JSON object with the
/// following structure, which contains the actual error as a field.
#[derive(Debug, Deserialize)]
pub(crate) struct TopLevelError<T> {
    pub error: T,

    // It also has these fields, which we don't expose anywhere:
    //pub error_summary: String,
    //pub user_message: Option<String>,
}

/// The error body of a rate-limited response. The reason is a union, of which only the tag is
/// kept.
#[derive(Debug, Deserialize)]
struct RateLimitedError {
    pub reason: RateLimitReason,

    #[serde(default)] // too_many_write_operations errors don't include this field; default to 0.
    pub retry_after: u32,
}

#[derive(Debug, Deserialize)]
struct RateLimitReason {
    #[serde(rename = ".tag")]
    tag: String,
}

/// The full URL for an API function on the configured hosts.
pub fn route_url(config: &TransportDefaultConfig, endpoint: Endpoint, function: &str) -> String {
    endpoint.url(config.hostname_config()) + function
}

/// Set up a request with the headers from the configuration, authorization, and the serialized
/// arguments.
///
/// With no `token`, app authorization (from the configured app key and secret) is used if
/// available. Headers set here for this particular request win over configured headers with the
/// same name, which are left out.
///
/// # Panics
///
/// If a non-empty `body` is given for a [`Style::Download`] request.
pub fn prepare_request<R: HttpRequest>(
    mut req: R,
    config: &TransportDefaultConfig,
    style: Style,
    params: String,
    params_type: ParamsType,
    body: Bytes,
    token: Option<&str>,
) -> R {
    let mut own_headers: Vec<(&'static str, Cow<'static, str>)> = vec![];

    if let Some(token) = token {
        own_headers.push(("Authorization", Cow::Owned(format!("Bearer {token}"))));
    } else if let Some(app_auth) = config.app_auth_header() {
        own_headers.push(("Authorization", Cow::Owned(app_auth)));
    }

    let mut req_body = None;
    match style {
        Style::Rpc => {
            // Send params in the body.
            if !params.is_empty() {
                own_headers.push(("Content-Type", Cow::Borrowed(params_type.content_type())));
                req_body = Some(Bytes::from(params));
            }
        }
        Style::Upload => {
            // Send params in a header.
            if !params.is_empty() {
                own_headers.push(
                    ("Dropbox-API-Arg", Cow::Owned(json_escape_header(&params).into_owned())));
            }
            own_headers.push(("Content-Type", Cow::Borrowed("application/octet-stream")));
            req_body = Some(body);
        }
        Style::Download => {
            // Send params in a header.
            if !params.is_empty() {
                own_headers.push(
                    ("Dropbox-API-Arg", Cow::Owned(json_escape_header(&params).into_owned())));
            }
            assert!(body.is_empty(), "body can only be set for Style::Upload request");
        }
    }

    for (name, value) in config.request_headers() {
        if own_headers.iter().any(|(own, _)| own.eq_ignore_ascii_case(&name)) {
            warn!("configured header {name:?} is overridden by this request");
            continue;
        }
        req = req.set_header(&name, &value);
    }
    for (name, value) in &own_headers {
        req = req.set_header(name, value);
    }
    if let Some(body) = req_body {
        req = req.set_body(body);
    }

    req
}

/// Deserialize a response body. A body that isn't JSON is [`Error::Json`]; JSON of the wrong
/// shape for `T` is [`Error::UnexpectedResponse`].
fn decode_body<T: DeserializeOwned>(response: &str) -> crate::Result<T> {
    serde_json::from_str(response).map_err(|e| {
        error!("Failed to deserialize JSON from response: {e}");
        if e.is_data() {
            Error::UnexpectedResponse(format!("{e}: {response}"))
        } else {
            Error::Json(e)
        }
    })
}

/// Decode a response body into a two-level result. The outer result has an error if something
/// went wrong beyond the route's own error type (malformed JSON, server 500 errors, etc). The
/// inner result has the route's error if the server returned one (HTTP 409), otherwise the
/// deserialized response.
pub fn parse_response<T, E>(status: u16, response: &str) -> crate::Result<Result<T, E>>
where
    T: DeserializeOwned,
    E: DeserializeOwned + StdError,
{
    if (200..300).contains(&status) {
        return decode_body(response).map(Ok);
    }

    error!("HTTP {status}");
    match status {
        400 => Err(Error::BadRequest(response.to_owned())),
        409 => {
            // Response should be JSON-deserializable into the strongly-typed error specified by
            // type parameter E.
            let deserialized = decode_body::<TopLevelError<E>>(response)?;
            error!("API error: {}", deserialized.error);
            Ok(Err(deserialized.error))
        }
        429 => {
            let deserialized = decode_body::<TopLevelError<RateLimitedError>>(response)?;
            let e = Error::RateLimited {
                reason: deserialized.error.reason.tag,
                retry_after_seconds: deserialized.error.retry_after,
            };
            error!("{e}");
            Err(e)
        }
        500..=599 => Err(Error::ServerError(response.to_owned())),
        _ => Err(Error::UnexpectedHttpError {
            code: status,
            response: response.to_owned(),
        }),
    }
}

/// Like [`parse_response`], but with the route error folded into [`Error::Api`].
pub fn parse_response_flat<T, E>(status: u16, response: &str) -> Result<T, Error<E>>
where
    T: DeserializeOwned,
    E: DeserializeOwned + StdError,
{
    match parse_response(status, response) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(api_error)) => Err(Error::Api(api_error)),
        Err(e) => Err(e.typed()),
    }
}

/// Replaces any non-ASCII characters (and 0x7f) with JSON-style '\uXXXX' sequence. Otherwise,
/// returns it unmodified without any additional allocation or copying.
pub(crate) fn json_escape_header(s: &str) -> Cow<'_, str> {
    // The HTTP spec requires escaping ASCII DEL (0x7F), so we can't use the quicker bit pattern
    // check done in str::is_ascii() to skip this for the common case of all ASCII.

    let mut out = Cow::Borrowed(s);
    for (i, c) in s.char_indices() {
        if !c.is_ascii() || c == '\x7f' {
            let mstr = match out {
                Cow::Borrowed(_) => {
                    // If we're still borrowed, we must have had ascii up until this point.
                    // Clone the string up until here, and from now on we'll be pushing chars to it.
                    out = Cow::Owned(s[0..i].to_owned());
                    out.to_mut()
                }
                Cow::Owned(ref mut m) => m,
            };
            // Characters outside the BMP are written as a UTF-16 surrogate pair.
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                // Writing to a String can't fail.
                let _ = write!(mstr, "\\u{:04x}", unit);
            }
        } else if let Cow::Owned(ref mut o) = out {
            o.push(c);
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_json_escape() {
        assert_eq!(Cow::Borrowed("foobar"), json_escape_header("foobar"));
        assert_eq!(
            Cow::<'_, str>::Owned("tro\\u0161kovi".to_owned()),
            json_escape_header("troškovi"));
        assert_eq!(
            Cow::<'_, str>::Owned(
                r#"{"field": "some_\u00fc\u00f1\u00eec\u00f8d\u00e9_and_\u007f"}"#.to_owned()),
            json_escape_header("{\"field\": \"some_üñîcødé_and_\x7f\"}"));
        assert_eq!(
            Cow::<'_, str>::Owned("almost,\\u007f but not quite".to_owned()),
            json_escape_header("almost,\x7f but not quite"));
    }

    #[test]
    fn test_json_escape_astral() {
        // U+1F600 is outside the Basic Multilingual Plane.
        assert_eq!("smile \\ud83d\\ude00", json_escape_header("smile \u{1F600}"));
    }

    #[test]
    fn test_route_url_uses_configured_hosts() {
        let config = TransportDefaultConfig::builder("key")
            .hostname_config(crate::HostnameConfig::new(
                "meta.test", "api.test", "content.test", "notify.test"))
            .build()
            .unwrap();
        assert_eq!("https://api.test/2/files/paper/create",
            route_url(&config, Endpoint::Api, "files/paper/create"));
        assert_eq!("https://content.test/2/files/download",
            route_url(&config, Endpoint::Content, "files/download"));
        assert_eq!("https://notify.test/2/files/list_folder/longpoll",
            route_url(&config, Endpoint::Notify, "files/list_folder/longpoll"));
        assert_eq!("https://api.test/oauth2/token",
            route_url(&config, Endpoint::OAuth2, "oauth2/token"));
    }
}
