// Copyright (c) 2019-2020 Dropbox, Inc.

#![deny(
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms,
)]

#![doc = "Dropbox API object types and HTTP transport configuration. See README.md for more details."]

// Enable a nightly feature for docs.rs which enables decorating feature-gated items.
// To enable this manually, run e.g. `cargo rustdoc --all-features -- --cfg docsrs`.
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Feature-gate something and also decorate it with the feature name on docs.rs.
macro_rules! if_feature {
    ($feature_name:expr, $($item:item)*) => {
        $(
            #[cfg(feature = $feature_name)]
            #[cfg_attr(docsrs, doc(cfg(feature = $feature_name)))]
            $item
        )*
    }
}

#[macro_use] extern crate log;

mod error;
pub use error::{BoxedError, Error, NoError};

/// Result type for transport operations, with no route-specific error.
pub type Result<T> = std::result::Result<T, Error>;

pub mod client_trait_common;
pub mod client_helpers;
pub mod config;
pub mod delegate_queue;

pub use config::{ConfigError, HostnameConfig, TransportConfigBuilder, TransportDefaultConfig};
pub use delegate_queue::{DelegateQueue, SerialQueue};

mod generated; // Output of the Stone generator; do not edit by hand.
pub use generated::*;
