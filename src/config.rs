// Copyright (c) 2016-2021 Dropbox, Inc.

//! Configuration for a Dropbox HTTP transport.
//!
//! A [`TransportDefaultConfig`] is built once, when the client is created, and is read-only from
//! then on. It can be freely shared between threads; everything a transport needs to set up each
//! request (credentials, headers, hostnames) is derived from it.
//!
//! ```
//! # use dropbox_sdk_transport::TransportDefaultConfig;
//! let config = TransportDefaultConfig::builder("my-app-key")
//!     .app_secret("my-app-secret")
//!     .user_agent("MyApp/1.0")
//!     .force_foreground_session(true)
//!     .build()
//!     .expect("app key is set");
//! assert!(config.force_foreground_session());
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use url::Url;
use crate::client_trait_common::TeamSelect;
use crate::delegate_queue::DelegateQueue;

#[cfg(feature = "dbx_common")]
use crate::common::PathRoot;

/// User agent sent with every request, appended to any custom one.
pub const DEFAULT_USER_AGENT: &str =
    concat!("Dropbox-SDK-Rust-Transport/", env!("CARGO_PKG_VERSION"));

/// Errors from building a [`TransportDefaultConfig`].
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The app key was empty.
    #[error("an app key is required")]
    MissingAppKey,

    /// The path root could not be serialized for the `Dropbox-API-Path-Root` header.
    #[error("invalid path root: {0}")]
    PathRoot(#[source] serde_json::Error),
}

/// Host names to send requests to. Only useful to override for debugging purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostnameConfig {
    /// Host for the website, used for OAuth2 authorization pages.
    pub meta: String,

    /// Host for most RPC-style API calls.
    pub api: String,

    /// Host for upload and download calls.
    pub content: String,

    /// Host for longpolling calls.
    pub notify: String,
}

impl HostnameConfig {
    pub fn new(
        meta: impl Into<String>,
        api: impl Into<String>,
        content: impl Into<String>,
        notify: impl Into<String>,
    ) -> Self {
        Self {
            meta: meta.into(),
            api: api.into(),
            content: content.into(),
            notify: notify.into(),
        }
    }
}

impl Default for HostnameConfig {
    fn default() -> Self {
        Self::new(
            "www.dropbox.com",
            "api.dropboxapi.com",
            "content.dropboxapi.com",
            "notify.dropboxapi.com",
        )
    }
}

/// Configuration for a Dropbox HTTP transport.
///
/// Use [`TransportDefaultConfig::builder`] to set anything beyond the app key; all other fields are
/// optional and default to unset (or `false`).
#[derive(Clone)]
pub struct TransportDefaultConfig {
    app_key: String,
    app_secret: Option<String>,
    user_agent: Option<String>,
    as_member_id: Option<String>,
    #[cfg(feature = "dbx_common")]
    path_root: Option<PathRoot>,
    path_root_header: Option<String>, // a serialized PathRoot enum
    additional_headers: BTreeMap<String, String>,
    delegate_queue: Option<Arc<dyn DelegateQueue>>,
    force_foreground_session: bool,
    shared_container_identifier: Option<String>,
    keychain_service: Option<String>,
    hostname_config: HostnameConfig,
    redirect_url: Option<Url>,
}

impl TransportDefaultConfig {
    /// Start building a configuration for the given app key.
    ///
    /// The app key is the consumer key of the app integrating with the Dropbox API. It is used
    /// for endpoints with the "app auth" authentication type.
    pub fn builder(app_key: impl Into<String>) -> TransportConfigBuilder {
        TransportConfigBuilder {
            inner: TransportDefaultConfig {
                app_key: app_key.into(),
                app_secret: None,
                user_agent: None,
                as_member_id: None,
                #[cfg(feature = "dbx_common")]
                path_root: None,
                path_root_header: None,
                additional_headers: BTreeMap::new(),
                delegate_queue: None,
                force_foreground_session: false,
                shared_container_identifier: None,
                keychain_service: None,
                hostname_config: HostnameConfig::default(),
                redirect_url: None,
            },
        }
    }

    /// A configuration with only an app key; everything else takes its default.
    pub fn new(app_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder(app_key).build()
    }

    /// A configuration for apps that call endpoints with the "app auth" authentication type.
    pub fn with_app_secret(
        app_key: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::builder(app_key).app_secret(app_secret).build()
    }

    /// A configuration which makes all requests on foreground sessions.
    pub fn with_foreground_session(
        app_key: impl Into<String>,
        force_foreground_session: bool,
    ) -> Result<Self, ConfigError> {
        Self::builder(app_key).force_foreground_session(force_foreground_session).build()
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    pub fn app_secret(&self) -> Option<&str> {
        self.app_secret.as_deref()
    }

    /// The custom user agent, if any. See [`Self::user_agent_header`] for what is actually sent.
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Team member ID that a team app acts on behalf of.
    pub fn as_member_id(&self) -> Option<&str> {
        self.as_member_id.as_deref()
    }

    /// The team member context that `as_member_id` selects.
    pub fn team_select(&self) -> Option<TeamSelect> {
        self.as_member_id.clone().map(TeamSelect::User)
    }

    #[cfg(feature = "dbx_common")]
    pub fn path_root(&self) -> Option<&PathRoot> {
        self.path_root.as_ref()
    }

    /// Extra headers injected into every request.
    pub fn additional_headers(&self) -> &BTreeMap<String, String> {
        &self.additional_headers
    }

    /// The queue on which request handler callbacks are run, if the caller supplied one.
    pub fn delegate_queue(&self) -> Option<&Arc<dyn DelegateQueue>> {
        self.delegate_queue.as_ref()
    }

    /// Whether upload and download requests skip background sessions.
    pub fn force_foreground_session(&self) -> bool {
        self.force_foreground_session
    }

    pub fn shared_container_identifier(&self) -> Option<&str> {
        self.shared_container_identifier.as_deref()
    }

    /// The explicitly configured keychain service name. `None` means the default is used; see
    /// [`Self::keychain_service_name`].
    pub fn keychain_service(&self) -> Option<&str> {
        self.keychain_service.as_deref()
    }

    pub fn hostname_config(&self) -> &HostnameConfig {
        &self.hostname_config
    }

    pub fn redirect_url(&self) -> Option<&Url> {
        self.redirect_url.as_ref()
    }

    /// The keychain service name to store credentials under: the configured one, or else the host
    /// application's identifier.
    pub fn keychain_service_name(&self) -> Cow<'_, str> {
        match self.keychain_service {
            Some(ref service) => Cow::Borrowed(service),
            None => Cow::Owned(default_keychain_service()),
        }
    }

    /// Value for the `User-Agent` header.
    pub fn user_agent_header(&self) -> Cow<'_, str> {
        match self.user_agent {
            Some(ref custom) => Cow::Owned(format!("{custom}/{DEFAULT_USER_AGENT}")),
            None => Cow::Borrowed(DEFAULT_USER_AGENT),
        }
    }

    /// Value for the `Authorization` header on "app auth" endpoints, if there is an app secret.
    pub fn app_auth_header(&self) -> Option<String> {
        self.app_secret.as_ref().map(|secret| {
            let credentials = format!("{}:{}", self.app_key, secret);
            format!("Basic {}", BASE64.encode(credentials))
        })
    }

    /// Value for the `Dropbox-API-Path-Root` header, if a path root is set.
    pub fn path_root_header(&self) -> Option<&str> {
        self.path_root_header.as_deref()
    }

    /// Headers to set on every request, in order.
    ///
    /// Additional headers come last and replace any standard header of the same name (compared
    /// case-insensitively).
    pub fn request_headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![
            ("User-Agent".to_owned(), self.user_agent_header().into_owned()),
        ];
        if let Some(select) = self.team_select() {
            headers.push((select.header_name().to_owned(), select.id().to_owned()));
        }
        if let Some(ref path_root) = self.path_root_header {
            headers.push(("Dropbox-API-Path-Root".to_owned(), path_root.clone()));
        }
        for (name, value) in &self.additional_headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
            headers.push((name.clone(), value.clone()));
        }
        headers
    }
}

impl TransportDefaultConfig {
    #[cfg(feature = "dbx_common")]
    fn with_path_root_header(mut self) -> Result<Self, ConfigError> {
        if let Some(ref path_root) = self.path_root {
            // Only fails for PathRoot::Other, which can't be sent to the server.
            let header = serde_json::to_string(path_root).map_err(ConfigError::PathRoot)?;
            self.path_root_header = Some(header);
        }
        Ok(self)
    }

    #[cfg(not(feature = "dbx_common"))]
    fn with_path_root_header(self) -> Result<Self, ConfigError> {
        Ok(self)
    }
}

impl fmt::Debug for TransportDefaultConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportDefaultConfig")
            .field("app_key", &self.app_key)
            .field("app_secret", &self.app_secret.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("as_member_id", &self.as_member_id)
            .field("path_root", &self.path_root_header)
            .field("additional_headers", &self.additional_headers)
            .field("delegate_queue", &self.delegate_queue.is_some())
            .field("force_foreground_session", &self.force_foreground_session)
            .field("shared_container_identifier", &self.shared_container_identifier)
            .field("keychain_service", &self.keychain_service)
            .field("hostname_config", &self.hostname_config)
            .field("redirect_url", &self.redirect_url)
            .finish()
    }
}

/// Builds a [`TransportDefaultConfig`]. Any field not set keeps its default.
#[derive(Debug)]
pub struct TransportConfigBuilder {
    inner: TransportDefaultConfig,
}

impl TransportConfigBuilder {
    /// The consumer app secret, used with the app key for "app auth" endpoints.
    pub fn app_secret(mut self, value: impl Into<String>) -> Self {
        self.inner.app_secret = Some(value.into());
        self
    }

    /// The user agent for all requests. Used for server logging.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.inner.user_agent = Some(value.into());
        self
    }

    /// Used when a team app with the appropriate permissions performs user API actions on behalf
    /// of a team member.
    pub fn as_member_id(mut self, value: impl Into<String>) -> Self {
        self.inner.as_member_id = Some(value.into());
        self
    }

    /// Set a root which all paths are evaluated relative to, sent as the `Dropbox-API-Path-Root`
    /// header.
    ///
    /// See <https://www.dropbox.com/developers/reference/path-root-header-modes> for more
    /// information.
    #[cfg(feature = "dbx_common")]
    pub fn path_root(mut self, value: PathRoot) -> Self {
        self.inner.path_root = Some(value);
        self
    }

    /// Add a header to inject into every request. Setting the same name twice keeps the last
    /// value.
    pub fn additional_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner.additional_headers.insert(name.into(), value.into());
        self
    }

    /// Add several headers to inject into every request.
    pub fn additional_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.inner.additional_headers.extend(
            headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// A serial queue for running code that touches state shared across threads (mainly the
    /// request handler storage).
    pub fn delegate_queue(mut self, value: Arc<dyn DelegateQueue>) -> Self {
        self.inner.delegate_queue = Some(value);
        self
    }

    /// If true, all requests are made on foreground sessions. By default most upload and download
    /// requests use a background session, which essentially never times out if the connection is
    /// lost after the request begins.
    pub fn force_foreground_session(mut self, value: bool) -> Self {
        self.inner.force_foreground_session = value;
        self
    }

    /// The shared container that background sessions download files into. Needed when
    /// downloading from an app extension.
    pub fn shared_container_identifier(mut self, value: impl Into<String>) -> Self {
        self.inner.shared_container_identifier = Some(value.into());
        self
    }

    /// The keychain service name. Must be set if the keychain is shared, e.g. with an app
    /// extension.
    pub fn keychain_service(mut self, value: impl Into<String>) -> Self {
        self.inner.keychain_service = Some(value.into());
        self
    }

    /// Custom host names for requests. Only useful for debugging.
    pub fn hostname_config(mut self, value: HostnameConfig) -> Self {
        self.inner.hostname_config = value;
        self
    }

    /// Custom OAuth2 redirect URL. Only useful for debugging.
    pub fn redirect_url(mut self, value: Url) -> Self {
        self.inner.redirect_url = Some(value);
        self
    }

    /// Validate and freeze the configuration.
    pub fn build(self) -> Result<TransportDefaultConfig, ConfigError> {
        if self.inner.app_key.is_empty() {
            error!("transport config is missing an app key");
            return Err(ConfigError::MissingAppKey);
        }
        let config = self.inner.with_path_root_header()?;

        debug!("transport config for app key {}: foreground session {}, {} additional headers",
            config.app_key, config.force_foreground_session, config.additional_headers.len());
        if config.hostname_config != HostnameConfig::default() {
            warn!("using custom hostnames: {:?}", config.hostname_config);
        }
        Ok(config)
    }
}

/// The host application's identifier: the running executable's name.
fn default_keychain_service() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|path| path.file_stem().map(|stem| stem.to_string_lossy().into_owned()))
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_app_auth_header() {
        let config = TransportDefaultConfig::with_app_secret("key", "secret").unwrap();
        // base64("key:secret")
        assert_eq!(Some("Basic a2V5OnNlY3JldA=="), config.app_auth_header().as_deref());

        let config = TransportDefaultConfig::new("key").unwrap();
        assert_eq!(None, config.app_auth_header());
    }

    #[test]
    fn test_default_user_agent() {
        let config = TransportDefaultConfig::new("key").unwrap();
        assert_eq!(
            format!("Dropbox-SDK-Rust-Transport/{}", env!("CARGO_PKG_VERSION")),
            config.user_agent_header());
    }

    #[test]
    fn test_team_select_from_member_id() {
        let config = TransportDefaultConfig::new("key").unwrap();
        assert_eq!(None, config.team_select());

        let config = TransportDefaultConfig::builder("key").as_member_id("dbmid:9").build().unwrap();
        let select = config.team_select().unwrap();
        assert_eq!(TeamSelect::User("dbmid:9".to_owned()), select);
        assert_eq!("Dropbox-API-Select-User", select.header_name());
        assert_eq!("dbmid:9", select.id());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = TransportDefaultConfig::with_app_secret("key", "hunter2").unwrap();
        let s = format!("{config:?}");
        assert!(!s.contains("hunter2"), "{s}");
        assert!(s.contains("<redacted>"), "{s}");
    }

    #[test]
    fn test_default_keychain_service() {
        let config = TransportDefaultConfig::new("key").unwrap();
        assert_eq!(None, config.keychain_service());
        assert!(!config.keychain_service_name().is_empty());

        let config = TransportDefaultConfig::builder("key")
            .keychain_service("group.shared")
            .build()
            .unwrap();
        assert_eq!("group.shared", config.keychain_service_name());
    }
}
