// Copyright (c) 2019-2021 Dropbox, Inc.

/// Why a response could not be turned into the route's result.
///
/// A route that ran and reported its own failure (HTTP 409) is [`Error::Api`]; everything else
/// here is a problem with the exchange itself, or a response this crate could not make sense of.
#[derive(thiserror::Error, Debug)]
pub enum Error<E = NoError> {
    /// The route's own error, decoded from the `{"error": ...}` envelope.
    #[error("Dropbox API endpoint returned an error: {0}")]
    Api(#[source] E),

    /// The body was not JSON at all, or was cut short.
    #[error("malformed JSON in response: {0}")]
    Json(#[from] serde_json::Error),

    /// The body was valid JSON, but did not have the shape of the type it was decoded into.
    #[error("response did not match the expected type: {0}")]
    UnexpectedResponse(String),

    /// HTTP 400: the server could not make sense of the request. The body is plain text.
    #[error("Dropbox API indicated that the request was malformed: {0}")]
    BadRequest(String),

    /// HTTP 429. The request can be retried once `retry_after_seconds` have passed.
    #[error("Dropbox API declined the request due to rate-limiting ({reason}), \
        retry after {retry_after_seconds}s")]
    RateLimited {
        /// Tag of the server's rate-limit reason union, e.g. `too_many_requests`.
        reason: String,

        /// Zero when the server did not say.
        retry_after_seconds: u32,
    },

    /// HTTP 5xx.
    #[error("Dropbox API had an internal server error: {0}")]
    ServerError(String),

    /// Any status not covered above.
    #[error("Dropbox API returned HTTP {code} - {response}")]
    UnexpectedHttpError {
        code: u16,
        response: String,
    },
}

/// An [`Error`] whose route error is a boxed trait object, for code that handles errors from
/// several routes at once. Use [`Error::downcast_ref_inner`] to get at the concrete type.
pub type BoxedError = Error<Box<dyn std::error::Error + Send + Sync>>;

impl<E> Error<E> {
    /// Convert the route error, if there is one, leaving every other variant as it is.
    pub fn map_api<E2>(self, f: impl FnOnce(E) -> E2) -> Error<E2> {
        match self {
            Error::Api(e) => Error::Api(f(e)),
            Error::Json(e) => Error::Json(e),
            Error::UnexpectedResponse(e) => Error::UnexpectedResponse(e),
            Error::BadRequest(e) => Error::BadRequest(e),
            Error::RateLimited { reason, retry_after_seconds } => {
                Error::RateLimited { reason, retry_after_seconds }
            }
            Error::ServerError(e) => Error::ServerError(e),
            Error::UnexpectedHttpError { code, response } => {
                Error::UnexpectedHttpError { code, response }
            }
        }
    }
}

impl<E: std::error::Error + 'static> Error<E> {
    /// Find the first error of type `E2` in this error's `source()` chain, starting with itself.
    pub fn downcast_ref_inner<E2: std::error::Error + 'static>(&self) -> Option<&E2> {
        let mut inner = Some(self as &dyn std::error::Error);
        while let Some(e) = inner {
            if let Some(e) = e.downcast_ref() {
                return Some(e);
            }
            inner = e.source();
        }
        None
    }

    pub fn boxed(self) -> BoxedError
        where E: Send + Sync,
    {
        self.map_api(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
    }
}

impl Error<NoError> {
    /// Give an error from a route that can't fail any route error type.
    ///
    /// A blanket `From` impl would overlap with the reflexive one when `E` is `NoError`.
    pub fn typed<E>(self) -> Error<E> {
        self.map_api(|e| unreachable(e))
    }
}

/// The route error type of routes that have none. It has no values.
#[derive(Copy, Clone)]
pub enum NoError {}

impl PartialEq<NoError> for NoError {
    fn eq(&self, _: &NoError) -> bool {
        unreachable(*self)
    }
}

impl std::error::Error for NoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        unreachable(*self)
    }
}

impl std::fmt::Debug for NoError {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        unreachable(*self)
    }
}

impl std::fmt::Display for NoError {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        unreachable(*self)
    }
}

// A 409 from a route with no error type still has to go through the envelope decoder, which then
// fails here.
impl<'de> serde::de::Deserialize<'de> for NoError {
    fn deserialize<D: serde::de::Deserializer<'de>>(_: D)
        -> Result<Self, D::Error>
    {
        Err(serde::de::Error::custom(
            "method has no defined error type, but an error was returned"))
    }
}

#[inline(always)]
fn unreachable(x: NoError) -> ! {
    match x {}
}
