use thiserror::Error;

/// Errors raised while loading SDK configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("missing configuration value: {0}")]
    Missing(&'static str),
    /// A configuration value could not be interpreted
    #[error("invalid value for {key}: {reason}")]
    Invalid {
        /// The offending configuration key
        key: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// Errors raised while reading claims out of a bearer token.
///
/// The audit path swallows these and records a `null` user identifier.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token is not a three-segment compact JWS
    #[error("token must have three dot-separated segments, found {0}")]
    Malformed(usize),
    /// The payload segment is not valid base64url
    #[error("token payload is not valid base64url")]
    Encoding(#[from] base64::DecodeError),
    /// The payload is not a JSON object
    #[error("token payload is not a JSON object")]
    Claims(#[source] Option<serde_json::Error>),
}

/// Errors raised while turning an endpoint descriptor into an HTTP request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The base URL and path could not be joined into a valid URL
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
    /// The assembled request was rejected by the `http` crate
    #[error("invalid http request: {0}")]
    Http(#[from] http::Error),
    /// The JSON body could not be serialized
    #[error("failed to encode request body: {0}")]
    Body(#[from] serde_json::Error),
}
