//! Error types surfaced by the client.

use std::time::Duration;

use mapi_core::Headers;

/// Top-level error for every client operation.
#[derive(Debug, thiserror::Error)]
pub enum MapiError {
    /// The auth strategy could not be built or could not sign.
    #[error(transparent)]
    Auth(#[from] mapi_auth::AuthError),

    /// The payload failed its operation's schema.
    #[error(transparent)]
    Validation(#[from] mapi_model::ValidationError),

    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body is not valid UTF-8.
    #[error(transparent)]
    Encoding(#[from] mapi_core::EncodingError),

    /// Configuration is incomplete or inconsistent.
    #[error(transparent)]
    Config(#[from] mapi_core::ConfigError),

    /// The payload could not be serialized.
    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The base URL or request path does not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The private key file could not be read.
    #[error("Failed to read private key {path}: {source}")]
    KeyFile {
        /// Path that was read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// A non-2xx response, carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("API returned status {status}: {body}")]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: Headers,
    /// Response body.
    pub body: String,
}

/// Failures below the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// No response arrived before the deadline.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection, TLS or protocol failure.
    #[error("Request failed: {0}")]
    Request(String),

    /// The request could not be turned into an HTTP request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Convenience alias for client results.
pub type MapiResult<T> = Result<T, MapiError>;
