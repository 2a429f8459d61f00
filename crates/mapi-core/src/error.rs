//! Error types for the core crate.

/// Configuration could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `MAPI_AUTH` named a strategy that does not exist.
    #[error("unknown auth method: {0} (expected open, secret or rsa)")]
    UnknownAuthMethod(String),

    /// A variable required by the selected auth method is not set.
    #[error("missing configuration variable: {0}")]
    Missing(&'static str),
}

/// The response body was not valid UTF-8.
#[derive(Debug, thiserror::Error)]
#[error("response body is not valid UTF-8 (status {status}): {source}")]
pub struct EncodingError {
    /// HTTP status of the offending response.
    pub status: u16,
    /// Underlying decode failure.
    #[source]
    pub source: std::string::FromUtf8Error,
}
