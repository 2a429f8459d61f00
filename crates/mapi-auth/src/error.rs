//! Error types for request authentication.
//!
//! Construction and signing failures are fatal: callers surface them and never
//! retry. The verification variants are produced by
//! [`RsaSha256Verifier`](crate::RsaSha256Verifier).

/// Errors that can occur while preparing or verifying an authenticated request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A shared-secret strategy was constructed with an empty secret.
    #[error("shared secret must not be empty")]
    EmptySecret,

    /// The key material could not be parsed as a valid RSA key.
    #[error("invalid RSA key material: {0}")]
    KeyFormat(String),

    /// The RSA signing operation failed.
    #[error("RSA-SHA256 signing failed: {0}")]
    Signing(String),

    /// A header required for verification is missing.
    #[error("missing required header: {0}")]
    MissingHeader(String),

    /// The `Authorization` header uses a scheme other than `RSA-SHA256`.
    #[error("unsupported authorization scheme: {0}")]
    UnsupportedScheme(String),

    /// The `Authorization` header could not be decoded.
    #[error("invalid Authorization header format")]
    InvalidAuthHeader,

    /// The content digest header does not match the request body.
    #[error("content digest does not match request body")]
    DigestMismatch,

    /// The signature does not verify against the public key.
    #[error("signature does not match")]
    SignatureDoesNotMatch,
}
