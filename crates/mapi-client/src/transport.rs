//! The pluggable transport seam.
//!
//! The dispatch layer hands a fully authenticated [`TransportRequest`] to a
//! [`Transport`] and gets raw status, headers and body bytes back. Transports
//! never see the auth strategy and never interpret the status code.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use mapi_core::{Headers, MapiRequest};

use crate::error::TransportError;

/// A file sent as one part of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Form field name.
    pub field: String,
    /// File name reported in the part's `Content-Disposition`.
    pub filename: String,
    /// MIME type of the part.
    pub mime_type: String,
    /// Raw file contents.
    pub data: Bytes,
}

/// Everything a transport needs to perform one HTTP exchange.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// The already prepared request.
    pub request: MapiRequest,
    /// Upper bound on the whole exchange.
    pub deadline: Duration,
    /// Multipart file part; when present it replaces `request.body`.
    pub attachment: Option<Attachment>,
}

/// Raw transport output, before UTF-8 decoding and status classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: Headers,
    /// Undecoded body bytes.
    pub body: Vec<u8>,
}

/// Sends a prepared request over the wire.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Perform exactly one HTTP exchange.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no response is obtained. Non-2xx
    /// statuses are not errors at this layer.
    async fn dispatch_request(&self, request: TransportRequest)
    -> Result<RawResponse, TransportError>;
}
