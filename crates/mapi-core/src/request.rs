//! Plain-data request and response values.
//!
//! A [`MapiRequest`] is built by the client, passed by value through an auth
//! strategy (which returns a copy with authentication headers attached) and
//! then handed to a transport. A [`MapiResponse`] is created once per
//! dispatch from the transport's raw status, headers and body bytes.

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::error::EncodingError;
use crate::types::Headers;

/// An outgoing HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapiRequest {
    /// HTTP verb as supplied by the caller (any case).
    pub method: String,
    /// Absolute request URL.
    pub url: String,
    /// Request headers.
    pub headers: Headers,
    /// Request body, if any.
    pub body: Option<Bytes>,
}

impl MapiRequest {
    /// Create a request with no headers and no body.
    #[must_use]
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    /// Replace the header map.
    #[must_use]
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Add or replace a single header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set the request body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The body bytes, or an empty slice when the request has no body.
    #[must_use]
    pub fn body_bytes(&self) -> &[u8] {
        self.body.as_deref().unwrap_or(&[])
    }
}

/// A response normalized from the transport's raw output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: Headers,
    /// Response body decoded as UTF-8.
    pub body: String,
}

impl MapiResponse {
    /// Build a response from raw transport output, decoding the body as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError`] if `body` is not valid UTF-8. Invalid bytes
    /// are never replaced silently.
    pub fn from_raw(status: u16, headers: Headers, body: Vec<u8>) -> Result<Self, EncodingError> {
        let body = String::from_utf8(body).map_err(|source| EncodingError { status, source })?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
