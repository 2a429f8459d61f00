//! [`Transport`] implementation backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use mapi_core::Headers;
use reqwest::Method;
use reqwest::multipart::{Form, Part};

use crate::error::TransportError;
use crate::transport::{RawResponse, Transport, TransportRequest};

/// Sends requests with a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a default client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing client, e.g. one with custom TLS roots.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn dispatch_request(
        &self,
        request: TransportRequest,
    ) -> Result<RawResponse, TransportError> {
        let TransportRequest {
            request,
            deadline,
            attachment,
        } = request;

        let method = Method::from_bytes(request.method.to_ascii_uppercase().as_bytes())
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        let mut builder = self
            .client
            .request(method, request.url.as_str())
            .timeout(deadline);

        for (name, value) in request.headers.iter() {
            // reqwest computes the multipart boundary itself.
            if attachment.is_some() && name.eq_ignore_ascii_case("content-type") {
                continue;
            }
            builder = builder.header(name, value);
        }

        builder = match attachment {
            Some(attachment) => {
                let part = Part::bytes(attachment.data.to_vec())
                    .file_name(attachment.filename)
                    .mime_str(&attachment.mime_type)
                    .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
                builder.multipart(Form::new().part(attachment.field, part))
            }
            None => match request.body {
                Some(body) => builder.body(body),
                None => builder,
            },
        };

        let response = builder
            .send()
            .await
            .map_err(|e| map_reqwest_error(&e, deadline))?;

        let status = response.status().as_u16();
        let headers: Headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_owned(), value.to_owned()))
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| map_reqwest_error(&e, deadline))?;

        Ok(RawResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}

fn map_reqwest_error(err: &reqwest::Error, deadline: Duration) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(deadline)
    } else if err.is_builder() {
        TransportError::InvalidRequest(err.to_string())
    } else {
        TransportError::Request(err.to_string())
    }
}
