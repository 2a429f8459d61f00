//! Prepare, send and normalize a single request.

use std::time::Duration;

use mapi_auth::PrepareRequest;
use mapi_core::{MapiRequest, MapiResponse};
use tracing::debug;

use crate::error::{ApiError, MapiResult, TransportError};
use crate::transport::{Attachment, Transport, TransportRequest};

/// Upper bound on every transport call.
pub const DISPATCH_DEADLINE: Duration = Duration::from_secs(60);

/// Authenticate `request` with `auth` and send it once through `transport`.
///
/// The call is bounded by [`DISPATCH_DEADLINE`]. The body is decoded as UTF-8
/// and any non-2xx status is returned as [`ApiError`]. Nothing is retried.
///
/// # Errors
///
/// - [`MapiError::Auth`](crate::MapiError::Auth) if the strategy cannot sign
/// - [`MapiError::Transport`](crate::MapiError::Transport) on network failure or timeout
/// - [`MapiError::Encoding`](crate::MapiError::Encoding) if the body is not UTF-8
/// - [`MapiError::Api`](crate::MapiError::Api) for non-2xx statuses
pub async fn dispatch<A>(
    transport: &dyn Transport,
    auth: &A,
    request: MapiRequest,
) -> MapiResult<MapiResponse>
where
    A: PrepareRequest + ?Sized,
{
    send(transport, auth, request, None).await
}

pub(crate) async fn send<A>(
    transport: &dyn Transport,
    auth: &A,
    request: MapiRequest,
    attachment: Option<Attachment>,
) -> MapiResult<MapiResponse>
where
    A: PrepareRequest + ?Sized,
{
    let request = auth.prepare(request)?;
    debug!(
        method = %request.method,
        url = %request.url,
        multipart = attachment.is_some(),
        "dispatching request"
    );

    let call = transport.dispatch_request(TransportRequest {
        request,
        deadline: DISPATCH_DEADLINE,
        attachment,
    });
    let raw = tokio::time::timeout(DISPATCH_DEADLINE, call)
        .await
        .map_err(|_| TransportError::Timeout(DISPATCH_DEADLINE))??;

    let response = MapiResponse::from_raw(raw.status, raw.headers, raw.body)?;
    debug!(status = response.status, "received response");

    if !response.is_success() {
        let MapiResponse {
            status,
            headers,
            body,
        } = response;
        return Err(ApiError {
            status,
            headers,
            body,
        }
        .into());
    }
    Ok(response)
}
