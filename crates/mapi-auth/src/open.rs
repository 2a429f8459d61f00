//! The no-op strategy, used for anonymous endpoints such as attachment upload.

use mapi_core::MapiRequest;

use crate::error::AuthError;
use crate::strategy::PrepareRequest;

/// Attaches no authentication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenAuth;

impl PrepareRequest for OpenAuth {
    fn prepare(&self, request: MapiRequest) -> Result<MapiRequest, AuthError> {
        Ok(request)
    }
}
