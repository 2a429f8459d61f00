//! Shared-secret authentication.

use std::fmt;

use mapi_core::MapiRequest;

use crate::error::AuthError;
use crate::strategy::{AUTHORIZATION_HEADER, PrepareRequest};

/// Sets `Authorization: SECRET <secret>`. No timestamp, no canonicalization.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretAuth {
    secret: String,
}

impl SecretAuth {
    /// Create the strategy.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::EmptySecret`] if `secret` is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, AuthError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(AuthError::EmptySecret);
        }
        Ok(Self { secret })
    }
}

impl fmt::Debug for SecretAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretAuth")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl PrepareRequest for SecretAuth {
    fn prepare(&self, request: MapiRequest) -> Result<MapiRequest, AuthError> {
        Ok(request.with_header(AUTHORIZATION_HEADER, format!("SECRET {}", self.secret)))
    }
}
