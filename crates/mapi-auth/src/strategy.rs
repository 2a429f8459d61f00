//! The request preparation contract and the closed set of strategies.

use mapi_core::MapiRequest;

use crate::error::AuthError;
use crate::open::OpenAuth;
use crate::rsa_sha256::RsaSha256Auth;
use crate::secret::SecretAuth;

/// Name of the header every authenticating strategy sets.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Attach authentication material to a request.
///
/// Implementations take the request by value and return it with extra headers.
/// They never change the method, URL or body, and they hold no mutable state,
/// so one instance may prepare requests from many tasks at once.
pub trait PrepareRequest: Send + Sync {
    /// Return `request` with authentication headers attached.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Signing`] if a signature cannot be produced.
    fn prepare(&self, request: MapiRequest) -> Result<MapiRequest, AuthError>;
}

/// One of the three supported authentication strategies.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// No authentication.
    Open(OpenAuth),
    /// `Authorization: SECRET <secret>`.
    Secret(SecretAuth),
    /// RSA-SHA256 canonical request signing.
    RsaSha256(RsaSha256Auth),
}

impl AuthStrategy {
    /// Short name of the strategy, for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open(_) => "open",
            Self::Secret(_) => "secret",
            Self::RsaSha256(_) => "rsa-sha256",
        }
    }
}

impl Default for AuthStrategy {
    fn default() -> Self {
        Self::Open(OpenAuth)
    }
}

impl PrepareRequest for AuthStrategy {
    fn prepare(&self, request: MapiRequest) -> Result<MapiRequest, AuthError> {
        match self {
            Self::Open(auth) => auth.prepare(request),
            Self::Secret(auth) => auth.prepare(request),
            Self::RsaSha256(auth) => auth.prepare(request),
        }
    }
}

impl From<OpenAuth> for AuthStrategy {
    fn from(auth: OpenAuth) -> Self {
        Self::Open(auth)
    }
}

impl From<SecretAuth> for AuthStrategy {
    fn from(auth: SecretAuth) -> Self {
        Self::Secret(auth)
    }
}

impl From<RsaSha256Auth> for AuthStrategy {
    fn from(auth: RsaSha256Auth) -> Self {
        Self::RsaSha256(auth)
    }
}
