//! Request authentication for the merchant API.
//!
//! Every outgoing request passes through exactly one [`AuthStrategy`] before it
//! reaches a transport. The strategies are interchangeable through the
//! [`PrepareRequest`] trait:
//!
//! - [`OpenAuth`] leaves the request untouched.
//! - [`SecretAuth`] sets `Authorization: SECRET <secret>`.
//! - [`RsaSha256Auth`] stamps `X-Mcash-Timestamp` and `X-Mcash-Content-Digest`,
//!   builds the canonical signing input and sets
//!   `Authorization: RSA-SHA256 <signature>`.
//!
//! # Usage
//!
//! ```rust
//! use mapi_auth::{AuthStrategy, PrepareRequest, SecretAuth};
//! use mapi_core::MapiRequest;
//!
//! let auth = AuthStrategy::from(SecretAuth::new("s3cr3t-token").unwrap());
//! let request = MapiRequest::new("GET", "https://api.example.com/v1/pos/");
//! let prepared = auth.prepare(request).unwrap();
//! assert_eq!(prepared.headers.get("Authorization"), Some("SECRET s3cr3t-token"));
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Canonical signing input construction
//! - [`clock`] - Injectable timestamp sources
//! - [`digest`] - Timestamp and content digest header values
//! - [`error`] - Authentication error types
//! - [`open`] / [`secret`] / [`rsa_sha256`] - The three strategies
//! - [`strategy`] - The `PrepareRequest` contract and the `AuthStrategy` enum
//! - [`verify`] - Server-side verification of RSA-SHA256 signed requests

pub mod canonical;
pub mod clock;
pub mod digest;
pub mod error;
pub mod open;
pub mod rsa_sha256;
pub mod secret;
pub mod strategy;
pub mod verify;

pub use clock::{Clock, FixedClock, LocalClock};
pub use error::AuthError;
pub use open::OpenAuth;
pub use rsa_sha256::RsaSha256Auth;
pub use secret::SecretAuth;
pub use strategy::{AUTHORIZATION_HEADER, AuthStrategy, PrepareRequest};
pub use verify::{RsaSha256Verifier, Verification};
