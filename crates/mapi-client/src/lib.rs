//! Transport, dispatch and client facade for the merchant API.
//!
//! ```text
//! MapiClient::call ──validate──▶ MapiRequest ──AuthStrategy::prepare──▶
//!     Transport::dispatch_request (60 s deadline) ──▶ MapiResponse | ApiError
//! ```
//!
//! [`dispatch`] is the single entry point that authenticates, sends and
//! normalizes one request. [`MapiClient`] adds base URL resolution, default
//! headers and schema validation on top. [`ReqwestTransport`] is the bundled
//! HTTP transport; tests and embedders can plug in their own [`Transport`].

pub mod attachment;
pub mod client;
pub mod dispatch;
pub mod error;
pub mod reqwest_transport;
pub mod transport;

pub use attachment::upload_attachment;
pub use client::{MAPI_MEDIA_TYPE, MapiClient};
pub use dispatch::{DISPATCH_DEADLINE, dispatch};
pub use error::{ApiError, MapiError, MapiResult, TransportError};
pub use reqwest_transport::ReqwestTransport;
pub use transport::{Attachment, RawResponse, Transport, TransportRequest};

pub use mapi_auth::{AuthStrategy, OpenAuth, RsaSha256Auth, SecretAuth};
pub use mapi_core::{Headers, MapiConfig, MapiRequest, MapiResponse};
pub use mapi_model::{MapiOperation, ValidationError};
