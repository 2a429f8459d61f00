//! Core types and configuration for the merchant API client.
//!
//! This crate provides the building blocks shared by the signing, validation
//! and transport crates: the case-preserving [`Headers`] map, the plain-data
//! [`MapiRequest`] / [`MapiResponse`] pair, and environment-driven
//! [`MapiConfig`].

mod config;
mod error;
mod request;
mod types;

pub use config::{AuthMethod, MapiConfig};
pub use error::{ConfigError, EncodingError};
pub use request::{MapiRequest, MapiResponse};
pub use types::Headers;
