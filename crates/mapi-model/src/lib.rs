//! Operation catalogue and payload validation for the merchant API.
//!
//! Every write operation the client can send is a [`MapiOperation`] variant.
//! Each variant resolves, through an exhaustive `match`, to a statically
//! defined [`Schema`] describing the JSON fields it accepts. Payloads are
//! validated before a request is built, so an invalid payload never reaches
//! the network.
//!
//! ```rust
//! use mapi_model::{MapiOperation, validate};
//! use serde_json::json;
//!
//! let payload = json!({"currency": "NOK", "description": "Daily takings"});
//! assert!(validate(MapiOperation::CreateLedger, &payload).is_ok());
//!
//! let err = validate(MapiOperation::CreateLedger, &json!({"description": 5})).unwrap_err();
//! assert_eq!(err.fields(), ["currency", "description"]);
//! ```

pub mod error;
pub mod operations;
pub mod schema;
mod schemas;
pub mod validation;

pub use error::{ValidationError, Violation, ViolationKind};
pub use operations::MapiOperation;
pub use schema::{Field, Rule, Schema};
pub use validation::validate;
