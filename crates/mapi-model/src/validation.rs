//! Payload validation entry point.

use serde_json::Value;

use crate::error::ValidationError;
use crate::operations::MapiOperation;

/// Validate `payload` against the schema of `operation`.
///
/// All violations are collected; the call fails if there is at least one.
///
/// # Errors
///
/// Returns [`ValidationError`] listing every offending field.
pub fn validate(operation: MapiOperation, payload: &Value) -> Result<(), ValidationError> {
    let violations = operation.schema().check(payload);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError {
            operation,
            violations,
        })
    }
}
