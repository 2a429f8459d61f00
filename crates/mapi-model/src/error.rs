//! Validation error types.

use std::fmt;

use crate::operations::MapiOperation;

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViolationKind {
    /// A required field is absent (or `null`).
    #[error("required field is missing")]
    Missing,
    /// The field is not declared by the schema.
    #[error("extra keys not allowed")]
    Unexpected,
    /// Wrong JSON type.
    #[error("expected {0}")]
    WrongType(&'static str),
    /// String shorter than the minimum length.
    #[error("length must be at least {0}")]
    TooShort(usize),
    /// String longer than the maximum length.
    #[error("length must be at most {0}")]
    TooLong(usize),
    /// Integer outside the allowed range.
    #[error("value must be between {min} and {max}")]
    OutOfRange {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
    /// String not among the allowed values.
    #[error("value must be one of {}", .0.join(", "))]
    NotOneOf(&'static [&'static str]),
}

/// One offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path to the field, e.g. `line_items[0].total`.
    pub path: String,
    /// What is wrong with it.
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "payload: {}", self.kind)
        } else {
            write!(f, "{}: {}", self.path, self.kind)
        }
    }
}

/// A payload failed its operation's schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The operation whose schema was applied.
    pub operation: MapiOperation,
    /// Every offending field, in the order they were found.
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// Paths of the offending fields.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.path.as_str()).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid payload for {}: ", self.operation)?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
