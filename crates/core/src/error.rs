//! Error types for sequence operations
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Conditions that are deliberately NOT errors:
//! - an unrecognized operator token (`NoOp`)
//! - popping an empty sequence or a handle that is not a sequence
//! - reducing an empty sequence, a non-sequence, or a non-numeric element

use crate::kind::NumericKind;
use thiserror::Error;

/// Result type alias for sequence operations
pub type Result<T> = std::result::Result<T, OperationError>;

/// Error types for sequence operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    /// The handle or element does not have the expected shape
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// What the operation required
        expected: String,
        /// What it was given
        found: String,
    },

    /// An element does not expose the named field
    #[error("Field not found: '{field}' on element {index}")]
    FieldNotFound {
        /// Requested field name
        field: String,
        /// Position of the offending element
        index: usize,
    },

    /// Integer division by zero during a fold
    #[error("Division by zero in {kind} fold")]
    DivisionByZero {
        /// Integer kind being folded
        kind: NumericKind,
    },

    /// Configuration could not be parsed or serialized
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl OperationError {
    /// Build a `TypeMismatch`
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        OperationError::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Build a `FieldNotFound`
    pub fn field_not_found(field: impl Into<String>, index: usize) -> Self {
        OperationError::FieldNotFound {
            field: field.into(),
            index,
        }
    }

    /// Check if this is a `TypeMismatch`
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, OperationError::TypeMismatch { .. })
    }

    /// Check if this is a `FieldNotFound`
    pub fn is_field_not_found(&self) -> bool {
        matches!(self, OperationError::FieldNotFound { .. })
    }

    /// Check if this is a `DivisionByZero`
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, OperationError::DivisionByZero { .. })
    }
}

impl From<toml::de::Error> for OperationError {
    fn from(e: toml::de::Error) -> Self {
        OperationError::InvalidConfig(e.to_string())
    }
}

impl From<toml::ser::Error> for OperationError {
    fn from(e: toml::ser::Error) -> Self {
        OperationError::InvalidConfig(e.to_string())
    }
}
