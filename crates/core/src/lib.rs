//! Core types and traits for seqkit
//!
//! This crate defines the foundational types used by the sequence operations:
//! - NumericKind: the twelve supported numeric kinds
//! - NumericValue / Numeric: tagged numbers and the sealed primitive trait
//! - Value / Record: dynamic sequence handles and record elements
//! - Fields: named field access (plus the `impl_fields!` macro)
//! - CompareOp / ArithOp: operator tokens with an explicit `NoOp`
//! - OperationError: error type hierarchy
//! - SeqConfig: TOML-loadable operation settings
//!
//! Sequences are not synchronized. A caller mutating a sequence from several
//! threads must serialize access itself.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod config;
pub mod error;
pub mod fields;
pub mod kind;
pub mod numeric;
pub mod operator;
pub mod value;

// Re-export commonly used types and traits
pub use config::{MissingField, SeqConfig};
pub use error::{OperationError, Result};
pub use fields::Fields;
pub use kind::NumericKind;
pub use numeric::{Numeric, NumericValue};
pub use operator::{ArithOp, CompareOp};
pub use value::{Record, Value};
