//! seqkit - generic operations over homogeneous sequences
//!
//! Filter, fold, reverse, shuffle and pop for sequences of numbers and
//! records, with the element kind selecting comparison and arithmetic.
//!
//! # Quick Start
//!
//! ```
//! use seqkit::{filter, reduce_by_field, ArithOp, CompareOp, NumericValue, Record, Value};
//!
//! let mut orders: Value = [3i64, 12, 7]
//!     .iter()
//!     .map(|&qty| Record::new().with("qty", qty))
//!     .collect();
//!
//! filter(&mut orders, "qty", CompareOp::Gt, &Value::from(5i64))?;
//! let total = reduce_by_field(&orders, "qty", ArithOp::Add)?;
//! assert_eq!(total, Some(NumericValue::I64(19)));
//! # Ok::<(), seqkit::OperationError>(())
//! ```
//!
//! # Architecture
//!
//! - `seqkit-core`: value model, numeric kinds, operators, errors, config
//! - `seqkit-ops`: the operations themselves
//!
//! Both are re-exported here; depend on this crate only.

pub use seqkit_core::*;
pub use seqkit_ops::*;
