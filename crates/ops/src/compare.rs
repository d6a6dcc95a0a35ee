//! Value comparison for filters
//!
//! `==` is full structural equality on any pair of values. Ordering
//! (`<`, `>`, `<=`, `>=`) only exists between two numbers of the same kind;
//! every other pairing, including mismatched kinds, compares false.

use seqkit_core::{CompareOp, Value};
use std::cmp::Ordering;

/// Evaluate `a <op> b`
///
/// `CompareOp::NoOp` is false for every pair.
pub fn compare_values(a: &Value, b: &Value, op: CompareOp) -> bool {
    match op {
        CompareOp::Eq => equal(a, b),
        CompareOp::Lt => less_than(a, b),
        CompareOp::Gt => greater_than(a, b),
        CompareOp::Le => less_than(a, b) || equal(a, b),
        CompareOp::Ge => greater_than(a, b) || equal(a, b),
        CompareOp::NoOp => false,
    }
}

/// Structural equality
pub fn equal(a: &Value, b: &Value) -> bool {
    a == b
}

/// `a < b` for same-kind numbers, false otherwise
pub fn less_than(a: &Value, b: &Value) -> bool {
    numeric_ordering(a, b) == Some(Ordering::Less)
}

/// `a > b` for same-kind numbers, false otherwise
pub fn greater_than(a: &Value, b: &Value) -> bool {
    numeric_ordering(a, b) == Some(Ordering::Greater)
}

fn numeric_ordering(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.partial_cmp(y),
        _ => None,
    }
}
