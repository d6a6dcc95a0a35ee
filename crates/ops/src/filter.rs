//! In-place filtering of record sequences
//!
//! A filter keeps exactly the elements whose named field satisfies
//! `field <op> comparand`, in their original order. Surviving elements are
//! retained where they are; nothing is cloned.
//!
//! Filtering is defined for record sequences only. A sequence of plain
//! numbers has no fields, so every element reports `FieldNotFound`.
//!
//! The keep-mask is computed before anything is removed, so a
//! `FieldNotFound` leaves the sequence exactly as it was.

use crate::compare::compare_values;
use seqkit_core::{CompareOp, Fields, MissingField, OperationError, Result, SeqConfig, Value};
use tracing::debug;

/// Filter a dynamic sequence handle with the default config
///
/// # Errors
///
/// - `TypeMismatch` if `seq` is not `Value::Array`
/// - `FieldNotFound` for the first element lacking `field`
pub fn filter(seq: &mut Value, field: &str, op: CompareOp, comparand: &Value) -> Result<()> {
    filter_with(seq, field, op, comparand, &SeqConfig::default())
}

/// Filter a dynamic sequence handle
///
/// # Errors
///
/// - `TypeMismatch` if `seq` is not `Value::Array`
/// - `FieldNotFound` for the first element lacking `field`, unless
///   `config.missing_field` is `Skip`
pub fn filter_with(
    seq: &mut Value,
    field: &str,
    op: CompareOp,
    comparand: &Value,
    config: &SeqConfig,
) -> Result<()> {
    let found = seq.type_name();
    match seq {
        Value::Array(items) => filter_vec_with(items, field, op, comparand, config),
        _ => Err(OperationError::type_mismatch("Array", found)),
    }
}

/// Filter a typed record sequence with the default config
///
/// # Errors
///
/// Returns `FieldNotFound` for the first element lacking `field`.
pub fn filter_vec<T: Fields>(
    seq: &mut Vec<T>,
    field: &str,
    op: CompareOp,
    comparand: &Value,
) -> Result<()> {
    filter_vec_with(seq, field, op, comparand, &SeqConfig::default())
}

/// Filter a typed record sequence
///
/// # Errors
///
/// Returns `FieldNotFound` for the first element lacking `field`, unless
/// `config.missing_field` is `Skip`.
pub fn filter_vec_with<T: Fields>(
    seq: &mut Vec<T>,
    field: &str,
    op: CompareOp,
    comparand: &Value,
    config: &SeqConfig,
) -> Result<()> {
    let keep = seq
        .iter()
        .enumerate()
        .map(|(index, element)| match element.field(field) {
            Some(value) => Ok(compare_values(&value, comparand, op)),
            None => match config.missing_field {
                MissingField::Error => Err(OperationError::field_not_found(field, index)),
                MissingField::Skip => Ok(false),
            },
        })
        .collect::<Result<Vec<bool>>>()?;

    let total = seq.len();
    let mut mask = keep.into_iter();
    seq.retain(|_| mask.next().unwrap_or(false));

    debug!(field, %op, kept = seq.len(), total, "filtered sequence");
    Ok(())
}
