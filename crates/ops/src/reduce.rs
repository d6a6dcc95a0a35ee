//! Left folds over numeric sequences
//!
//! ## Entry Points
//!
//! | Input | Generic | Dispatching | Specialized |
//! |-------|---------|-------------|-------------|
//! | numbers | [`fold`] | [`reduce`] | `reduce_i8` .. `reduce_f64` |
//! | record field | [`fold_by_field`] | [`reduce_by_field`], [`reduce_records_by_field`] | `reduce_i8_by_field` .. `reduce_f64_by_field` |
//!
//! The specialized functions are instantiations of the generic folds; the
//! dispatching functions pick the instantiation from the first element's
//! kind with a single match over `NumericKind`.
//!
//! ## Semantics
//!
//! `acc = items[0]; for x in items[1..]: acc = acc <op> x`
//!
//! - Empty input, a non-array handle, or a non-numeric first element
//!   yields `Ok(None)`
//! - `ArithOp::NoOp` leaves `acc` unchanged at every step
//! - Integer division by zero is `DivisionByZero`
//! - An element whose kind differs from the first is `TypeMismatch`

use seqkit_core::{
    ArithOp, Fields, Numeric, NumericKind, NumericValue, OperationError, Result, Value,
};
use tracing::{debug, trace};

/// Run `$body` with `$t` bound to the Rust type of `$kind`
macro_rules! dispatch_kind {
    ($kind:expr, $t:ident => $body:expr) => {
        match $kind {
            NumericKind::I8 => {
                type $t = i8;
                $body
            }
            NumericKind::I16 => {
                type $t = i16;
                $body
            }
            NumericKind::I32 => {
                type $t = i32;
                $body
            }
            NumericKind::I64 => {
                type $t = i64;
                $body
            }
            NumericKind::Isize => {
                type $t = isize;
                $body
            }
            NumericKind::U8 => {
                type $t = u8;
                $body
            }
            NumericKind::U16 => {
                type $t = u16;
                $body
            }
            NumericKind::U32 => {
                type $t = u32;
                $body
            }
            NumericKind::U64 => {
                type $t = u64;
                $body
            }
            NumericKind::Usize => {
                type $t = usize;
                $body
            }
            NumericKind::F32 => {
                type $t = f32;
                $body
            }
            NumericKind::F64 => {
                type $t = f64;
                $body
            }
        }
    };
}

fn fold_iter<T: Numeric>(
    mut values: impl Iterator<Item = Result<T>>,
    op: ArithOp,
) -> Result<Option<T>> {
    let first = match values.next() {
        Some(first) => first?,
        None => return Ok(None),
    };
    let acc = values.try_fold(first, |acc, next| acc.apply(next?, op))?;
    Ok(Some(acc))
}

fn number_as<T: Numeric>(value: &Value) -> Result<T> {
    value
        .as_number()
        .and_then(T::from_value)
        .ok_or_else(|| OperationError::type_mismatch(T::KIND.name(), value.type_name()))
}

fn field_as<T: Numeric, R: Fields>(element: &R, field: &str, index: usize) -> Result<T> {
    let value = element
        .field(field)
        .ok_or_else(|| OperationError::field_not_found(field, index))?;
    number_as(&value)
}

// ============================================================================
// Generic folds
// ============================================================================

/// Fold a typed numeric slice
///
/// # Errors
///
/// Returns `DivisionByZero` for integer division by zero.
pub fn fold<T: Numeric>(items: &[T], op: ArithOp) -> Result<Option<T>> {
    fold_iter(items.iter().copied().map(Ok), op)
}

/// Fold the named numeric field of a record slice
///
/// # Errors
///
/// - `FieldNotFound` if any element lacks `field`
/// - `TypeMismatch` if a field value is not of kind `T`
/// - `DivisionByZero` for integer division by zero
pub fn fold_by_field<T: Numeric, R: Fields>(
    items: &[R],
    field: &str,
    op: ArithOp,
) -> Result<Option<T>> {
    fold_iter(
        items
            .iter()
            .enumerate()
            .map(|(index, element)| field_as::<T, R>(element, field, index)),
        op,
    )
}

// ============================================================================
// Dispatching reducers
// ============================================================================

/// Fold a dynamic sequence of numbers, dispatching on the first element's kind
///
/// # Errors
///
/// - `TypeMismatch` if a later element differs in kind from the first
/// - `DivisionByZero` for integer division by zero
pub fn reduce(seq: &Value, op: ArithOp) -> Result<Option<NumericValue>> {
    let Some(items) = seq.as_array() else {
        trace!(found = seq.type_name(), "reduce on non-sequence");
        return Ok(None);
    };
    let Some(kind) = items.first().and_then(Value::numeric_kind) else {
        trace!(len = items.len(), "reduce found no numeric first element");
        return Ok(None);
    };

    debug!(%kind, %op, len = items.len(), "reducing sequence");
    dispatch_kind!(kind, T => {
        let acc = fold_iter(items.iter().map(number_as::<T>), op)?;
        Ok(acc.map(Numeric::into_value))
    })
}

/// Fold a named field over a dynamic sequence of records
///
/// # Errors
///
/// - `FieldNotFound` if any element lacks `field`
/// - `TypeMismatch` if a later field differs in kind from the first
/// - `DivisionByZero` for integer division by zero
pub fn reduce_by_field(seq: &Value, field: &str, op: ArithOp) -> Result<Option<NumericValue>> {
    match seq.as_array() {
        Some(items) => reduce_records_by_field(items, field, op),
        None => {
            trace!(found = seq.type_name(), "reduce_by_field on non-sequence");
            Ok(None)
        }
    }
}

/// Fold a named field over a typed record slice, dispatching on the first
/// element's field kind
///
/// # Errors
///
/// - `FieldNotFound` if any element lacks `field`
/// - `TypeMismatch` if a later field differs in kind from the first
/// - `DivisionByZero` for integer division by zero
pub fn reduce_records_by_field<R: Fields>(
    items: &[R],
    field: &str,
    op: ArithOp,
) -> Result<Option<NumericValue>> {
    let Some(first) = items.first() else {
        return Ok(None);
    };
    let head = first
        .field(field)
        .ok_or_else(|| OperationError::field_not_found(field, 0))?;
    let Some(kind) = head.numeric_kind() else {
        trace!(field, found = head.type_name(), "reduce_by_field on non-numeric field");
        return Ok(None);
    };

    debug!(field, %kind, %op, len = items.len(), "reducing field");
    dispatch_kind!(kind, T => {
        let acc = fold_by_field::<T, R>(items, field, op)?;
        Ok(acc.map(Numeric::into_value))
    })
}

// ============================================================================
// Specialized reducers
// ============================================================================

macro_rules! specialized_reducers {
    ($($ty:ident => $plain:ident, $by_field:ident);* $(;)?) => {$(
        #[doc = concat!("Fold a `", stringify!($ty), "` slice; see [`fold`].")]
        ///
        /// # Errors
        ///
        /// Returns `DivisionByZero` for integer division by zero.
        pub fn $plain(items: &[$ty], op: ArithOp) -> Result<Option<$ty>> {
            fold(items, op)
        }

        #[doc = concat!("Fold a `", stringify!($ty), "` field over a record slice; see [`fold_by_field`].")]
        ///
        /// # Errors
        ///
        /// `FieldNotFound`, `TypeMismatch` or `DivisionByZero` as for
        /// [`fold_by_field`].
        pub fn $by_field<R: Fields>(items: &[R], field: &str, op: ArithOp) -> Result<Option<$ty>> {
            fold_by_field(items, field, op)
        }
    )*};
}

specialized_reducers! {
    i8 => reduce_i8, reduce_i8_by_field;
    i16 => reduce_i16, reduce_i16_by_field;
    i32 => reduce_i32, reduce_i32_by_field;
    i64 => reduce_i64, reduce_i64_by_field;
    isize => reduce_isize, reduce_isize_by_field;
    u8 => reduce_u8, reduce_u8_by_field;
    u16 => reduce_u16, reduce_u16_by_field;
    u32 => reduce_u32, reduce_u32_by_field;
    u64 => reduce_u64, reduce_u64_by_field;
    usize => reduce_usize, reduce_usize_by_field;
    f32 => reduce_f32, reduce_f32_by_field;
    f64 => reduce_f64, reduce_f64_by_field;
}
