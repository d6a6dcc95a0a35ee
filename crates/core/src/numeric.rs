//! Numeric values and the `Numeric` trait
//!
//! - `NumericValue`: tagged union over the twelve numeric kinds
//! - `Numeric`: sealed trait implemented by the twelve Rust primitives, so
//!   generic folds monomorphize into one specialized routine per kind
//!
//! ## Arithmetic Rules
//!
//! - Integer add/sub/mul/div wrap on overflow (`i8::MIN / -1 == i8::MIN`)
//! - Integer division by zero is `OperationError::DivisionByZero`
//! - Float arithmetic is plain IEEE-754 (`1.0 / 0.0 == inf`)
//! - `ArithOp::NoOp` returns the left operand unchanged
//!
//! ## Equality and Ordering
//!
//! Different kinds are NEVER equal and never ordered: `I32(1) != I64(1)` and
//! `I32(1).partial_cmp(&I64(2))` is `None`.

use crate::error::{OperationError, Result};
use crate::kind::NumericKind;
use crate::operator::ArithOp;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A number tagged with its kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NumericValue {
    /// `i8`
    I8(i8),
    /// `i16`
    I16(i16),
    /// `i32`
    I32(i32),
    /// `i64`
    I64(i64),
    /// `isize`
    Isize(isize),
    /// `u8`
    U8(u8),
    /// `u16`
    U16(u16),
    /// `u32`
    U32(u32),
    /// `u64`
    U64(u64),
    /// `usize`
    Usize(usize),
    /// `f32`
    F32(f32),
    /// `f64`
    F64(f64),
}

/// Expand `$body` once per kind when both operands share a kind, else `$mismatch`
macro_rules! with_same_kind {
    ($lhs:expr, $rhs:expr, |$a:ident, $b:ident| $body:expr, $mismatch:expr) => {
        match ($lhs, $rhs) {
            (NumericValue::I8($a), NumericValue::I8($b)) => $body,
            (NumericValue::I16($a), NumericValue::I16($b)) => $body,
            (NumericValue::I32($a), NumericValue::I32($b)) => $body,
            (NumericValue::I64($a), NumericValue::I64($b)) => $body,
            (NumericValue::Isize($a), NumericValue::Isize($b)) => $body,
            (NumericValue::U8($a), NumericValue::U8($b)) => $body,
            (NumericValue::U16($a), NumericValue::U16($b)) => $body,
            (NumericValue::U32($a), NumericValue::U32($b)) => $body,
            (NumericValue::U64($a), NumericValue::U64($b)) => $body,
            (NumericValue::Usize($a), NumericValue::Usize($b)) => $body,
            (NumericValue::F32($a), NumericValue::F32($b)) => $body,
            (NumericValue::F64($a), NumericValue::F64($b)) => $body,
            _ => $mismatch,
        }
    };
}

impl NumericValue {
    /// Kind tag of this value
    pub const fn kind(&self) -> NumericKind {
        match self {
            NumericValue::I8(_) => NumericKind::I8,
            NumericValue::I16(_) => NumericKind::I16,
            NumericValue::I32(_) => NumericKind::I32,
            NumericValue::I64(_) => NumericKind::I64,
            NumericValue::Isize(_) => NumericKind::Isize,
            NumericValue::U8(_) => NumericKind::U8,
            NumericValue::U16(_) => NumericKind::U16,
            NumericValue::U32(_) => NumericKind::U32,
            NumericValue::U64(_) => NumericKind::U64,
            NumericValue::Usize(_) => NumericKind::Usize,
            NumericValue::F32(_) => NumericKind::F32,
            NumericValue::F64(_) => NumericKind::F64,
        }
    }

    /// Apply one fold step in this value's kind
    ///
    /// # Errors
    ///
    /// - `TypeMismatch` if `rhs` has a different kind
    /// - `DivisionByZero` for integer division by zero
    pub fn apply(self, rhs: NumericValue, op: ArithOp) -> Result<NumericValue> {
        with_same_kind!(
            self,
            rhs,
            |a, b| a.apply(b, op).map(NumericValue::from),
            Err(OperationError::type_mismatch(
                self.kind().name(),
                rhs.kind().name()
            ))
        )
    }

    /// Extract the primitive if this value is of kind `T`
    pub fn get<T: Numeric>(&self) -> Option<T> {
        T::from_value(self)
    }

    /// Lossy conversion to `f64`, for display and diagnostics
    pub fn to_f64_lossy(&self) -> f64 {
        match *self {
            NumericValue::I8(v) => v as f64,
            NumericValue::I16(v) => v as f64,
            NumericValue::I32(v) => v as f64,
            NumericValue::I64(v) => v as f64,
            NumericValue::Isize(v) => v as f64,
            NumericValue::U8(v) => v as f64,
            NumericValue::U16(v) => v as f64,
            NumericValue::U32(v) => v as f64,
            NumericValue::U64(v) => v as f64,
            NumericValue::Usize(v) => v as f64,
            NumericValue::F32(v) => v as f64,
            NumericValue::F64(v) => v,
        }
    }
}

impl PartialOrd for NumericValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        with_same_kind!(*self, *other, |a, b| a.partial_cmp(&b), None)
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::I8(v) => write!(f, "{}", v),
            NumericValue::I16(v) => write!(f, "{}", v),
            NumericValue::I32(v) => write!(f, "{}", v),
            NumericValue::I64(v) => write!(f, "{}", v),
            NumericValue::Isize(v) => write!(f, "{}", v),
            NumericValue::U8(v) => write!(f, "{}", v),
            NumericValue::U16(v) => write!(f, "{}", v),
            NumericValue::U32(v) => write!(f, "{}", v),
            NumericValue::U64(v) => write!(f, "{}", v),
            NumericValue::Usize(v) => write!(f, "{}", v),
            NumericValue::F32(v) => write!(f, "{}", v),
            NumericValue::F64(v) => write!(f, "{}", v),
        }
    }
}

// ============================================================================
// Numeric trait
// ============================================================================

mod sealed {
    pub trait Sealed {}
}

/// A primitive of one of the twelve numeric kinds
///
/// Sealed: implemented for `i8 i16 i32 i64 isize u8 u16 u32 u64 usize f32 f64`
/// only.
pub trait Numeric:
    sealed::Sealed + Copy + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Kind tag for this type
    const KIND: NumericKind;

    /// Wrap into the tagged union
    fn into_value(self) -> NumericValue;

    /// Unwrap from the tagged union if the kinds match
    fn from_value(value: &NumericValue) -> Option<Self>;

    /// One fold step: `self <op> rhs` with native semantics for the kind
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` for integer division by zero.
    fn apply(self, rhs: Self, op: ArithOp) -> Result<Self>;
}

macro_rules! impl_integer {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Numeric for $ty {
            const KIND: NumericKind = NumericKind::$variant;

            fn into_value(self) -> NumericValue {
                NumericValue::$variant(self)
            }

            fn from_value(value: &NumericValue) -> Option<Self> {
                match value {
                    NumericValue::$variant(v) => Some(*v),
                    _ => None,
                }
            }

            fn apply(self, rhs: Self, op: ArithOp) -> Result<Self> {
                Ok(match op {
                    ArithOp::Add => self.wrapping_add(rhs),
                    ArithOp::Sub => self.wrapping_sub(rhs),
                    ArithOp::Mul => self.wrapping_mul(rhs),
                    ArithOp::Div => {
                        if rhs == 0 {
                            return Err(OperationError::DivisionByZero { kind: Self::KIND });
                        }
                        self.wrapping_div(rhs)
                    }
                    ArithOp::NoOp => self,
                })
            }
        }

        impl From<$ty> for NumericValue {
            fn from(v: $ty) -> Self {
                NumericValue::$variant(v)
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Numeric for $ty {
            const KIND: NumericKind = NumericKind::$variant;

            fn into_value(self) -> NumericValue {
                NumericValue::$variant(self)
            }

            fn from_value(value: &NumericValue) -> Option<Self> {
                match value {
                    NumericValue::$variant(v) => Some(*v),
                    _ => None,
                }
            }

            fn apply(self, rhs: Self, op: ArithOp) -> Result<Self> {
                Ok(match op {
                    ArithOp::Add => self + rhs,
                    ArithOp::Sub => self - rhs,
                    ArithOp::Mul => self * rhs,
                    ArithOp::Div => self / rhs,
                    ArithOp::NoOp => self,
                })
            }
        }

        impl From<$ty> for NumericValue {
            fn from(v: $ty) -> Self {
                NumericValue::$variant(v)
            }
        }
    )*};
}

impl_integer! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
}

impl_float! {
    f32 => F32,
    f64 => F64,
}
