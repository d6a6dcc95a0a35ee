//! Numeric kind enumeration
//!
//! Every element a fold or an ordering comparison can act on belongs to
//! exactly one of twelve numeric kinds.
//!
//! | Kind | Rust type | Division |
//! |------|-----------|----------|
//! | I8, I16, I32, I64, Isize | signed integers | truncates toward zero |
//! | U8, U16, U32, U64, Usize | unsigned integers | truncates toward zero |
//! | F32, F64 | IEEE-754 floats | `x / 0.0` is `±inf` or `NaN` |

use serde::{Deserialize, Serialize};
use std::fmt;

/// The twelve supported numeric kinds
///
/// ## Invariant
///
/// This enum MUST have exactly 12 variants. Any value whose kind is not
/// listed here is rejected by folds and never orders against anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericKind {
    /// 8-bit signed integer
    I8,
    /// 16-bit signed integer
    I16,
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// Pointer-width signed integer
    Isize,
    /// 8-bit unsigned integer
    U8,
    /// 16-bit unsigned integer
    U16,
    /// 32-bit unsigned integer
    U32,
    /// 64-bit unsigned integer
    U64,
    /// Pointer-width unsigned integer
    Usize,
    /// 32-bit float
    F32,
    /// 64-bit float
    F64,
}

impl NumericKind {
    /// All numeric kinds (for iteration)
    pub const ALL: [NumericKind; 12] = [
        NumericKind::I8,
        NumericKind::I16,
        NumericKind::I32,
        NumericKind::I64,
        NumericKind::Isize,
        NumericKind::U8,
        NumericKind::U16,
        NumericKind::U32,
        NumericKind::U64,
        NumericKind::Usize,
        NumericKind::F32,
        NumericKind::F64,
    ];

    /// Get all numeric kinds as a slice
    pub fn all() -> &'static [NumericKind] {
        &Self::ALL
    }

    /// Rust type name of this kind
    pub const fn name(&self) -> &'static str {
        match self {
            NumericKind::I8 => "i8",
            NumericKind::I16 => "i16",
            NumericKind::I32 => "i32",
            NumericKind::I64 => "i64",
            NumericKind::Isize => "isize",
            NumericKind::U8 => "u8",
            NumericKind::U16 => "u16",
            NumericKind::U32 => "u32",
            NumericKind::U64 => "u64",
            NumericKind::Usize => "usize",
            NumericKind::F32 => "f32",
            NumericKind::F64 => "f64",
        }
    }

    /// Parse from a Rust type name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Check if this kind is a floating point kind
    pub const fn is_float(&self) -> bool {
        matches!(self, NumericKind::F32 | NumericKind::F64)
    }

    /// Check if this kind is an integer kind
    pub const fn is_integer(&self) -> bool {
        !self.is_float()
    }

    /// Check if this kind carries a sign
    pub const fn is_signed(&self) -> bool {
        match self {
            NumericKind::I8
            | NumericKind::I16
            | NumericKind::I32
            | NumericKind::I64
            | NumericKind::Isize
            | NumericKind::F32
            | NumericKind::F64 => true,
            NumericKind::U8
            | NumericKind::U16
            | NumericKind::U32
            | NumericKind::U64
            | NumericKind::Usize => false,
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
