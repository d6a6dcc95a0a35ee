//! Operator tokens
//!
//! Callers select comparisons and fold steps with short textual tokens.
//! Parsing never fails: a token outside the known set becomes `NoOp`, which
//! matches nothing when comparing and leaves the accumulator untouched when
//! folding.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Comparison operator used by filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompareOp {
    /// `==` structural equality
    Eq,
    /// `<` numeric ordering
    Lt,
    /// `>` numeric ordering
    Gt,
    /// `<=` less than or equal
    Le,
    /// `>=` greater than or equal
    Ge,
    /// Unrecognized token; never matches
    NoOp,
}

impl CompareOp {
    /// Parse a comparison token (`==`, `<`, `>`, `<=`, `>=`)
    pub fn from_token(token: &str) -> Self {
        match token {
            "==" => CompareOp::Eq,
            "<" => CompareOp::Lt,
            ">" => CompareOp::Gt,
            "<=" => CompareOp::Le,
            ">=" => CompareOp::Ge,
            _ => CompareOp::NoOp,
        }
    }

    /// Token for this operator, `None` for `NoOp`
    pub const fn token(&self) -> Option<&'static str> {
        match self {
            CompareOp::Eq => Some("=="),
            CompareOp::Lt => Some("<"),
            CompareOp::Gt => Some(">"),
            CompareOp::Le => Some("<="),
            CompareOp::Ge => Some(">="),
            CompareOp::NoOp => None,
        }
    }

    /// Check if this is the `NoOp` variant
    pub const fn is_noop(&self) -> bool {
        matches!(self, CompareOp::NoOp)
    }
}

/// Arithmetic operator used by folds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArithOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// Unrecognized token; a fold step that changes nothing
    NoOp,
}

impl ArithOp {
    /// Parse an arithmetic token (`+`, `-`, `*`, `/`)
    pub fn from_token(token: &str) -> Self {
        match token {
            "+" => ArithOp::Add,
            "-" => ArithOp::Sub,
            "*" => ArithOp::Mul,
            "/" => ArithOp::Div,
            _ => ArithOp::NoOp,
        }
    }

    /// Token for this operator, `None` for `NoOp`
    pub const fn token(&self) -> Option<&'static str> {
        match self {
            ArithOp::Add => Some("+"),
            ArithOp::Sub => Some("-"),
            ArithOp::Mul => Some("*"),
            ArithOp::Div => Some("/"),
            ArithOp::NoOp => None,
        }
    }

    /// Check if this is the `NoOp` variant
    pub const fn is_noop(&self) -> bool {
        matches!(self, ArithOp::NoOp)
    }
}

// ============================================================================
// Token conversions
// ============================================================================

macro_rules! token_conversions {
    ($($op:ident),*) => {$(
        impl FromStr for $op {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($op::from_token(s))
            }
        }

        impl From<&str> for $op {
            fn from(token: &str) -> Self {
                $op::from_token(token)
            }
        }

        impl From<String> for $op {
            fn from(token: String) -> Self {
                $op::from_token(&token)
            }
        }

        impl From<$op> for String {
            fn from(op: $op) -> Self {
                op.token().unwrap_or_default().to_string()
            }
        }

        impl fmt::Display for $op {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token().unwrap_or("<noop>"))
            }
        }
    )*};
}

token_conversions!(CompareOp, ArithOp);
