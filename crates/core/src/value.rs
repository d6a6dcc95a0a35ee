//! Value types for sequence operations
//!
//! This module defines:
//! - Value: dynamic element / sequence handle
//! - Record: ordered named fields
//!
//! ## Type Rules
//!
//! - Only `Value::Array` is a sequence; every other variant passed as a
//!   sequence handle is a `TypeMismatch`
//! - Numbers carry their kind: `Number(I32(1)) != Number(I64(1))`
//! - Equality is structural; record equality ignores field order
//!
//! Import from crate root: `use seqkit_core::{Value, Record};`

use crate::kind::NumericKind;
use crate::numeric::NumericValue;
use serde::{Deserialize, Serialize};

/// Dynamic value: a sequence handle or one of its elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Number of one of the twelve kinds
    Number(NumericValue),
    /// UTF-8 string
    String(String),
    /// Ordered sequence of values
    Array(Vec<Value>),
    /// Record with named fields
    Record(Record),
}

impl Value {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Number(n) => n.kind().name(),
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Record(_) => "Record",
        }
    }

    /// Check if this value is a sequence
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Check if this value is a record
    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Get as &NumericValue if this is a Number value
    pub fn as_number(&self) -> Option<&NumericValue> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Numeric kind, if this is a Number value
    pub fn numeric_kind(&self) -> Option<NumericKind> {
        self.as_number().map(NumericValue::kind)
    }

    /// Get as &[Value] if this is an Array value
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get as &mut Vec<Value> if this is an Array value
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get as &Record if this is a Record value
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Record with named fields
///
/// Field names are unique; `set` on an existing name replaces the value
/// without moving the field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "RecordFields")]
pub struct Record {
    fields: Vec<(String, Value)>,
}

/// Unchecked wire form of a `Record`
#[derive(Deserialize)]
struct RecordFields {
    fields: Vec<(String, Value)>,
}

impl TryFrom<RecordFields> for Record {
    type Error = String;

    fn try_from(raw: RecordFields) -> Result<Self, Self::Error> {
        let mut record = Record::new();
        for (name, value) in raw.fields {
            if record.get(&name).is_some() {
                return Err(format!("duplicate field name '{}'", name));
            }
            record.fields.push((name, value));
        }
        Ok(record)
    }
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Record { fields: Vec::new() }
    }

    /// Builder form of `set`
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field, returning the previous value if the name existed
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    /// Get a field by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(n, v)| other.get(n) == Some(v))
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

macro_rules! number_into_value {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Value {
            fn from(n: $ty) -> Self {
                Value::Number(NumericValue::from(n))
            }
        }
    )*};
}

number_into_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<NumericValue> for Value {
    fn from(n: NumericValue) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::Record(r)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}
