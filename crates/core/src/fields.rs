//! Named field access
//!
//! Filters and field folds read element fields only through the [`Fields`]
//! trait, so they never depend on a concrete record layout. Dynamic
//! [`Record`]s implement it directly; plain structs get compile-time
//! accessors from [`impl_fields!`](crate::impl_fields).

use crate::value::{Record, Value};

/// Read access to an element's fields by name
pub trait Fields {
    /// Value of the named field, or `None` if the element has no such field
    fn field(&self, name: &str) -> Option<Value>;

    /// Check if the named field exists
    fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

impl Fields for Record {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn has_field(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// Only `Value::Record` exposes fields; numbers, strings and arrays have none.
impl Fields for Value {
    fn field(&self, name: &str) -> Option<Value> {
        match self {
            Value::Record(r) => r.field(name),
            _ => None,
        }
    }

    fn has_field(&self, name: &str) -> bool {
        match self {
            Value::Record(r) => r.has_field(name),
            _ => false,
        }
    }
}

impl<T: Fields + ?Sized> Fields for &T {
    fn field(&self, name: &str) -> Option<Value> {
        (**self).field(name)
    }
}

impl<T: Fields + ?Sized> Fields for Box<T> {
    fn field(&self, name: &str) -> Option<Value> {
        (**self).field(name)
    }
}

/// Implement [`Fields`] for a struct by listing its readable fields
///
/// Each listed field's type must convert into [`Value`] (any of the twelve
/// numeric primitives, `bool`, `String`, [`Record`]).
///
/// ```
/// use seqkit_core::{impl_fields, Fields, Value};
///
/// #[derive(Clone)]
/// struct Reading {
///     sensor: String,
///     celsius: f32,
/// }
///
/// impl_fields!(Reading { sensor, celsius });
///
/// let r = Reading { sensor: "a".into(), celsius: 21.5 };
/// assert_eq!(r.field("celsius"), Some(Value::from(21.5f32)));
/// assert_eq!(r.field("kelvin"), None);
/// ```
#[macro_export]
macro_rules! impl_fields {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Fields for $ty {
            fn field(&self, name: &str) -> ::core::option::Option<$crate::Value> {
                match name {
                    $(
                        ::core::stringify!($field) => ::core::option::Option::Some(
                            $crate::Value::from(::core::clone::Clone::clone(&self.$field)),
                        ),
                    )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };
}
