//! Sequence operations for seqkit
//!
//! Stateless functions over caller-owned sequences:
//! - compare: operator evaluation shared by filters
//! - filter: keep the records whose field satisfies a comparison
//! - mutate: pop, reverse, shuffle
//! - reduce: left folds, generic, dispatching and per-kind
//!
//! Each operation exists in a typed form (`Vec<T>`, `&[T]`) and a dynamic
//! form over a `Value` handle. Only the dynamic forms can see a handle that
//! is not a sequence; they report it as `TypeMismatch`, except `pop_last`
//! which ignores it.
//!
//! Nothing here locks. Callers serialize access to a sequence they share.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compare;
pub mod filter;
pub mod mutate;
pub mod reduce;

pub use compare::compare_values;
pub use filter::{filter, filter_vec, filter_vec_with, filter_with};
pub use mutate::{
    pop_last, pop_vec, reverse, reverse_slice, shuffle, shuffle_seeded, shuffle_slice,
    shuffle_with,
};
pub use reduce::{
    fold, fold_by_field, reduce, reduce_by_field, reduce_f32, reduce_f32_by_field, reduce_f64,
    reduce_f64_by_field, reduce_i16, reduce_i16_by_field, reduce_i32, reduce_i32_by_field,
    reduce_i64, reduce_i64_by_field, reduce_i8, reduce_i8_by_field, reduce_isize,
    reduce_isize_by_field, reduce_records_by_field, reduce_u16, reduce_u16_by_field, reduce_u32,
    reduce_u32_by_field, reduce_u64, reduce_u64_by_field, reduce_u8, reduce_u8_by_field,
    reduce_usize, reduce_usize_by_field,
};
