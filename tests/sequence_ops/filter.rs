//! Filter behavior through the facade

use crate::common::*;
use proptest::prelude::*;
use seqkit::{filter, filter_vec, filter_vec_with, filter_with};

#[test]
fn filter_typed_orders_by_quantity() {
    init_tracing();
    let mut seq = orders();
    filter_vec(&mut seq, "qty", CompareOp::Ge, &Value::from(2i32)).unwrap();
    assert_eq!(order_ids(&seq), vec![1, 2, 3, 4]);
}

#[test]
fn filter_typed_orders_by_sku() {
    let mut seq = orders();
    filter_vec(&mut seq, "sku", CompareOp::Eq, &Value::from("B-7")).unwrap();
    assert_eq!(order_ids(&seq), vec![2, 5]);
}

#[test]
fn filter_string_field_never_orders() {
    let mut seq = orders();
    filter_vec(&mut seq, "sku", CompareOp::Lt, &Value::from("Z")).unwrap();
    assert!(seq.is_empty());
}

#[test]
fn filter_unknown_token_empties_sequence() {
    let mut seq = orders();
    let op = CompareOp::from_token("!=");
    filter_vec(&mut seq, "qty", op, &Value::from(2i32)).unwrap();
    assert!(seq.is_empty());
}

#[test]
fn filter_missing_field_reports_first_index() {
    let mut seq = orders();
    let err = filter_vec(&mut seq, "discount", CompareOp::Gt, &Value::from(0i32)).unwrap_err();
    assert_eq!(err, OperationError::field_not_found("discount", 0));
    assert_eq!(seq, orders());
}

#[test]
fn filter_skip_policy_on_mixed_records() {
    let mut seq: Value = vec![
        Value::from(Record::new().with("n", 4u8)),
        Value::from(Record::new().with("m", 9u8)),
        Value::from(Record::new().with("n", 1u8)),
        Value::from(Record::new().with("n", 8u8)),
    ]
    .into();

    let strict = filter(&mut seq, "n", CompareOp::Gt, &Value::from(2u8));
    assert!(strict.unwrap_err().is_field_not_found());
    assert_eq!(elements(&seq).len(), 4);

    let lenient = SeqConfig::default().with_missing_field(MissingField::Skip);
    filter_with(&mut seq, "n", CompareOp::Gt, &Value::from(2u8), &lenient).unwrap();
    assert_eq!(seq, records("n", &[4u8, 8]));
}

#[test]
fn filter_typed_skip_policy() {
    let mut seq = vec![
        Record::new().with("x", 1.5f32),
        Record::new(),
        Record::new().with("x", -2.0f32),
    ];
    let lenient = SeqConfig::default().with_missing_field(MissingField::Skip);
    filter_vec_with(&mut seq, "x", CompareOp::Lt, &Value::from(0.0f32), &lenient).unwrap();
    assert_eq!(seq, vec![Record::new().with("x", -2.0f32)]);
}

#[test]
fn filter_rejects_non_sequence_handle() {
    let handles = [
        Value::Null,
        Value::from(3i8),
        Value::from("seq"),
        Value::from(Record::new()),
    ];
    for mut handle in handles {
        let err = filter(&mut handle, "x", CompareOp::Eq, &Value::Null).unwrap_err();
        assert!(err.is_type_mismatch(), "handle {:?}", handle);
    }
}

#[test]
fn filter_primitive_sequence_is_field_not_found() {
    let mut seq = numbers(&[5isize, 3, 8, 1]);
    let err = filter(&mut seq, "", CompareOp::Gt, &Value::from(3isize)).unwrap_err();
    assert_eq!(err, OperationError::field_not_found("", 0));
}

#[test]
fn filter_equality_on_nested_record_field() {
    let dims = Record::new().with("w", 2u32).with("h", 3u32);
    let mut seq: Value = vec![
        Value::from(Record::new().with("id", 1u32).with("dims", dims.clone())),
        Value::from(Record::new().with("id", 2u32).with("dims", Record::new())),
    ]
    .into();
    filter(&mut seq, "dims", CompareOp::Eq, &Value::from(dims.clone())).unwrap();
    assert_eq!(elements(&seq).len(), 1);

    // Records never order
    filter(&mut seq, "dims", CompareOp::Ge, &Value::from(Record::new())).unwrap();
    assert!(elements(&seq).is_empty());
}

macro_rules! filter_properties {
    ($($name:ident: $ty:ty),* $(,)?) => {$(
        mod $name {
            use super::*;
            use proptest::collection::vec;

            proptest! {
                #[test]
                fn absent_comparand_yields_empty(xs in vec(any::<$ty>(), 0..40)) {
                    let absent = (0..=<$ty>::MAX).find(|c| !xs.contains(c));
                    prop_assume!(absent.is_some());
                    let mut seq = records("v", &xs);
                    filter(&mut seq, "v", CompareOp::Eq, &Value::from(absent.unwrap())).unwrap();
                    prop_assert!(elements(&seq).is_empty());
                }

                #[test]
                fn ge_minimum_keeps_everything(xs in vec(any::<$ty>(), 1..40)) {
                    let min = *xs.iter().min().unwrap();
                    let original = records("v", &xs);
                    let mut seq = original.clone();
                    filter(&mut seq, "v", CompareOp::Ge, &Value::from(min)).unwrap();
                    prop_assert_eq!(seq, original);
                }

                #[test]
                fn unknown_token_yields_empty(xs in vec(any::<$ty>(), 1..40)) {
                    let mut seq = records("v", &xs);
                    let op = CompareOp::from_token("<>");
                    filter(&mut seq, "v", op, &Value::from(xs[0])).unwrap();
                    prop_assert!(elements(&seq).is_empty());
                }
            }
        }
    )*};
}

filter_properties! {
    prop_i8: i8,
    prop_i32: i32,
    prop_isize: isize,
    prop_u8: u8,
    prop_u64: u64,
    prop_usize: usize,
}
