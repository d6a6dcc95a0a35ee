//! Several operations over one sequence

use crate::common::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use seqkit::{
    filter, filter_vec, pop_last, reduce, reduce_by_field, reduce_f64_by_field, reverse,
    reverse_slice, shuffle_slice, shuffle_with,
};

#[test]
fn filter_reverse_pop_reduce_dynamic() {
    init_tracing();
    let mut seq = records("score", &[5i64, 3, 8, 1, 9]);

    filter(&mut seq, "score", CompareOp::Gt, &Value::from(3i64)).unwrap();
    assert_eq!(seq, records("score", &[5i64, 8, 9]));

    reverse(&mut seq).unwrap();
    assert_eq!(seq, records("score", &[9i64, 8, 5]));

    let last = pop_last(&mut seq).unwrap();
    assert_eq!(last, Some(Value::from(Record::new().with("score", 5i64))));

    assert_eq!(
        reduce_by_field(&seq, "score", ArithOp::Sub),
        Ok(Some(NumericValue::I64(1)))
    );
}

#[test]
fn typed_pipeline_over_orders() {
    let mut seq = orders();
    filter_vec(&mut seq, "sku", CompareOp::Eq, &Value::from("A-1")).unwrap();
    assert_eq!(order_ids(&seq), vec![1, 3]);

    let mut rng = StdRng::seed_from_u64(11);
    shuffle_slice(&mut seq, &mut rng);
    reverse_slice(&mut seq);

    // Sum is independent of order
    assert_eq!(reduce_f64_by_field(&seq, "price", ArithOp::Add), Ok(Some(13.5)));
}

#[test]
fn shuffled_sum_is_unchanged() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut seq = numbers(&[3u8, 1, 4, 1, 5, 9, 2, 6]);
    let before = reduce(&seq, ArithOp::Add).unwrap();
    shuffle_with(&mut seq, &mut rng).unwrap();
    assert_eq!(reduce(&seq, ArithOp::Add).unwrap(), before);
    assert_eq!(before, Some(NumericValue::U8(31)));
}

#[test]
fn primitive_sequence_cannot_be_filtered_but_can_be_reduced() {
    let mut seq = numbers(&[5isize, 3, 8, 1]);
    assert!(filter(&mut seq, "", CompareOp::Gt, &Value::from(3isize))
        .unwrap_err()
        .is_field_not_found());
    assert_eq!(reduce(&seq, ArithOp::Add), Ok(Some(NumericValue::Isize(17))));
}
