//! Shared test utilities for all integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::Once;

pub use seqkit::{
    impl_fields, ArithOp, CompareOp, Fields, MissingField, NumericKind, NumericValue,
    OperationError, Record, SeqConfig, Value,
};

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output through the test harness (shown with `--nocapture`).
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

/// Typed record used across suites.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: u64,
    pub qty: i32,
    pub price: f64,
    pub sku: String,
}

impl_fields!(Order { id, qty, price, sku });

/// Five orders with distinct ids and repeated quantities.
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: 1,
            qty: 2,
            price: 9.5,
            sku: "A-1".into(),
        },
        Order {
            id: 2,
            qty: 10,
            price: 1.25,
            sku: "B-7".into(),
        },
        Order {
            id: 3,
            qty: 2,
            price: 4.0,
            sku: "A-1".into(),
        },
        Order {
            id: 4,
            qty: 7,
            price: 20.0,
            sku: "C-3".into(),
        },
        Order {
            id: 5,
            qty: 1,
            price: 0.5,
            sku: "B-7".into(),
        },
    ]
}

/// Ids of a slice of orders, in order.
pub fn order_ids(orders: &[Order]) -> Vec<u64> {
    orders.iter().map(|o| o.id).collect()
}

/// Dynamic sequence of numbers.
pub fn numbers<T: Into<Value> + Copy>(xs: &[T]) -> Value {
    xs.iter().copied().collect()
}

/// Dynamic sequence of single-field records.
pub fn records<T: Into<Value> + Copy>(field: &str, xs: &[T]) -> Value {
    xs.iter().map(|&x| Record::new().with(field, x)).collect()
}

/// Elements of a dynamic sequence; panics on non-arrays.
pub fn elements(seq: &Value) -> &[Value] {
    seq.as_array().expect("sequence handle")
}
