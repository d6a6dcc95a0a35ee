//! TOML-driven configuration

use crate::common::*;
use seqkit::{filter_with, shuffle_seeded};

#[test]
fn default_toml_documents_defaults() {
    let cfg = SeqConfig::from_toml_str(SeqConfig::default_toml()).unwrap();
    assert_eq!(cfg, SeqConfig::default());
    assert!(SeqConfig::default_toml().contains("missing_field"));
}

#[test]
fn skip_policy_from_toml() {
    let cfg = SeqConfig::from_toml_str("missing_field = \"skip\"").unwrap();
    let mut seq: Value = vec![
        Value::from(Record::new().with("a", 1i16)),
        Value::from(Record::new().with("b", 2i16)),
    ]
    .into();
    filter_with(&mut seq, "a", CompareOp::Eq, &Value::from(1i16), &cfg).unwrap();
    assert_eq!(seq, records("a", &[1i16]));
}

#[test]
fn seeded_shuffle_is_reproducible_across_configs() {
    let a = SeqConfig::from_toml_str("shuffle_seed = 2024").unwrap();
    let b = SeqConfig::default().with_shuffle_seed(2024);

    let original = numbers(&[10u32, 20, 30, 40, 50, 60, 70]);
    let mut x = original.clone();
    let mut y = original.clone();
    shuffle_seeded(&mut x, &a).unwrap();
    shuffle_seeded(&mut y, &b).unwrap();
    assert_eq!(x, y);
}

#[test]
fn invalid_toml_is_invalid_config() {
    for text in ["missing_field = 3", "shuffle_seed = \"x\"", "extra = true", "[["] {
        let err = SeqConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, OperationError::InvalidConfig(_)), "{}", text);
    }
}
