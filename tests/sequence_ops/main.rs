//! Sequence Operation Tests
//!
//! Cross-crate tests through the `seqkit` facade, organized by operation:
//! - Filter: operator semantics, field errors, missing-field policy
//! - Mutation: pop, reverse and shuffle, including a uniformity check
//! - Reduce: generic dispatch, per-kind entry points, record fields
//! - Config: TOML-driven behavior
//! - End to end: several operations over one sequence

#[path = "../common/mod.rs"]
mod common;

mod config;
mod end_to_end;
mod filter;
