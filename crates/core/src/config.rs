//! Operation configuration via TOML
//!
//! Every operation has a plain entry point that uses `SeqConfig::default()`
//! and a `_with` / `_seeded` variant that takes an explicit config.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// What a filter does with an element that lacks the filtered field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingField {
    /// Fail with `FieldNotFound` and leave the sequence untouched
    #[default]
    Error,
    /// Drop the element from the result
    Skip,
}

/// Sequence operation configuration.
///
/// # Example
///
/// ```toml
/// # What filters do with elements lacking the field: "error" (default) or "skip"
/// missing_field = "error"
///
/// # Fixed seed for reproducible shuffles (omit for thread-local randomness)
/// # shuffle_seed = 42
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeqConfig {
    /// Missing-field policy for filters
    #[serde(default)]
    pub missing_field: MissingField,
    /// Seed for deterministic shuffles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuffle_seed: Option<u64>,
}

impl SeqConfig {
    /// Parse a config from TOML text
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` on malformed TOML, unknown keys, or bad values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Serialize this config to TOML text
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Builder: set the missing-field policy
    pub fn with_missing_field(mut self, policy: MissingField) -> Self {
        self.missing_field = policy;
        self
    }

    /// Builder: set a fixed shuffle seed
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Sequence operation configuration
#
# What filters do with elements lacking the filtered field:
#   "error" = fail with FieldNotFound, sequence left untouched (default)
#   "skip"  = drop the element from the result
missing_field = "error"

# Fixed seed for reproducible shuffles. Omit for thread-local randomness.
# shuffle_seed = 42
"#
    }
}
