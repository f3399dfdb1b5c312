//! Environment snapshot
//!
//! All configuration derivation reads from an [`EnvSnapshot`] captured
//! exactly once at process start. Nothing re-reads the ambient process
//! environment afterwards, and tests build snapshots explicitly instead
//! of mutating `std::env`.

use std::collections::BTreeMap;

/// Immutable capture of string-keyed environment variables.
///
/// An empty-string value is treated the same as an absent variable:
/// every accessor that reports presence requires a non-empty value.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Get a variable's value, treating empty strings as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Whether a variable is set to a non-empty value.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Owned copy of a variable's value, if present.
    pub fn string(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    /// Variable value, or `default` when absent or empty.
    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    /// True iff the variable is set to exactly `"1"`.
    ///
    /// This is the opt-in flag convention: any other value, including
    /// `"true"`, leaves the flag off.
    pub fn flag_enabled(&self, key: &str) -> bool {
        self.get(key) == Some("1")
    }

    /// True unless the variable is set to exactly `"1"`.
    ///
    /// The inverse convention used by `HIDE_*` and `*_DISABLED`
    /// variables: the feature stays on by default and is only switched
    /// off by an explicit `"1"`.
    pub fn flag_not_disabled(&self, key: &str) -> bool {
        self.get(key) != Some("1")
    }

    /// Parse the variable as `u8`, falling back to `default` on any
    /// absent, empty, or malformed value.
    pub fn u8_or(&self, key: &str, default: u8) -> u8 {
        self.get(key)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Parse the variable as `f32`, falling back to `default` on any
    /// absent, empty, malformed, or non-finite value.
    pub fn f32_or(&self, key: &str, default: f32) -> f32 {
        self.get(key)
            .and_then(|value| value.trim().parse::<f32>().ok())
            .filter(|value| value.is_finite())
            .unwrap_or(default)
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
