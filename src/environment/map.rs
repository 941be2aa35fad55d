//! Read-only snapshot of environment variables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of environment variables.
///
/// Providers receive the environment as data instead of reading the
/// process environment themselves, so detection and resolution can be
/// exercised with any mapping.
///
/// # Example
///
/// ```
/// use covmeta::environment::EnvironmentMap;
///
/// let envs = EnvironmentMap::new().with("CI", "true");
/// assert!(envs.contains_key("CI"));
/// assert_eq!(envs.get("CI"), Some("true"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentMap {
    // BTreeMap for deterministic ordering in debug output
    vars: BTreeMap<String, String>,
}

impl EnvironmentMap {
    /// Create an empty environment map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    ///
    /// Variables whose key or value is not valid Unicode are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Add a variable, returning the updated map.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Check whether a variable is present, regardless of its value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Look up a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for EnvironmentMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
