//! Option storage backing a configurable class.
//!
//! A [`ConfigStore`] is a plain key/value map. It performs no key filtering;
//! allow-list checks happen in [`ConfigClass`](crate::ConfigClass) before a
//! store is touched.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Working option set for one configurable class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigStore {
    options: HashMap<String, Value>,
}

impl ConfigStore {
    /// Creates a store holding a shallow copy of `initial`, or an empty store.
    pub fn new(initial: Option<&HashMap<String, Value>>) -> Self {
        Self {
            options: initial.cloned().unwrap_or_default(),
        }
    }

    /// Returns the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Inserts or overwrites `key`, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.options.insert(key.into(), value)
    }

    /// Returns true if `key` has been stored, even as `null`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// All stored options.
    pub fn options(&self) -> &HashMap<String, Value> {
        &self.options
    }

    /// Number of stored options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl From<HashMap<String, Value>> for ConfigStore {
    fn from(options: HashMap<String, Value>) -> Self {
        Self { options }
    }
}
