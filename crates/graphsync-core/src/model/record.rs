use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::node::Node;

/// Map-backed node for loosely-typed data
///
/// Stores attributes as JSON values keyed by name. A key that is present
/// with a `null` value is exposed-but-empty; an absent key is not exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Record {
    attrs: BTreeMap<String, Value>,
}

impl Record {
    /// Create a new empty Record
    pub fn new() -> Self {
        Self {
            attrs: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Get a value by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    /// Set a value by name
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attrs.insert(name.into(), value.into());
    }

    /// Remove a value by name
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.attrs.remove(name)
    }

    /// Check if an attribute is exposed
    pub fn contains(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Get all attribute names
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.attrs.keys()
    }

    /// Get the number of attributes
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Check if the record is empty
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl Node for Record {
    fn attr(&self, name: &str) -> Option<Value> {
        self.attrs.get(name).cloned()
    }
}

impl From<BTreeMap<String, Value>> for Record {
    fn from(attrs: BTreeMap<String, Value>) -> Self {
        Self { attrs }
    }
}

impl From<Map<String, Value>> for Record {
    fn from(obj: Map<String, Value>) -> Self {
        Self {
            attrs: obj.into_iter().collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attrs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
