//! Attribute diff output types.
//!
//! Maps are `BTreeMap`s so serialized payloads are deterministic.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::model::Side;

/// Sparse update payload for one side: field name -> new value.
///
/// An empty map means no change is needed on that side.
pub type UpdateMap = BTreeMap<String, Value>;

/// Update payloads for both sides of a matched pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Updates {
    /// Changes to apply to the local node
    pub local: UpdateMap,
    /// Changes to apply to the remote node
    pub remote: UpdateMap,
}

impl Updates {
    /// Payload for the given side
    pub fn for_side(&self, side: Side) -> &UpdateMap {
        match side {
            Side::Local => &self.local,
            Side::Remote => &self.remote,
        }
    }

    /// True when neither side needs a change
    pub fn is_empty(&self) -> bool {
        self.local.is_empty() && self.remote.is_empty()
    }
}
