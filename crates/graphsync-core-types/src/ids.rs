//! Remote identifier join key
//!
//! A `RemoteId` is the only key used to pair a local node with a remote one.
//! Raw identifier values are normalized through [`RemoteId::from_value`]:
//! anything the local side uses to mean "never created remotely" (`null`,
//! `false`, blank strings) becomes `None`, so two unassigned nodes can never
//! be mistaken for the same remote object.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Normalized remote identifier
///
/// Numbers and strings are kept in separate variants: `2` and `"2"` are
/// different identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "Value", try_from = "Value")]
pub enum RemoteId {
    /// Numeric identifier, stored in its canonical decimal rendering
    Number(String),
    /// Textual identifier
    Text(String),
}

impl RemoteId {
    /// Normalize a raw attribute value into an identifier.
    ///
    /// Returns `None` for `null`, booleans, blank strings, arrays and objects.
    /// Integral floats (`2.0`) normalize to the integer form (`2`).
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(RemoteId::Text(s.clone())),
            Value::Number(n) => Some(RemoteId::Number(canonical_number(n))),
            _ => None,
        }
    }

    /// Build a textual identifier, normalizing blanks to `None`.
    pub fn text(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            None
        } else {
            Some(RemoteId::Text(id))
        }
    }

    /// Build a numeric identifier.
    pub fn number(id: i64) -> Self {
        RemoteId::Number(id.to_string())
    }

    /// Borrow the identifier's canonical string form.
    pub fn as_str(&self) -> &str {
        match self {
            RemoteId::Number(s) | RemoteId::Text(s) => s,
        }
    }

    /// Convert back into a JSON value, preserving the number/text distinction.
    pub fn to_value(&self) -> Value {
        match self {
            RemoteId::Number(s) => serde_json::from_str::<serde_json::Number>(s)
                .map(Value::Number)
                .unwrap_or_else(|_| Value::String(s.clone())),
            RemoteId::Text(s) => Value::String(s.clone()),
        }
    }
}

fn canonical_number(n: &Number) -> String {
    if let Some(f) = n.as_f64().filter(|_| n.is_f64()) {
        if f.fract() == 0.0 {
            // 2^63 and 2^64 are exact as f64; both bounds are exclusive
            if f >= i64::MIN as f64 && f < i64::MAX as f64 {
                return (f as i64).to_string();
            }
            if f >= 0.0 && f < u64::MAX as f64 {
                return (f as u64).to_string();
            }
        }
    }
    n.to_string()
}

impl fmt::Display for RemoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<i64> for RemoteId {
    fn from(id: i64) -> Self {
        RemoteId::number(id)
    }
}

impl From<RemoteId> for Value {
    fn from(id: RemoteId) -> Self {
        id.to_value()
    }
}

impl TryFrom<Value> for RemoteId {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        RemoteId::from_value(&value).ok_or_else(|| format!("not a remote identifier: {}", value))
    }
}
