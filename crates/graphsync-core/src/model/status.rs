use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Lifecycle status of a node, parsed case-insensitively
///
/// `Enabled` and `Paused` are the target states the reconciler drives nodes
/// towards. `Deleted`, `Removed` and `Disabled` mark a node as inactive.
/// Unrecognized tokens are kept, lowercased, in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Status {
    Enabled,
    Paused,
    Deleted,
    Removed,
    Disabled,
    Other(String),
}

impl Status {
    /// Parse a status token, ignoring case
    pub fn parse(token: &str) -> Self {
        let token = token.to_lowercase();
        match token.as_str() {
            "enabled" => Status::Enabled,
            "paused" => Status::Paused,
            "deleted" => Status::Deleted,
            "removed" => Status::Removed,
            "disabled" => Status::Disabled,
            _ => Status::Other(token),
        }
    }

    /// Read a status from an attribute value; non-strings have no status
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(Status::parse)
    }

    /// True for `deleted`, `removed` and `disabled`
    pub fn is_inactive(&self) -> bool {
        matches!(self, Status::Deleted | Status::Removed | Status::Disabled)
    }

    /// Canonical lowercase token
    pub fn as_str(&self) -> &str {
        match self {
            Status::Enabled => "enabled",
            Status::Paused => "paused",
            Status::Deleted => "deleted",
            Status::Removed => "removed",
            Status::Disabled => "disabled",
            Status::Other(token) => token,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Status {
    fn from(token: String) -> Self {
        Status::parse(&token)
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}
