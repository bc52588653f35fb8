use graphsync_core::Record;
use serde_json::Value;

/// Identifier attribute used by most fixtures
#[allow(dead_code)]
pub const ID_ATTR: &str = "remote_id";

/// Build a node with the given identifier and status
///
/// Pass `Value::Null` for a node that was never created remotely.
#[allow(dead_code)]
pub fn node(remote_id: impl Into<Value>, status: &str) -> Record {
    Record::new()
        .with(ID_ATTR, remote_id)
        .with("status", status)
}

/// Build a node that exposes an identifier but no status
#[allow(dead_code)]
pub fn statusless(remote_id: impl Into<Value>) -> Record {
    Record::new().with(ID_ATTR, remote_id)
}

/// Positions of `picked` inside `all`, by address
///
/// Classification outputs borrow from the input slices, so identity is
/// pointer identity.
#[allow(dead_code)]
pub fn positions<T>(picked: &[&T], all: &[T]) -> Vec<usize> {
    picked
        .iter()
        .map(|p| {
            all.iter()
                .position(|candidate| std::ptr::eq(*p, candidate))
                .expect("classified node must come from the input slice")
        })
        .collect()
}

/// Identifier attribute values of the given nodes
#[allow(dead_code)]
pub fn ids(nodes: &[&Record]) -> Vec<Value> {
    nodes
        .iter()
        .map(|n| n.get(ID_ATTR).cloned().unwrap_or(Value::Null))
        .collect()
}
