//! Capability-based attribute access
//!
//! Both engines read entities only through [`Node`]. A local model and a
//! remote API response can be entirely different types; each exposes its
//! fields by name and the engines never need to know the concrete shape.

use graphsync_core_types::RemoteId;
use serde_json::Value;

use super::status::Status;

/// Attribute name read by [`Node::status`]
pub const STATUS_ATTR: &str = "status";

/// Attribute name attached to update payloads as the target identity
pub const ID_ATTR: &str = "id";

/// A node in either the local or the remote graph
pub trait Node {
    /// Read a named attribute.
    ///
    /// `None` means the node does not expose the attribute at all.
    /// `Some(Value::Null)` means it is exposed but empty.
    fn attr(&self, name: &str) -> Option<Value>;

    /// Lifecycle status, or `None` when the node has no readable status.
    fn status(&self) -> Option<Status> {
        self.attr(STATUS_ATTR)
            .as_ref()
            .and_then(Status::from_value)
    }

    /// Normalized identifier read from `id_attr`.
    ///
    /// Falsy values (`null`, `false`, blank strings) yield `None`.
    fn remote_id(&self, id_attr: &str) -> Option<RemoteId> {
        self.attr(id_attr).as_ref().and_then(RemoteId::from_value)
    }
}

impl<T: Node + ?Sized> Node for &T {
    fn attr(&self, name: &str) -> Option<Value> {
        (**self).attr(name)
    }

    fn status(&self) -> Option<Status> {
        (**self).status()
    }

    fn remote_id(&self, id_attr: &str) -> Option<RemoteId> {
        (**self).remote_id(id_attr)
    }
}

impl<T: Node + ?Sized> Node for Box<T> {
    fn attr(&self, name: &str) -> Option<Value> {
        (**self).attr(name)
    }

    fn status(&self) -> Option<Status> {
        (**self).status()
    }

    fn remote_id(&self, id_attr: &str) -> Option<RemoteId> {
        (**self).remote_id(id_attr)
    }
}

/// JSON objects are nodes; any other JSON value exposes nothing.
impl Node for Value {
    fn attr(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|obj| obj.get(name).cloned())
    }
}
