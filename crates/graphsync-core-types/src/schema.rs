//! Canonical schema constants for structured logging and events
//!
//! These constants keep log field names consistent across both engines.

// Field keys every boundary event carries
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Canonical operation names
pub const OP_RECONCILE_SETS: &str = "reconcile_sets";
pub const OP_DIFF_ATTRIBUTES: &str = "diff_attributes";
pub const OP_LOAD_RULES: &str = "load_rules";
