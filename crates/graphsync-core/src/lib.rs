//! GraphSync Core - reconciliation kernel for local and remote entity graphs
//!
//! This crate converges a remote actual-state graph (campaigns, ad groups,
//! ads, creatives, ...) toward a local desired-state graph. It provides:
//! - A set reconciliation engine classifying nodes into create, delete /
//!   disable, pause, enable, remain-enabled and conflicting actions
//! - An attribute diff engine computing sparse update payloads from
//!   declarative field rules with a canonical side per rule
//! - A capability-based node model (`Node`) so heterogeneous local models and
//!   remote responses can be compared without reflection
//!
//! Both engines are pure and synchronous: no I/O, no shared mutable state.
//! Fetching collections and transmitting updates belong to the caller.

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod reconcile;

pub use graphsync_core_types::{schema, RemoteId};

// Re-export commonly used types
pub use diff::{compute_updates, AttributeDiffer, Rule, RuleSet, UpdateMap, Updates};
pub use errors::{ExError, ExErrorKind, GraphSyncError, Result};
pub use model::{Node, Record, Side, Status};
pub use reconcile::{PlanSummary, ReconciliationPlan, SetReconciler};
