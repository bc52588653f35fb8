//! Set reconciliation engine.
//!
//! Matches a local (desired) and a remote (actual) collection by identifier
//! and status, and classifies each node into a reconciliation action.
//!
//! ## Entry point
//!
//! ```
//! use graphsync_core::model::Record;
//! use graphsync_core::reconcile::SetReconciler;
//!
//! let local = vec![Record::new().with("remote_id", 2).with("status", "enabled")];
//! let remote = vec![Record::new().with("remote_id", 2).with("status", "PAUSED")];
//!
//! let reconciler = SetReconciler::new(&local, &remote, "remote_id");
//! assert_eq!(reconciler.to_enable().len(), 1);
//! ```
//!
//! ## Guarantees
//!
//! - **Order preservation**: outputs follow input order; nothing is sorted.
//! - **Exact matching**: nodes pair only on present, equal identifiers.
//! - **Case insensitivity**: status tokens are lowercased before comparison.
//! - **Graceful degradation**: unreadable status or identifier never errors.

pub mod plan;
pub mod set;

pub use plan::{PlanSummary, ReconciliationPlan};
pub use set::SetReconciler;
