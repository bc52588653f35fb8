//! Attribute diff engine.
//!
//! Compares one matched local/remote node pair under a declarative rule set
//! and produces the minimal update payload for the side that is not
//! canonical.
//!
//! ## Entry point
//!
//! ```
//! use graphsync_core::diff::{AttributeDiffer, Rule};
//! use graphsync_core::model::{Record, Side};
//! use serde_json::json;
//!
//! let local = Record::new().with("state", "enabled");
//! let remote = Record::new().with("status", "paused");
//! let rules = vec![Rule::field("state", "status", Side::Local)];
//!
//! let updates = AttributeDiffer::new(&local, &remote, &rules).to_update_on_remote()?;
//! assert_eq!(updates.get("status"), Some(&json!("enabled")));
//! # Ok::<(), graphsync_core::GraphSyncError>(())
//! ```
//!
//! ## Guarantees
//!
//! - **Canonical values only**: emitted values are always read from the
//!   canonical side.
//! - **Silence on agreement**: no difference means an empty map, with no `id`.
//! - **Last rule wins**: later rules overwrite earlier ones on key collision.
//! - **Fail fast**: a malformed rule aborts the computation with a
//!   configuration error.

pub mod engine;
pub mod model;
pub mod rule;

pub use engine::{compute_updates, AttributeDiffer};
pub use model::{UpdateMap, Updates};
pub use rule::{DiffPredicate, FieldRule, PredicateRule, Rule, RuleDef, RuleSet};
