use serde::{Deserialize, Serialize};

/// Every classification of one collection pair
///
/// Each sequence borrows from the reconciled snapshots and keeps input order.
/// `to_delete` and `to_disable` always hold the same nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciliationPlan<'a, L, R> {
    /// Local nodes to create remotely
    pub to_create: Vec<&'a L>,
    /// Remote nodes to tear down
    pub to_delete: Vec<&'a R>,
    /// Same nodes as `to_delete`, for callers that soft-disable
    pub to_disable: Vec<&'a R>,
    /// Local nodes whose remote counterpart must be paused
    pub to_pause: Vec<&'a L>,
    /// Local nodes whose remote counterpart must be enabled
    pub to_enable: Vec<&'a L>,
    /// Local enabled nodes still worth descending into
    pub remain_enabled: Vec<&'a L>,
    /// Local nodes whose identifier is unknown remotely
    pub conflicting: Vec<&'a L>,
}

impl<L, R> ReconciliationPlan<'_, L, R> {
    /// Counts per action
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            to_create: self.to_create.len(),
            to_delete: self.to_delete.len(),
            to_pause: self.to_pause.len(),
            to_enable: self.to_enable.len(),
            remain_enabled: self.remain_enabled.len(),
            conflicting: self.conflicting.len(),
        }
    }

    /// True when the remote side needs no create, delete, pause or enable call
    pub fn is_converged(&self) -> bool {
        self.to_create.is_empty()
            && self.to_delete.is_empty()
            && self.to_pause.is_empty()
            && self.to_enable.is_empty()
    }
}

/// Serializable action counts for a [`ReconciliationPlan`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanSummary {
    pub to_create: usize,
    pub to_delete: usize,
    pub to_pause: usize,
    pub to_enable: usize,
    pub remain_enabled: usize,
    pub conflicting: usize,
}
