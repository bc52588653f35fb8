//! Collection-level reconciliation.
//!
//! [`SetReconciler`] pairs a local (desired) collection with a remote
//! (actual) collection by identifier and classifies each node into the
//! actions that converge the remote side toward the local one.
//!
//! ```text
//! local:  [ {id: 2, enabled}, {id: 4, paused}, {id: -, enabled} ]
//! remote: [ {id: 2, paused},  {id: 4, enabled}, {id: 9, enabled} ]
//!
//!   id 2          -> to_enable
//!   id 4          -> to_pause
//!   id 9          -> to_delete / to_disable
//!   id - enabled  -> to_create
//! ```
//!
//! Identifiers are read through the caller-supplied attribute name and
//! normalized by [`RemoteId::from_value`]; absent identifiers never match.

use graphsync_core_types::RemoteId;
use std::collections::{HashMap, HashSet};

use crate::model::{Node, Status};

use super::plan::ReconciliationPlan;

/// Read-only view over one local/remote collection pair
///
/// Construction indexes both sides once, so every classification runs in
/// O(|local| + |remote|). The reconciler holds borrowed snapshots only and
/// never mutates them.
pub struct SetReconciler<'a, L, R> {
    local: &'a [L],
    remote: &'a [R],
    id_attr: String,
    local_ids: Vec<Option<RemoteId>>,
    remote_ids: Vec<Option<RemoteId>>,
    remote_by_id: HashMap<RemoteId, Vec<usize>>,
    local_id_set: HashSet<RemoteId>,
}

impl<'a, L: Node, R: Node> SetReconciler<'a, L, R> {
    /// Build a reconciler over `local` and `remote`, pairing nodes by the
    /// attribute named `id_attr` (e.g. `"remote_id"`).
    pub fn new(local: &'a [L], remote: &'a [R], id_attr: impl Into<String>) -> Self {
        let id_attr = id_attr.into();

        let local_ids: Vec<Option<RemoteId>> =
            local.iter().map(|n| n.remote_id(&id_attr)).collect();
        let remote_ids: Vec<Option<RemoteId>> =
            remote.iter().map(|n| n.remote_id(&id_attr)).collect();

        let mut remote_by_id: HashMap<RemoteId, Vec<usize>> = HashMap::new();
        for (idx, id) in remote_ids.iter().enumerate() {
            if let Some(id) = id {
                remote_by_id.entry(id.clone()).or_default().push(idx);
            }
        }

        let local_id_set: HashSet<RemoteId> = local_ids.iter().flatten().cloned().collect();

        Self {
            local,
            remote,
            id_attr,
            local_ids,
            remote_ids,
            remote_by_id,
            local_id_set,
        }
    }

    /// Attribute name used to read identifiers
    pub fn id_attr(&self) -> &str {
        &self.id_attr
    }

    /// The local snapshot
    pub fn local(&self) -> &'a [L] {
        self.local
    }

    /// The remote snapshot
    pub fn remote(&self) -> &'a [R] {
        self.remote
    }

    /// Local nodes that must be created remotely.
    ///
    /// A local node qualifies when it is `enabled` and either has no
    /// identifier or its identifier matches no remote node.
    pub fn to_create(&self) -> Vec<&'a L> {
        self.create_indices()
            .into_iter()
            .map(|i| &self.local[i])
            .collect()
    }

    /// Remote nodes with no local counterpart that are not already inactive.
    ///
    /// Inactive means `deleted`, `removed` or `disabled`. A remote node
    /// without a readable status counts as active; one without an
    /// identifier has no local counterpart.
    pub fn to_delete(&self) -> Vec<&'a R> {
        self.delete_indices()
            .into_iter()
            .map(|i| &self.remote[i])
            .collect()
    }

    /// Alias of [`SetReconciler::to_delete`].
    ///
    /// Whether the caller hard-deletes or soft-disables is its own decision.
    pub fn to_disable(&self) -> Vec<&'a R> {
        self.to_delete()
    }

    /// Local `paused` nodes whose remote counterpart is not paused.
    pub fn to_pause(&self) -> Vec<&'a L> {
        self.pending_mutation(&Status::Paused)
            .into_iter()
            .map(|i| &self.local[i])
            .collect()
    }

    /// Local `enabled` nodes whose remote counterpart is not enabled.
    pub fn to_enable(&self) -> Vec<&'a L> {
        self.pending_mutation(&Status::Enabled)
            .into_iter()
            .map(|i| &self.local[i])
            .collect()
    }

    /// Local `enabled` nodes that need no pause and no teardown.
    ///
    /// These are the nodes a caller should still walk into: the node itself
    /// may need no remote call while its children do.
    pub fn remain_enabled(&self) -> Vec<&'a L> {
        let paused = self.pending_mutation(&Status::Paused);
        let deleted = self.delete_indices();
        self.locals(self.remain_enabled_indices(&paused, &deleted))
    }

    /// Local nodes carrying an identifier that no remote node carries.
    pub fn conflicting(&self) -> Vec<&'a L> {
        self.conflicting_indices()
            .into_iter()
            .map(|i| &self.local[i])
            .collect()
    }

    /// Compute every classification at once.
    ///
    /// Each bucket is evaluated a single time; `remain_enabled` is derived
    /// from the pause and delete buckets already computed.
    pub fn plan(&self) -> ReconciliationPlan<'a, L, R> {
        crate::log_op_start!(
            crate::schema::OP_RECONCILE_SETS,
            local_len = self.local.len(),
            remote_len = self.remote.len(),
            id_attr = self.id_attr.as_str()
        );
        let start = std::time::Instant::now();

        let paused = self.pending_mutation(&Status::Paused);
        let deleted = self.delete_indices();
        let remain_enabled = self.remain_enabled_indices(&paused, &deleted);

        let to_delete: Vec<&'a R> = deleted.iter().map(|&i| &self.remote[i]).collect();
        let plan = ReconciliationPlan {
            to_create: self.locals(self.create_indices()),
            to_disable: to_delete.clone(),
            to_delete,
            to_pause: self.locals(paused),
            to_enable: self.locals(self.pending_mutation(&Status::Enabled)),
            remain_enabled: self.locals(remain_enabled),
            conflicting: self.locals(self.conflicting_indices()),
        };
        let summary = plan.summary();

        crate::log_op_end!(
            crate::schema::OP_RECONCILE_SETS,
            duration_ms = start.elapsed().as_millis() as u64,
            to_create = summary.to_create,
            to_delete = summary.to_delete,
            to_pause = summary.to_pause,
            to_enable = summary.to_enable,
            remain_enabled = summary.remain_enabled,
            conflicting = summary.conflicting
        );

        plan
    }

    fn local_status(&self, idx: usize) -> Option<Status> {
        self.local[idx].status()
    }

    fn create_indices(&self) -> Vec<usize> {
        (0..self.local.len())
            .filter(|&i| self.local_status(i) == Some(Status::Enabled))
            .filter(|&i| match &self.local_ids[i] {
                None => true,
                Some(id) => !self.remote_by_id.contains_key(id),
            })
            .collect()
    }

    fn delete_indices(&self) -> Vec<usize> {
        (0..self.remote.len())
            .filter(|&i| {
                !self.remote[i]
                    .status()
                    .is_some_and(|status| status.is_inactive())
            })
            .filter(|&i| match &self.remote_ids[i] {
                None => true,
                Some(id) => !self.local_id_set.contains(id),
            })
            .collect()
    }

    fn pending_mutation(&self, target: &Status) -> Vec<usize> {
        (0..self.local.len())
            .filter(|&i| self.local_status(i).as_ref() == Some(target))
            .filter(|&i| {
                let Some(id) = &self.local_ids[i] else {
                    return false;
                };
                self.remote_by_id.get(id).is_some_and(|matches| {
                    matches
                        .iter()
                        .any(|&r| self.remote[r].status().as_ref() != Some(target))
                })
            })
            .collect()
    }

    fn locals(&self, indices: Vec<usize>) -> Vec<&'a L> {
        indices.into_iter().map(|i| &self.local[i]).collect()
    }

    fn remain_enabled_indices(&self, paused: &[usize], deleted: &[usize]) -> Vec<usize> {
        let paused: HashSet<usize> = paused.iter().copied().collect();
        let torn_down: HashSet<&RemoteId> = deleted
            .iter()
            .filter_map(|&r| self.remote_ids[r].as_ref())
            .collect();

        (0..self.local.len())
            .filter(|i| !paused.contains(i))
            .filter(|&i| {
                self.local_ids[i]
                    .as_ref()
                    .map_or(true, |id| !torn_down.contains(id))
            })
            .filter(|&i| self.local_status(i) == Some(Status::Enabled))
            .collect()
    }

    fn conflicting_indices(&self) -> Vec<usize> {
        (0..self.local.len())
            .filter(|&i| {
                self.local_ids[i]
                    .as_ref()
                    .is_some_and(|id| !self.remote_by_id.contains_key(id))
            })
            .collect()
    }
}
