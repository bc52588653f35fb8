//! Attribute diff computation engine.
//!
//! The core entry point is [`AttributeDiffer`], which compares one local and
//! one remote node under a rule set and produces the sparse [`UpdateMap`] for
//! whichever side is not canonical.

use serde_json::Value;

use crate::diff::model::{UpdateMap, Updates};
use crate::diff::rule::Rule;
use crate::errors::{GraphSyncError, Result};
use crate::model::{Node, Side, ID_ATTR};

/// Compares one matched local/remote pair under a rule set
pub struct AttributeDiffer<'a, L: ?Sized, R: ?Sized> {
    local: &'a L,
    remote: &'a R,
    rules: &'a [Rule],
}

impl<'a, L: Node + ?Sized, R: Node + ?Sized> AttributeDiffer<'a, L, R> {
    pub fn new(local: &'a L, remote: &'a R, rules: &'a [Rule]) -> Self {
        Self {
            local,
            remote,
            rules,
        }
    }

    /// Check every rule against both nodes.
    ///
    /// # Errors
    ///
    /// - `EmptyFieldName`: a rule has an empty local or remote field name
    /// - `UnreadableField`: a node does not expose a field its rule names
    pub fn validate(&self) -> Result<()> {
        self.resolve().map(|_| ())
    }

    /// Updates needed on `side`.
    ///
    /// For each rule whose canonical side is the opposite of `side` and whose
    /// values differ, the payload maps `side`'s field name to the canonical
    /// value. Later rules overwrite earlier ones on the same key. When at
    /// least one entry is emitted and the queried node exposes an `id`, that
    /// id is attached under `"id"`.
    ///
    /// # Errors
    ///
    /// Any rule failing [`AttributeDiffer::validate`] aborts the whole
    /// computation; no partial payload is returned.
    pub fn compute_updates_for(&self, side: Side) -> Result<UpdateMap> {
        let resolved = self.resolve()?;
        let mut changes = UpdateMap::new();

        for (rule_index, (rule, (local_value, remote_value))) in
            self.rules.iter().zip(resolved).enumerate()
        {
            if rule.canonical() == side {
                continue;
            }
            if !rule.differs(&local_value, &remote_value) {
                continue;
            }

            let canonical_value = match rule.canonical() {
                Side::Local => local_value,
                Side::Remote => remote_value,
            };
            let field = rule.field_for(side);
            tracing::debug!(
                rule_index,
                side = side.as_str(),
                field,
                "rule reports a difference"
            );
            changes.insert(field.to_string(), canonical_value);
        }

        self.attach_identifier(side, &mut changes);
        Ok(changes)
    }

    /// Updates needed on the local node
    ///
    /// # Errors
    ///
    /// See [`AttributeDiffer::compute_updates_for`].
    pub fn to_update_on_local(&self) -> Result<UpdateMap> {
        self.compute_updates_for(Side::Local)
    }

    /// Updates needed on the remote node
    ///
    /// # Errors
    ///
    /// See [`AttributeDiffer::compute_updates_for`].
    pub fn to_update_on_remote(&self) -> Result<UpdateMap> {
        self.compute_updates_for(Side::Remote)
    }

    /// Updates for both sides, with boundary logging.
    ///
    /// # Errors
    ///
    /// See [`AttributeDiffer::compute_updates_for`].
    pub fn compute_updates(&self) -> Result<Updates> {
        crate::log_op_start!(
            crate::schema::OP_DIFF_ATTRIBUTES,
            rule_count = self.rules.len()
        );
        let start = std::time::Instant::now();

        let result = self.compute_updates_impl().map_err(|e| {
            crate::log_op_error!(
                crate::schema::OP_DIFF_ATTRIBUTES,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        crate::log_op_end!(
            crate::schema::OP_DIFF_ATTRIBUTES,
            duration_ms = start.elapsed().as_millis() as u64,
            local_updates = result.local.len(),
            remote_updates = result.remote.len()
        );

        Ok(result)
    }

    fn compute_updates_impl(&self) -> Result<Updates> {
        Ok(Updates {
            local: self.compute_updates_for(Side::Local)?,
            remote: self.compute_updates_for(Side::Remote)?,
        })
    }

    /// Validate every rule and read its `(local, remote)` values.
    fn resolve(&self) -> Result<Vec<(Value, Value)>> {
        self.rules
            .iter()
            .enumerate()
            .map(|(rule_index, rule)| {
                for side in [Side::Local, Side::Remote] {
                    if rule.field_for(side).is_empty() {
                        return Err(GraphSyncError::EmptyFieldName { rule_index, side });
                    }
                }
                let local_value = self.read(rule_index, rule, Side::Local)?;
                let remote_value = self.read(rule_index, rule, Side::Remote)?;
                Ok((local_value, remote_value))
            })
            .collect()
    }

    fn read(&self, rule_index: usize, rule: &Rule, side: Side) -> Result<Value> {
        let field = rule.field_for(side);
        let value = match side {
            Side::Local => self.local.attr(field),
            Side::Remote => self.remote.attr(field),
        };
        value.ok_or_else(|| GraphSyncError::UnreadableField {
            rule_index,
            side,
            field: field.to_string(),
        })
    }

    /// Stamp the target's own identity onto a non-empty payload.
    ///
    /// A rule that already wrote `"id"` keeps its value.
    fn attach_identifier(&self, side: Side, changes: &mut UpdateMap) {
        if changes.is_empty() {
            return;
        }
        let id = match side {
            Side::Local => self.local.attr(ID_ATTR),
            Side::Remote => self.remote.attr(ID_ATTR),
        };
        if let Some(id) = id.filter(|v| !v.is_null()) {
            changes.entry(ID_ATTR.to_string()).or_insert(id);
        }
    }
}

/// Compute both update payloads for one matched pair.
///
/// # Errors
///
/// See [`AttributeDiffer::compute_updates_for`].
pub fn compute_updates<L, R>(local: &L, remote: &R, rules: &[Rule]) -> Result<Updates>
where
    L: Node + ?Sized,
    R: Node + ?Sized,
{
    AttributeDiffer::new(local, remote, rules).compute_updates()
}
