//! Reconciliation rules.
//!
//! A rule pairs one local field with one remote field and names the side
//! whose value is authoritative. Rules come in two explicit variants:
//!
//! - [`FieldRule`]: values differ when `local != remote`.
//! - [`PredicateRule`]: a caller-supplied `(local, remote) -> bool` owns the
//!   decision entirely; `true` means different.
//!
//! Rules may also be declared as data ([`RuleDef`]) and loaded in bulk with
//! [`RuleSet::from_json`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::errors::{GraphSyncError, Result};
use crate::model::Side;

/// Custom difference check, called as `(local_value, remote_value)`
pub type DiffPredicate = Arc<dyn Fn(&Value, &Value) -> bool + Send + Sync>;

/// Rule compared with default value equality
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub local_field: String,
    pub remote_field: String,
    pub canonical: Side,
}

/// Rule whose difference decision belongs to a predicate
#[derive(Clone)]
pub struct PredicateRule {
    pub local_field: String,
    pub remote_field: String,
    pub canonical: Side,
    pub predicate: DiffPredicate,
}

impl fmt::Debug for PredicateRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateRule")
            .field("local_field", &self.local_field)
            .field("remote_field", &self.remote_field)
            .field("canonical", &self.canonical)
            .finish_non_exhaustive()
    }
}

/// A field correspondence between the local and remote node
#[derive(Debug, Clone)]
pub enum Rule {
    Field(FieldRule),
    Predicate(PredicateRule),
}

impl Rule {
    /// Rule compared with default equality
    pub fn field(
        local_field: impl Into<String>,
        remote_field: impl Into<String>,
        canonical: Side,
    ) -> Self {
        Rule::Field(FieldRule {
            local_field: local_field.into(),
            remote_field: remote_field.into(),
            canonical,
        })
    }

    /// Rule decided by `predicate(local_value, remote_value)`
    pub fn predicate<F>(
        local_field: impl Into<String>,
        remote_field: impl Into<String>,
        canonical: Side,
        predicate: F,
    ) -> Self
    where
        F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    {
        Rule::Predicate(PredicateRule {
            local_field: local_field.into(),
            remote_field: remote_field.into(),
            canonical,
            predicate: Arc::new(predicate),
        })
    }

    /// Rule bridging two status vocabularies.
    ///
    /// `table` maps remote tokens to local tokens (e.g. `active -> enabled`).
    /// Remote tokens missing from the table stand for themselves. String
    /// comparison ignores case; other values fall back to equality.
    pub fn vocabulary<K, V>(
        local_field: impl Into<String>,
        remote_field: impl Into<String>,
        canonical: Side,
        table: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let table: BTreeMap<String, String> = table
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_lowercase(), v.as_ref().to_lowercase()))
            .collect();

        Rule::predicate(local_field, remote_field, canonical, move |local, remote| {
            match (local.as_str(), remote.as_str()) {
                (Some(l), Some(r)) => {
                    let r = r.to_lowercase();
                    let translated = table.get(&r).map(String::as_str).unwrap_or(r.as_str());
                    l.to_lowercase() != translated
                }
                _ => local != remote,
            }
        })
    }

    pub fn local_field(&self) -> &str {
        match self {
            Rule::Field(r) => &r.local_field,
            Rule::Predicate(r) => &r.local_field,
        }
    }

    pub fn remote_field(&self) -> &str {
        match self {
            Rule::Field(r) => &r.remote_field,
            Rule::Predicate(r) => &r.remote_field,
        }
    }

    /// Field name on the given side
    pub fn field_for(&self, side: Side) -> &str {
        match side {
            Side::Local => self.local_field(),
            Side::Remote => self.remote_field(),
        }
    }

    /// Side whose value wins
    pub fn canonical(&self) -> Side {
        match self {
            Rule::Field(r) => r.canonical,
            Rule::Predicate(r) => r.canonical,
        }
    }

    /// Whether the two values differ under this rule
    pub fn differs(&self, local_value: &Value, remote_value: &Value) -> bool {
        match self {
            Rule::Field(_) => local_value != remote_value,
            Rule::Predicate(r) => (r.predicate)(local_value, remote_value),
        }
    }
}

/// Declarative form of a [`Rule`]
///
/// `canonical_side` is kept as text so that an unknown side surfaces as a
/// configuration error rather than a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDef {
    pub local_field: String,
    pub remote_field: String,
    pub canonical_side: String,
    /// Remote-to-local token table; builds a vocabulary rule when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equivalents: Option<BTreeMap<String, String>>,
}

impl TryFrom<RuleDef> for Rule {
    type Error = GraphSyncError;

    fn try_from(def: RuleDef) -> Result<Self> {
        let canonical: Side = def.canonical_side.parse()?;
        Ok(match def.equivalents {
            Some(table) => Rule::vocabulary(def.local_field, def.remote_field, canonical, table),
            None => Rule::field(def.local_field, def.remote_field, canonical),
        })
    }
}

/// Ordered collection of rules; later rules win on key collision
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Parse a JSON array of [`RuleDef`]s.
    ///
    /// # Errors
    ///
    /// - `InvalidRuleSet`: the text is not a JSON array of rule definitions
    /// - `UnknownCanonicalSide`: a definition names a side other than
    ///   `local` or `remote`
    pub fn from_json(json: &str) -> Result<Self> {
        crate::log_op_start!(crate::schema::OP_LOAD_RULES);
        let start = std::time::Instant::now();

        let result = Self::from_json_impl(json).map_err(|e| {
            crate::log_op_error!(
                crate::schema::OP_LOAD_RULES,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        crate::log_op_end!(
            crate::schema::OP_LOAD_RULES,
            duration_ms = start.elapsed().as_millis() as u64,
            rule_count = result.len()
        );

        Ok(result)
    }

    fn from_json_impl(json: &str) -> Result<Self> {
        let defs: Vec<RuleDef> = serde_json::from_str(json)?;
        let rules = defs
            .into_iter()
            .map(Rule::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Append a rule
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Builder-style append
    pub fn with(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn as_slice(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl AsRef<[Rule]> for RuleSet {
    fn as_ref(&self) -> &[Rule] {
        &self.rules
    }
}
