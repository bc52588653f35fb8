use crate::model::Side;
use graphsync_core_types::schema::OP_LOAD_RULES;
use thiserror::Error;

/// Result type alias using GraphSyncError
pub type Result<T> = std::result::Result<T, GraphSyncError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Rule configuration
    MissingFieldName,
    UnreadableField,
    UnknownCanonicalSide,
    InvalidRuleSet,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MissingFieldName => "ERR_MISSING_FIELD_NAME",
            ExErrorKind::UnreadableField => "ERR_UNREADABLE_FIELD",
            ExErrorKind::UnknownCanonicalSide => "ERR_UNKNOWN_CANONICAL_SIDE",
            ExErrorKind::InvalidRuleSet => "ERR_INVALID_RULE_SET",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and the rule
/// context (index, side, field) needed to locate an authoring mistake.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    rule_index: Option<usize>,
    side: Option<Side>,
    field: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            rule_index: None,
            side: None,
            field: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the position of the offending rule in its rule set
    pub fn with_rule_index(mut self, index: usize) -> Self {
        self.rule_index = Some(index);
        self
    }

    /// Add the side the offending field belongs to
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Add the offending field name
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the rule index, if any
    pub fn rule_index(&self) -> Option<usize> {
        self.rule_index
    }

    /// Get the side, if any
    pub fn side(&self) -> Option<Side> {
        self.side
    }

    /// Get the field name, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(index) = self.rule_index {
            write!(f, " (rule: {})", index)?;
        }
        if let Some(side) = self.side {
            write!(f, " (side: {})", side)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for GraphSync operations
///
/// Every variant is a configuration error: it points at a mistake in rule
/// authorship and aborts the calling operation. Malformed node data is never
/// reported here; it is normalized instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphSyncError {
    /// A rule names an empty field for one side
    #[error("Rule {rule_index} has no {side} field name")]
    EmptyFieldName { rule_index: usize, side: Side },

    /// A rule names a field the node on that side does not expose
    #[error("Rule {rule_index}: {side} node does not expose field '{field}'")]
    UnreadableField {
        rule_index: usize,
        side: Side,
        field: String,
    },

    /// Canonical side is neither `local` nor `remote`
    #[error("No canonical side: '{value}' is not one of local, remote")]
    UnknownCanonicalSide { value: String },

    /// A declarative rule set could not be parsed
    #[error("Invalid rule set: {reason}")]
    InvalidRuleSet { reason: String },
}

impl GraphSyncError {
    /// Whether this error is a fatal rule-configuration error
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            GraphSyncError::EmptyFieldName { .. }
                | GraphSyncError::UnreadableField { .. }
                | GraphSyncError::UnknownCanonicalSide { .. }
                | GraphSyncError::InvalidRuleSet { .. }
        )
    }
}

/// Conversion from GraphSyncError to ExError
impl From<GraphSyncError> for ExError {
    fn from(err: GraphSyncError) -> Self {
        let message = err.to_string();
        match err {
            GraphSyncError::EmptyFieldName { rule_index, side } => {
                ExError::new(ExErrorKind::MissingFieldName)
                    .with_rule_index(rule_index)
                    .with_side(side)
                    .with_message(message)
            }

            GraphSyncError::UnreadableField {
                rule_index,
                side,
                field,
            } => ExError::new(ExErrorKind::UnreadableField)
                .with_rule_index(rule_index)
                .with_side(side)
                .with_field(field)
                .with_message(message),

            GraphSyncError::UnknownCanonicalSide { .. } => {
                ExError::new(ExErrorKind::UnknownCanonicalSide).with_message(message)
            }

            GraphSyncError::InvalidRuleSet { .. } => {
                ExError::new(ExErrorKind::InvalidRuleSet)
                    .with_op(OP_LOAD_RULES)
                    .with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to GraphSyncError
impl From<serde_json::Error> for GraphSyncError {
    fn from(err: serde_json::Error) -> Self {
        GraphSyncError::InvalidRuleSet {
            reason: err.to_string(),
        }
    }
}
