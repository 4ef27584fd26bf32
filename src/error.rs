//! Error types for the agent kit.

use thiserror::Error;

/// Errors raised while resolving configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// A single field that failed schema validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Field name, or `$` for the whole input.
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Caller input rejected by a tool's parameter schema.
///
/// Every offending field is reported, not just the first one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid parameters: {}", format_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Whether a given field was among the rejected ones.
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|i| i.field == field)
    }
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Entity id that does not match `shard.realm.num`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid entity id '{0}', expected format X.X.X (e.g., 0.0.12345)")]
pub struct InvalidEntityId(pub String);

/// Failures talking to the mirror node read service.
#[derive(Debug, Error)]
pub enum MirrorNodeError {
    #[error("{entity} {id} was not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Mirror node returned {0}")]
    Status(u16),

    #[error("Mirror node request failed: {0}")]
    Request(String),

    #[error("Mirror node response could not be decoded: {0}")]
    Decode(String),
}

impl MirrorNodeError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Failures reported by a transaction submitter.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The ledger accepted the transaction but reported a non-success status.
    #[error("transaction failed with status {status}")]
    Status { status: String },

    #[error("transaction could not be submitted: {0}")]
    Transport(String),

    #[error("transaction was rejected before submission: {0}")]
    Rejected(String),
}

impl SubmitError {
    /// Ledger status code to report in the raw result.
    pub fn status(&self) -> &str {
        match self {
            Self::Status { status } => status,
            Self::Transport(_) | Self::Rejected(_) => "INVALID_TRANSACTION",
        }
    }
}

/// Errors surfaced by the tool registry to its host.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Tool method '{method}' is registered more than once (plugin '{plugin}')")]
    DuplicateMethod { method: String, plugin: String },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Tool '{method}' rejected its arguments: {source}")]
    Validation {
        method: String,
        #[source]
        source: ValidationError,
    },
}
