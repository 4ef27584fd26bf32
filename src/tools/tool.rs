//! Tool trait and types.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::context::Context;
use crate::ledger::Client;
use crate::tools::output::OutputParser;
use crate::tools::schema::ParamSchema;

/// Whether a tool reads ledger state or changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// Read-only; answers from a read service.
    Query,
    /// Builds a transaction and hands it to the submitter.
    Mutation,
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Query => write!(f, "query"),
            Self::Mutation => write!(f, "mutation"),
        }
    }
}

/// Failure inside a tool's execution.
///
/// Never leaves a tool: [`ToolError::into_result`] turns it into the same
/// [`ToolResult`] envelope a success uses.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Input passed the schema but breaks a domain rule (e.g. id format).
    #[error("{message}")]
    InvalidParameters { summary: String, message: String },

    /// An execute-time requirement is unmet (e.g. no operator account).
    #[error("{message}")]
    Precondition { summary: String, message: String },

    /// The read service reported that the entity does not exist.
    #[error("{message}")]
    NotFound { summary: String, message: String },

    #[error("{0}")]
    ExternalService(String),

    #[error("{0}")]
    Unexpected(String),
}

impl ToolError {
    pub fn invalid(summary: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            summary: summary.into(),
            message: message.into(),
        }
    }

    pub fn precondition(summary: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Precondition {
            summary: summary.into(),
            message: message.into(),
        }
    }

    /// Convert into an error result.
    ///
    /// Domain errors keep their own message. Service and unexpected failures
    /// are prefixed with `description` (e.g. "Failed to create token") and
    /// logged under the tool's method name.
    pub fn into_result(self, method: &str, description: &str) -> ToolResult {
        match self {
            Self::InvalidParameters { summary, message }
            | Self::Precondition { summary, message }
            | Self::NotFound { summary, message } => {
                ToolResult::error_with_raw(json!({ "error": summary }), message)
            }
            Self::ExternalService(reason) | Self::Unexpected(reason) => {
                let message = format!("{}: {}", description, reason);
                tracing::error!(tool = %method, "{}", message);
                ToolResult::error(message)
            }
        }
    }
}

/// The envelope every tool execution returns.
///
/// `raw` is machine-readable data, or `{ "error": ... }` on failure.
/// `human_message` is always ready to show, on success and on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub raw: serde_json::Value,
    pub human_message: String,
}

impl ToolResult {
    pub fn new(raw: serde_json::Value, human_message: impl Into<String>) -> Self {
        Self {
            raw,
            human_message: human_message.into(),
        }
    }

    /// Error result whose raw payload and message carry the same text.
    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            raw: json!({ "error": message }),
            human_message: message,
        }
    }

    /// Error result with a custom raw payload (must contain an `error` key).
    pub fn error_with_raw(raw: serde_json::Value, human_message: impl Into<String>) -> Self {
        debug_assert!(raw.get("error").is_some(), "error raw must carry 'error'");
        Self {
            raw,
            human_message: human_message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.raw.get("error").is_some()
    }

    /// Serialized form handed to output parsers.
    pub fn to_wire(&self) -> String {
        json!({ "raw": self.raw, "humanMessage": self.human_message }).to_string()
    }
}

/// Definition of a tool for LLM function calling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// A single-purpose callable unit an agent can invoke.
///
/// Tools are built from a [`Context`] by their factory (`new`) and are
/// immutable afterwards. The host validates arguments against
/// [`parameters`](Tool::parameters) before calling
/// [`execute`](Tool::execute).
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique identifier, e.g. `create_token_tool`.
    fn method(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;

    /// Prompt text telling the agent when and how to call the tool.
    fn description(&self) -> &str;

    fn parameters(&self) -> &ParamSchema;

    /// Which parser the host should use to render this tool's output.
    fn output_parser(&self) -> OutputParser;

    /// Whether the tool only reads ledger state or submits transactions.
    fn kind(&self) -> ToolKind;

    /// Run the tool with arguments that already passed [`Tool::parameters`].
    ///
    /// Always resolves to a [`ToolResult`]; failures are reported inside it.
    /// Panics are not caught here. Hosts should call tools through
    /// [`ToolRegistry::invoke`](crate::tools::ToolRegistry::invoke), which
    /// turns a panic into an error result.
    async fn execute(
        &self,
        client: &Client,
        context: &Context,
        params: serde_json::Value,
    ) -> ToolResult;

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.method().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters().to_json_schema(),
        }
    }
}

/// Deserialize validated parameters into a tool's typed params struct.
///
/// A failure here means the schema and the struct disagree, so it is
/// reported as unexpected.
pub fn parse_params<T: DeserializeOwned>(params: serde_json::Value) -> Result<T, ToolError> {
    serde_json::from_value(params)
        .map_err(|e| ToolError::Unexpected(format!("parameters did not match schema: {}", e)))
}

/// Check a generated JSON schema for structural mistakes.
///
/// Returns every problem found; empty means the schema is usable for
/// function calling.
///
/// # Rules enforced
///
/// 1. Top level must have `"type": "object"` and an object `"properties"`
/// 2. Every key in `"required"` must exist in `"properties"`
/// 3. Every property declares a `"type"`
/// 4. `"enum"` values are strings when the property is a string
/// 5. `"minimum"` does not exceed `"maximum"`
/// 6. `"additionalProperties"`, when present, is `false`
pub fn validate_tool_schema(schema: &serde_json::Value, path: &str) -> Vec<String> {
    let mut errors = Vec::new();

    match schema.get("type").and_then(|t| t.as_str()) {
        Some("object") => {}
        Some(other) => {
            errors.push(format!("{path}: expected type \"object\", got \"{other}\""));
            return errors;
        }
        None => {
            errors.push(format!("{path}: missing \"type\": \"object\""));
            return errors;
        }
    }

    let Some(properties) = schema.get("properties").and_then(|p| p.as_object()) else {
        errors.push(format!("{path}: missing or non-object \"properties\""));
        return errors;
    };

    if let Some(required) = schema.get("required").and_then(|r| r.as_array()) {
        for key in required.iter().filter_map(|r| r.as_str()) {
            if !properties.contains_key(key) {
                errors.push(format!(
                    "{path}: required key \"{key}\" not found in properties"
                ));
            }
        }
    }

    if let Some(additional) = schema.get("additionalProperties")
        && additional != &serde_json::Value::Bool(false)
    {
        errors.push(format!("{path}: \"additionalProperties\" must be false"));
    }

    for (key, prop) in properties {
        let prop_path = format!("{path}.{key}");
        let Some(prop_type) = prop.get("type").and_then(|t| t.as_str()) else {
            errors.push(format!("{prop_path}: missing \"type\""));
            continue;
        };

        if let Some(values) = prop.get("enum").and_then(|e| e.as_array())
            && prop_type == "string"
            && values.iter().any(|v| !v.is_string())
        {
            errors.push(format!("{prop_path}: enum values must be strings"));
        }

        if let (Some(min), Some(max)) = (
            prop.get("minimum").and_then(|m| m.as_i64()),
            prop.get("maximum").and_then(|m| m.as_i64()),
        ) && min > max
        {
            errors.push(format!(
                "{prop_path}: minimum {min} is greater than maximum {max}"
            ));
        }
    }

    errors
}
