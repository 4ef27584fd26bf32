//! Host-side rendering of tool output.
//!
//! Tools only declare which [`OutputParser`] applies to them. The host runs
//! the parser over the serialized tool output when presenting it.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::tools::ToolResult;

/// How the host should read a tool's serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputParser {
    /// Output of a state-changing tool; raw carries a transaction outcome.
    Transaction,
    /// Output of a read-only tool; raw is arbitrary JSON.
    UntypedQuery,
}

/// Transaction fields lifted out of a transaction tool's raw payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub status: String,
    pub transaction_id: Option<String>,
    pub schedule_id: Option<String>,
}

/// Parsed tool output ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedOutput {
    pub raw: Value,
    pub human_message: String,
    pub is_error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<TransactionSummary>,
}

impl OutputParser {
    /// Parse serialized output produced by [`ToolResult::to_wire`].
    pub fn parse(&self, output: &str) -> ParsedOutput {
        let envelope = serde_json::from_str::<Value>(output)
            .ok()
            .and_then(|v| match v {
                Value::Object(mut map) => {
                    let raw = map.remove("raw")?;
                    let human = map.remove("humanMessage")?.as_str()?.to_string();
                    Some((raw, human))
                }
                _ => None,
            });

        match (self, envelope) {
            (Self::Transaction, Some((raw, human_message))) => {
                let transaction = summarize_transaction(&raw);
                ParsedOutput {
                    is_error: raw.get("error").is_some(),
                    raw,
                    human_message,
                    transaction,
                }
            }
            (Self::UntypedQuery, Some((raw, human_message))) => ParsedOutput {
                is_error: raw.get("error").is_some(),
                raw,
                human_message,
                transaction: None,
            },
            (Self::Transaction, None) => {
                tracing::warn!("Transaction tool output was not a result envelope");
                ParsedOutput {
                    raw: json!({ "error": "Failed to parse transaction output", "output": output }),
                    human_message: "Error parsing transaction tool output".to_string(),
                    is_error: true,
                    transaction: None,
                }
            }
            // Untyped queries may legitimately return plain text.
            (Self::UntypedQuery, None) => ParsedOutput {
                raw: Value::String(output.to_string()),
                human_message: output.to_string(),
                is_error: false,
                transaction: None,
            },
        }
    }

    /// Render a result directly.
    pub fn render(&self, result: &ToolResult) -> ParsedOutput {
        self.parse(&result.to_wire())
    }
}

fn summarize_transaction(raw: &Value) -> Option<TransactionSummary> {
    let status = raw.get("status")?.as_str()?.to_string();
    let text = |key: &str| raw.get(key).and_then(Value::as_str).map(str::to_string);
    Some(TransactionSummary {
        status,
        transaction_id: text("transactionId"),
        schedule_id: text("scheduleId"),
    })
}
