//! Delegation of transactions to the host's submitter.

use async_trait::async_trait;
use serde_json::json;

use crate::context::Context;
use crate::error::SubmitError;
use crate::ledger::{Client, RawTransactionResponse, TransactionRequest};
use crate::tools::ToolResult;

/// Signs, submits and confirms transactions on behalf of tools.
///
/// Implementations own fee payment, retries and receipt/status mapping.
/// Tools never retry on their own.
#[async_trait]
pub trait TransactionSubmitter: Send + Sync {
    async fn submit(
        &self,
        request: &TransactionRequest,
        client: &Client,
        context: &Context,
    ) -> Result<RawTransactionResponse, SubmitError>;
}

/// Hand a transaction to the client's submitter and shape the outcome.
///
/// `post_process` renders the human message for a successful response.
/// Every path yields a [`ToolResult`].
pub async fn handle_transaction<F>(
    request: TransactionRequest,
    client: &Client,
    context: &Context,
    post_process: F,
) -> ToolResult
where
    F: FnOnce(&RawTransactionResponse) -> String,
{
    let Some(submitter) = client.submitter() else {
        return ToolResult::error_with_raw(
            json!({ "error": "No transaction submitter configured" }),
            "Error: No transaction submitter configured on the client",
        );
    };

    tracing::debug!(
        scheduled = request.is_scheduled(),
        network = %client.ledger_id(),
        "Submitting transaction"
    );

    match submitter.submit(&request, client, context).await {
        Ok(response) => {
            let human_message = post_process(&response);
            let raw = serde_json::to_value(&response).unwrap_or_else(|e| {
                json!({ "status": response.status, "error": e.to_string() })
            });
            ToolResult::new(raw, human_message)
        }
        Err(e) => {
            let message = format!("Failed to execute transaction: {}", e);
            tracing::warn!(status = e.status(), "{}", message);
            ToolResult::error_with_raw(
                json!({ "status": e.status(), "error": message }),
                message.clone(),
            )
        }
    }
}
