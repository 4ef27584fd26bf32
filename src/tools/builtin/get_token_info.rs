//! Token lookup against the mirror node.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::context::Context;
use crate::error::MirrorNodeError;
use crate::ledger::{Client, TokenId};
use crate::mirror::{HttpMirrorNode, MirrorNodeService, TokenInfo};
use crate::tools::format::{format_supply, format_timestamp, freeze_phrase, supply_type_phrase};
use crate::tools::tool::{Tool, ToolError, ToolKind, ToolResult, parse_params};
use crate::tools::{FieldSpec, OutputParser, ParamSchema};

pub const GET_TOKEN_INFO_TOOL: &str = "get_token_info_tool";

const GET_TOKEN_INFO_PROMPT: &str = "This tool retrieves information about a Hedera token.
Parameters:
- tokenId (str, required): The token ID to query (e.g., 0.0.12345)

Returns token details including name, symbol, supply, decimals, and treasury account.";

/// Read-only token details from the mirror node.
#[derive(Debug)]
pub struct GetTokenInfoTool {
    parameters: ParamSchema,
}

impl GetTokenInfoTool {
    pub fn new(_context: &Context) -> Self {
        Self {
            parameters: ParamSchema::new(vec![FieldSpec::string(
                "tokenId",
                "The token ID to query (e.g., 0.0.12345)",
            )]),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetTokenInfoParams {
    token_id: String,
}

/// The context's service if it has one, else the public mirror node of the
/// client's network.
fn mirror_node_for(
    client: &Client,
    context: &Context,
) -> Result<Arc<dyn MirrorNodeService>, MirrorNodeError> {
    match &context.mirror_node {
        Some(service) => Ok(Arc::clone(service)),
        None => Ok(Arc::new(HttpMirrorNode::for_network(client.ledger_id())?)),
    }
}

/// Markdown report for a token record.
fn post_process(info: &TokenInfo) -> String {
    format!(
        "**Token {}** Information:

**Basic Info:**
- **Name**: {}
- **Symbol**: {}
- **Decimals**: {}

**Supply:**
- **Current Supply**: {}
- **Supply Type**: {}

**Accounts:**
- **Treasury**: {}

**Settings:**
- **Freeze**: {}

**Timestamps:**
- **Created**: {}
- **Modified**: {}",
        info.token_id,
        info.name,
        info.symbol,
        info.decimals,
        format_supply(&info.total_supply, &info.decimals),
        supply_type_phrase(&info.supply_type),
        info.treasury_account_id,
        freeze_phrase(info.freeze_default),
        format_timestamp(&info.created_timestamp),
        format_timestamp(&info.modified_timestamp),
    )
}

impl GetTokenInfoTool {
    async fn get_token_info(
        &self,
        client: &Client,
        context: &Context,
        params: serde_json::Value,
    ) -> Result<ToolResult, ToolError> {
        let params: GetTokenInfoParams = parse_params(params)?;

        let token_id: TokenId = params.token_id.parse().map_err(|_| {
            ToolError::invalid(
                "Invalid token ID format",
                format!(
                    "Invalid token ID format: {}. Expected format: X.X.X (e.g., 0.0.12345)",
                    params.token_id
                ),
            )
        })?;

        let mirror_node =
            mirror_node_for(client, context).map_err(|e| ToolError::ExternalService(e.to_string()))?;

        let info = mirror_node
            .get_token_info(&token_id)
            .await
            .map_err(|e| match e {
                MirrorNodeError::NotFound { .. } => ToolError::NotFound {
                    summary: "Token not found".to_string(),
                    message: format!("Token {} was not found on the network", params.token_id),
                },
                other => ToolError::ExternalService(other.to_string()),
            })?;

        let human_message = post_process(&info);
        Ok(ToolResult::new(
            json!({ "tokenId": params.token_id, "tokenInfo": info }),
            human_message,
        ))
    }
}

#[async_trait]
impl Tool for GetTokenInfoTool {
    fn method(&self) -> &str {
        GET_TOKEN_INFO_TOOL
    }

    fn name(&self) -> &str {
        "Get Token Info"
    }

    fn description(&self) -> &str {
        GET_TOKEN_INFO_PROMPT
    }

    fn parameters(&self) -> &ParamSchema {
        &self.parameters
    }

    fn output_parser(&self) -> OutputParser {
        OutputParser::UntypedQuery
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Query
    }

    async fn execute(
        &self,
        client: &Client,
        context: &Context,
        params: serde_json::Value,
    ) -> ToolResult {
        self.get_token_info(client, context, params)
            .await
            .unwrap_or_else(|e| e.into_result(GET_TOKEN_INFO_TOOL, "Failed to get token info"))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;

    /// Mirror node stub answering from a fixed outcome and counting calls.
    struct StubMirrorNode {
        outcome: fn(&TokenId) -> Result<TokenInfo, MirrorNodeError>,
        calls: AtomicU32,
    }

    impl StubMirrorNode {
        fn new(outcome: fn(&TokenId) -> Result<TokenInfo, MirrorNodeError>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: AtomicU32::new(0),
            })
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MirrorNodeService for StubMirrorNode {
        async fn get_token_info(&self, token_id: &TokenId) -> Result<TokenInfo, MirrorNodeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)(token_id)
        }
    }

    fn gold(token_id: &TokenId) -> Result<TokenInfo, MirrorNodeError> {
        Ok(TokenInfo {
            token_id: token_id.to_string(),
            name: "Gold".to_string(),
            symbol: "GLD".to_string(),
            decimals: "2".to_string(),
            total_supply: "123456789".to_string(),
            supply_type: "FINITE".to_string(),
            treasury_account_id: "0.0.2".to_string(),
            created_timestamp: "1700000000.123456789".to_string(),
            modified_timestamp: "1700000100".to_string(),
            freeze_default: false,
        })
    }

    fn context_with(stub: &Arc<StubMirrorNode>) -> Context {
        Context::default().with_mirror_node(stub.clone())
    }

    #[tokio::test]
    async fn test_success_renders_report() {
        let stub = StubMirrorNode::new(gold);
        let tool = GetTokenInfoTool::new(&Context::default());

        let result = tool
            .execute(
                &Client::default(),
                &context_with(&stub),
                json!({"tokenId": "0.0.1234"}),
            )
            .await;

        assert!(!result.is_error());
        assert_eq!(result.raw["tokenId"], "0.0.1234");
        assert_eq!(result.raw["tokenInfo"]["symbol"], "GLD");
        assert!(result.human_message.starts_with("**Token 0.0.1234** Information:"));
        assert!(result.human_message.contains("- **Current Supply**: 1,234,567.89"));
        assert!(result.human_message.contains("- **Supply Type**: Finite"));
        assert!(result.human_message.contains("- **Freeze**: Not frozen by default"));
        assert!(
            result
                .human_message
                .contains("- **Created**: 2023-11-14T22:13:20.123Z")
        );
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_malformed_id_skips_network() {
        let stub = StubMirrorNode::new(gold);
        let tool = GetTokenInfoTool::new(&Context::default());

        let result = tool
            .execute(
                &Client::default(),
                &context_with(&stub),
                json!({"tokenId": "abc"}),
            )
            .await;

        assert_eq!(result.raw, json!({"error": "Invalid token ID format"}));
        assert_eq!(
            result.human_message,
            "Invalid token ID format: abc. Expected format: X.X.X (e.g., 0.0.12345)"
        );
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_not_found() {
        let stub = StubMirrorNode::new(|id| {
            Err(MirrorNodeError::NotFound {
                entity: "Token",
                id: id.to_string(),
            })
        });
        let tool = GetTokenInfoTool::new(&Context::default());

        let result = tool
            .execute(
                &Client::default(),
                &context_with(&stub),
                json!({"tokenId": "0.0.999999999"}),
            )
            .await;

        assert_eq!(result.raw, json!({"error": "Token not found"}));
        assert_eq!(
            result.human_message,
            "Token 0.0.999999999 was not found on the network"
        );
    }

    #[tokio::test]
    async fn test_service_failure_is_prefixed() {
        let stub = StubMirrorNode::new(|_| Err(MirrorNodeError::Status(500)));
        let tool = GetTokenInfoTool::new(&Context::default());

        let result = tool
            .execute(
                &Client::default(),
                &context_with(&stub),
                json!({"tokenId": "0.0.1"}),
            )
            .await;

        assert!(result.is_error());
        assert!(result.human_message.starts_with("Failed to get token info: "));
        assert_eq!(result.raw["error"], result.human_message.as_str());
    }

    #[test]
    fn test_prompt_is_context_independent() {
        let a = GetTokenInfoTool::new(&Context::default());
        let b = GetTokenInfoTool::new(
            &Context::default().with_mode(crate::context::AgentMode::Scheduled),
        );
        assert_eq!(a.description(), b.description());
        assert_eq!(a.parameters(), b.parameters());
        assert_eq!(a.parameters().field_names(), vec!["tokenId"]);
    }

    #[test]
    fn test_post_process_infinite_and_frozen() {
        let mut info = gold(&"0.0.5".parse().unwrap()).unwrap();
        info.supply_type = "INFINITE".to_string();
        info.freeze_default = true;
        info.modified_timestamp = String::new();
        let report = post_process(&info);
        assert!(report.contains("- **Supply Type**: Infinite"));
        assert!(report.contains("- **Freeze**: Frozen by default"));
        assert!(report.contains("- **Modified**: unknown"));
    }
}
