//! Fungible token creation.

use async_trait::async_trait;
use serde::Deserialize;

use crate::context::{AgentMode, Context};
use crate::ledger::{
    AccountId, Client, RawTransactionResponse, ScheduleOptions, TokenCreateTransaction,
    TokenSupplyType, TokenType, TransactionRequest, handle_transaction,
};
use crate::tools::tool::{Tool, ToolError, ToolKind, ToolResult, parse_params};
use crate::tools::{FieldSpec, OutputParser, ParamSchema};

pub const CREATE_TOKEN_TOOL: &str = "create_token_tool";

const SUPPLY_TYPES: &[&str] = &["finite", "infinite"];

/// Creates a fungible token, treasury defaulting to the client's operator.
#[derive(Debug)]
pub struct CreateTokenTool {
    description: String,
    parameters: ParamSchema,
}

impl CreateTokenTool {
    pub fn new(context: &Context) -> Self {
        Self {
            description: create_token_prompt(context),
            parameters: create_token_parameters(context),
        }
    }
}

fn create_token_prompt(context: &Context) -> String {
    let context_snippet = context
        .operator_account_id
        .map(|id| format!("Current operator account: {}\n\n", id))
        .unwrap_or_default();

    let scheduled_params = match context.mode {
        AgentMode::Scheduled => {
            "\n- scheduleMemo (str, optional): Memo for the scheduled transaction\
             \n- schedulePayerAccountId (str, optional): Account to pay for scheduled execution"
        }
        AgentMode::Autonomous => "",
    };

    format!(
        "{context_snippet}This tool creates a fungible token on Hedera.
Parameters:
- tokenName (str, required): The name of the token
- tokenSymbol (str, required): The symbol of the token (e.g., \"USDC\")
- initialSupply (int, optional): Initial supply of tokens, defaults to 0
- decimals (int, optional): Decimal places (0-18), defaults to 0
- supplyType (str, optional): \"finite\" or \"infinite\", defaults to \"infinite\"
- maxSupply (int, optional): Maximum supply (required if supplyType is \"finite\")
- treasuryAccountId (str, optional): Treasury account, defaults to operator{scheduled_params}

Note: Token IDs are returned in format X.X.X (e.g., 0.0.12345)"
    )
}

fn create_token_parameters(context: &Context) -> ParamSchema {
    let base = ParamSchema::new(vec![
        FieldSpec::string("tokenName", "The name of the token"),
        FieldSpec::string("tokenSymbol", "The symbol of the token"),
        FieldSpec::integer("initialSupply", "Initial supply of tokens, defaults to 0")
            .min(0)
            .optional(),
        FieldSpec::integer("decimals", "Decimal places (0-18), defaults to 0")
            .min(0)
            .max(18)
            .optional(),
        FieldSpec::one_of(
            "supplyType",
            "Supply type: \"finite\" or \"infinite\"",
            SUPPLY_TYPES,
        )
        .optional(),
        FieldSpec::integer(
            "maxSupply",
            "Maximum supply (required for finite supply type)",
        )
        .min(1)
        .optional(),
        FieldSpec::string(
            "treasuryAccountId",
            "Treasury account ID, defaults to operator",
        )
        .optional(),
    ]);

    match context.mode {
        AgentMode::Scheduled => base.extend(schedule_parameters()),
        AgentMode::Autonomous => base,
    }
}

fn schedule_parameters() -> ParamSchema {
    ParamSchema::new(vec![
        FieldSpec::string("scheduleMemo", "Memo for scheduled transaction").optional(),
        FieldSpec::string("schedulePayerAccountId", "Payer for scheduled transaction")
            .optional(),
    ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum SupplyTypeParam {
    Finite,
    Infinite,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleParams {
    schedule_memo: Option<String>,
    schedule_payer_account_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTokenParams {
    token_name: String,
    token_symbol: String,
    initial_supply: Option<u64>,
    decimals: Option<u32>,
    supply_type: Option<SupplyTypeParam>,
    max_supply: Option<u64>,
    treasury_account_id: Option<String>,
    #[serde(flatten)]
    schedule: ScheduleParams,
}

fn parse_account_id(value: &str, field: &str) -> Result<AccountId, ToolError> {
    value.parse().map_err(|_| {
        ToolError::invalid(
            format!("Invalid {} format", field),
            format!(
                "Invalid {} format: {}. Expected format: X.X.X (e.g., 0.0.12345)",
                field, value
            ),
        )
    })
}

/// Human message for a submitted token creation.
fn post_process(response: &RawTransactionResponse) -> String {
    if let Some(schedule_id) = response.schedule_id {
        return format!(
            "Scheduled token creation transaction created.
Transaction ID: {}
Schedule ID: {}

The token will be created when the scheduled transaction is executed.",
            response.transaction_id, schedule_id
        );
    }

    let token_id = response
        .token_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    format!(
        "Token created successfully!
Transaction ID: {}
Token ID: {}

You can now use this token ID for transfers, minting, and other operations.",
        response.transaction_id, token_id
    )
}

impl CreateTokenTool {
    async fn create_token(
        &self,
        client: &Client,
        context: &Context,
        params: serde_json::Value,
    ) -> Result<ToolResult, ToolError> {
        let params: CreateTokenParams = parse_params(params)?;

        let treasury = match params.treasury_account_id.as_deref() {
            Some(id) => parse_account_id(id, "treasuryAccountId")?,
            None => client.operator_account_id().ok_or_else(|| {
                ToolError::precondition(
                    "No operator account configured",
                    "Error: No operator account configured on the client",
                )
            })?,
        };

        let mut tx = TokenCreateTransaction::new(params.token_name, params.token_symbol, treasury)
            .with_token_type(TokenType::FungibleCommon)
            .with_decimals(params.decimals.unwrap_or(0))
            .with_initial_supply(params.initial_supply.unwrap_or(0));

        tx = match params.supply_type.unwrap_or(SupplyTypeParam::Infinite) {
            SupplyTypeParam::Finite => {
                let max_supply = params.max_supply.ok_or_else(|| {
                    ToolError::invalid(
                        "Missing maxSupply",
                        "maxSupply is required when supplyType is \"finite\"",
                    )
                })?;
                tx.with_supply_type(TokenSupplyType::Finite)
                    .with_max_supply(max_supply)
            }
            SupplyTypeParam::Infinite => tx.with_supply_type(TokenSupplyType::Infinite),
        };

        let request = match context.mode {
            AgentMode::Scheduled => {
                let payer_account_id = params
                    .schedule
                    .schedule_payer_account_id
                    .as_deref()
                    .map(|id| parse_account_id(id, "schedulePayerAccountId"))
                    .transpose()?;
                TransactionRequest::scheduled(
                    tx.into(),
                    ScheduleOptions {
                        memo: params.schedule.schedule_memo,
                        payer_account_id,
                    },
                )
            }
            AgentMode::Autonomous => TransactionRequest::immediate(tx.into()),
        };

        Ok(handle_transaction(request, client, context, post_process).await)
    }
}

#[async_trait]
impl Tool for CreateTokenTool {
    fn method(&self) -> &str {
        CREATE_TOKEN_TOOL
    }

    fn name(&self) -> &str {
        "Create Fungible Token"
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters(&self) -> &ParamSchema {
        &self.parameters
    }

    fn output_parser(&self) -> OutputParser {
        OutputParser::Transaction
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Mutation
    }

    async fn execute(
        &self,
        client: &Client,
        context: &Context,
        params: serde_json::Value,
    ) -> ToolResult {
        self.create_token(client, context, params)
            .await
            .unwrap_or_else(|e| e.into_result(CREATE_TOKEN_TOOL, "Failed to create token"))
    }
}
