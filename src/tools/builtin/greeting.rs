use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::context::Context;
use crate::ledger::Client;
use crate::tools::tool::{Tool, ToolError, ToolKind, ToolResult, parse_params};
use crate::tools::{FieldSpec, OutputParser, ParamSchema};

pub const GREETING_TOOL: &str = "greeting_tool";

const GREETING_PROMPT: &str = "This tool generates a greeting message.
Parameters:
- name (str, required): The name to greet
- formal (bool, optional): Whether to use formal greeting, defaults to false";

/// Greets someone by name. Touches no ledger state.
#[derive(Debug)]
pub struct GreetingTool {
    parameters: ParamSchema,
}

impl GreetingTool {
    pub fn new(_context: &Context) -> Self {
        Self {
            parameters: ParamSchema::new(vec![
                FieldSpec::string("name", "The name to greet"),
                FieldSpec::boolean("formal", "Use formal greeting style").optional(),
            ]),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GreetingParams {
    name: String,
    #[serde(default)]
    formal: bool,
}

fn greeting(params: GreetingParams) -> Result<ToolResult, ToolError> {
    let greeting = if params.formal {
        format!(
            "Good day, {}. It is a pleasure to make your acquaintance.",
            params.name
        )
    } else {
        format!("Hey {}! Great to meet you!", params.name)
    };

    let human_message = format!("{}\n\nWelcome to Hedera, {}!", greeting, params.name);
    Ok(ToolResult::new(
        json!({ "greeting": greeting, "name": params.name }),
        human_message,
    ))
}

#[async_trait]
impl Tool for GreetingTool {
    fn method(&self) -> &str {
        GREETING_TOOL
    }

    fn name(&self) -> &str {
        "Generate Greeting"
    }

    fn description(&self) -> &str {
        GREETING_PROMPT
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
        _client: &Client,
        _context: &Context,
        params: serde_json::Value,
    ) -> ToolResult {
        parse_params(params)
            .and_then(greeting)
            .unwrap_or_else(|e| e.into_result(GREETING_TOOL, "Failed to generate greeting"))
    }
}
