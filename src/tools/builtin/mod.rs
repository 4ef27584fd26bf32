//! Built-in tools and the plugins that bundle them.

mod create_token;
mod get_token_info;
mod greeting;

use std::sync::Arc;

pub use create_token::CreateTokenTool;
pub use get_token_info::GetTokenInfoTool;
pub use greeting::GreetingTool;

use crate::context::Context;
use crate::error::RegistryError;
use crate::tools::{Plugin, Tool, ToolRegistry};

/// Method names of the token plugin's tools.
pub mod token_plugin_tool_names {
    pub use super::create_token::CREATE_TOKEN_TOOL;
    pub use super::get_token_info::GET_TOKEN_INFO_TOOL;
}

/// Method names of the simple plugin's tools.
pub mod simple_plugin_tool_names {
    pub use super::greeting::GREETING_TOOL;
}

/// Token service operations: one mutation and one query.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenPlugin;

impl Plugin for TokenPlugin {
    fn name(&self) -> &str {
        "example-token-plugin"
    }

    fn version(&self) -> &str {
        "1.0.0"
    }

    fn description(&self) -> &str {
        "Example plugin for Hedera Token Service operations"
    }

    fn tools(&self, context: &Context) -> Vec<Arc<dyn Tool>> {
        vec![
            Arc::new(CreateTokenTool::new(context)),
            Arc::new(GetTokenInfoTool::new(context)),
        ]
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SimplePlugin;

impl Plugin for SimplePlugin {
    fn name(&self) -> &str {
        "simple-hedera-plugin"
    }

    fn version(&self) -> &str {
        "1.0.0"
    }

    fn description(&self) -> &str {
        "A simple example plugin demonstrating basic structure"
    }

    fn tools(&self, context: &Context) -> Vec<Arc<dyn Tool>> {
        vec![Arc::new(GreetingTool::new(context))]
    }
}

/// Registry holding every plugin shipped with the crate.
pub fn builtin_registry(context: &Context) -> Result<ToolRegistry, RegistryError> {
    let plugins: [&dyn Plugin; 2] = [&TokenPlugin, &SimplePlugin];
    ToolRegistry::from_plugins(&plugins, context)
}
