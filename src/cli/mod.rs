//! CLI command handling.
//!
//! Provides subcommands for:
//! - Listing the built-in tools (`list`)
//! - Showing a tool's prompt and parameter schema (`describe`)
//! - Invoking a tool with JSON arguments (`call`)

mod tools;

pub use tools::{describe_tool, list_tools, run_command};

use clap::{ColorChoice, Parser, Subcommand};

use crate::context::AgentMode;

#[derive(Parser, Debug)]
#[command(name = "ledger-agent-kit")]
#[command(about = "Inspect and invoke ledger agent tools")]
#[command(
    long_about = "Exposes the built-in ledger tools from the command line.\nExamples:\n  ledger-agent-kit list  # List tools\n  ledger-agent-kit call greeting_tool --args '{\"name\":\"Ada\"}'"
)]
#[command(version)]
#[command(color = ColorChoice::Auto)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Override LEDGER_AGENT_MODE ("autonomous" or "scheduled")
    #[arg(long, global = true)]
    pub mode: Option<AgentMode>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List available tools
    List {
        /// Include each tool's kind and output parser
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show a tool's prompt and JSON parameter schema
    Describe {
        /// Tool method (e.g. "get_token_info_tool")
        method: String,
    },

    /// Validate arguments, run a tool and print its rendered output
    Call {
        /// Tool method (e.g. "greeting_tool")
        method: String,

        /// Arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,

        /// Print the raw payload instead of the human message
        #[arg(long)]
        raw: bool,
    },
}
