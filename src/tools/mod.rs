//! Tool contract and the built-in tools.
//!
//! A tool is a single callable unit an agent can invoke. Plugins group
//! tools and build them from a [`Context`](crate::context::Context); a
//! [`ToolRegistry`] collects them for a host.

pub mod builtin;
pub mod format;

mod output;
mod plugin;
mod registry;
mod schema;
mod tool;

pub use output::{OutputParser, ParsedOutput, TransactionSummary};
pub use plugin::Plugin;
pub use registry::ToolRegistry;
pub use schema::{FieldKind, FieldSpec, ParamSchema};
pub use tool::{
    Tool, ToolError, ToolKind, ToolResult, ToolSchema, parse_params, validate_tool_schema,
};
