//! Tool commands: list, describe and call.

use std::fmt::Write as _;
use std::process::ExitCode;

use anyhow::Context as _;

use crate::cli::Command;
use crate::config::Config;
use crate::tools::ToolRegistry;
use crate::tools::builtin::builtin_registry;

/// Run one CLI command against the built-in tools.
///
/// A tool that reports an error result exits with code 1.
pub async fn run_command(cmd: Command, config: &Config) -> anyhow::Result<ExitCode> {
    let context = config
        .context()
        .context("failed to create mirror node client")?;
    let registry = builtin_registry(&context)?;

    match cmd {
        Command::List { verbose } => {
            print!("{}", list_tools(&registry, verbose));
            Ok(ExitCode::SUCCESS)
        }
        Command::Describe { method } => {
            print!("{}", describe_tool(&registry, &method)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Call { method, args, raw } => {
            let args: serde_json::Value =
                serde_json::from_str(&args).context("--args must be a JSON object")?;
            let client = config.client();

            let result = registry.invoke(&method, args, &client, &context).await?;
            let parsed = registry.render(&method, &result)?;

            if raw {
                println!("{}", serde_json::to_string_pretty(&parsed.raw)?);
            } else {
                println!("{}", parsed.human_message);
            }

            Ok(if parsed.is_error {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}

pub fn list_tools(registry: &ToolRegistry, verbose: bool) -> String {
    let mut out = String::new();
    if registry.is_empty() {
        out.push_str("No tools registered.\n");
        return out;
    }

    let width = registry.list().iter().map(|m| m.len()).max().unwrap_or(0);
    for tool in registry.all() {
        if verbose {
            let _ = writeln!(
                out,
                "  {:<width$}  {:<8}  {:<13}  {}",
                tool.method(),
                tool.kind().to_string(),
                format!("{:?}", tool.output_parser()),
                tool.name(),
            );
        } else {
            let _ = writeln!(out, "  {:<width$}  {}", tool.method(), tool.name());
        }
    }
    let _ = writeln!(out, "\n{} tool(s)", registry.len());
    out
}

pub fn describe_tool(registry: &ToolRegistry, method: &str) -> anyhow::Result<String> {
    let Some(tool) = registry.get(method) else {
        anyhow::bail!(
            "Unknown tool '{}'. Available: {}",
            method,
            registry.list().join(", ")
        );
    };

    let schema = serde_json::to_string_pretty(&tool.parameters().to_json_schema())?;
    Ok(format!(
        "{} ({})\nKind: {}\n\n{}\n\nParameters:\n{}\n",
        tool.name(),
        tool.method(),
        tool.kind(),
        tool.description(),
        schema
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{AgentMode, Context};

    #[test]
    fn test_list_tools() {
        let registry = builtin_registry(&Context::default()).unwrap();
        let out = list_tools(&registry, false);
        assert!(out.contains("create_token_tool"));
        assert!(out.contains("Get Token Info"));
        assert!(out.ends_with("3 tool(s)\n"));

        let verbose = list_tools(&registry, true);
        assert!(verbose.contains("mutation"));
        assert!(verbose.contains("UntypedQuery"));
    }

    #[test]
    fn test_list_empty_registry() {
        assert_eq!(
            list_tools(&ToolRegistry::new(), false),
            "No tools registered.\n"
        );
    }

    #[test]
    fn test_describe_follows_mode() {
        let ctx = Context::default().with_mode(AgentMode::Scheduled);
        let registry = builtin_registry(&ctx).unwrap();
        let out = describe_tool(&registry, "create_token_tool").unwrap();
        assert!(out.starts_with("Create Fungible Token (create_token_tool)"));
        assert!(out.contains("\"scheduleMemo\""));
    }

    #[test]
    fn test_describe_unknown() {
        let registry = builtin_registry(&Context::default()).unwrap();
        let err = describe_tool(&registry, "nope").unwrap_err();
        assert!(err.to_string().contains("Available: create_token_tool"));
    }
}
