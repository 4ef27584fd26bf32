//! Tool lookup and invocation for a host.

use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;

use crate::context::Context;
use crate::error::RegistryError;
use crate::ledger::Client;
use crate::tools::{ParsedOutput, Plugin, Tool, ToolResult};

/// Tools materialized from one or more plugins for a given context.
///
/// Immutable once built; lookups and invocations need no locking.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
    by_method: HashMap<String, usize>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("methods", &self.list())
            .finish()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from several plugins sharing one context.
    pub fn from_plugins(plugins: &[&dyn Plugin], context: &Context) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for plugin in plugins {
            registry.register_plugin(*plugin, context)?;
        }
        Ok(registry)
    }

    /// Add every tool of `plugin`. Nothing is added if any method clashes.
    pub fn register_plugin(
        &mut self,
        plugin: &dyn Plugin,
        context: &Context,
    ) -> Result<(), RegistryError> {
        let tools = plugin.tools(context);

        let mut seen = std::collections::HashSet::new();
        for tool in &tools {
            let method = tool.method();
            if self.by_method.contains_key(method) || !seen.insert(method) {
                return Err(RegistryError::DuplicateMethod {
                    method: method.to_string(),
                    plugin: plugin.name().to_string(),
                });
            }
        }

        tracing::debug!(
            plugin = plugin.name(),
            version = plugin.version(),
            count = tools.len(),
            "Registered plugin tools"
        );

        for tool in tools {
            self.by_method
                .insert(tool.method().to_string(), self.tools.len());
            self.tools.push(tool);
        }
        Ok(())
    }

    pub fn get(&self, method: &str) -> Option<Arc<dyn Tool>> {
        self.by_method
            .get(method)
            .map(|&idx| Arc::clone(&self.tools[idx]))
    }

    /// Methods in registration order.
    pub fn list(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.method()).collect()
    }

    pub fn all(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Validate `args` against the tool's schema, then execute it.
    ///
    /// Validation failures come back as [`RegistryError::Validation`] and the
    /// tool never runs. Once running, every outcome (including a panic inside
    /// the tool) is a [`ToolResult`].
    pub async fn invoke(
        &self,
        method: &str,
        args: serde_json::Value,
        client: &Client,
        context: &Context,
    ) -> Result<ToolResult, RegistryError> {
        let tool = self
            .get(method)
            .ok_or_else(|| RegistryError::UnknownTool(method.to_string()))?;

        let params = tool
            .parameters()
            .validate(&args)
            .map_err(|source| RegistryError::Validation {
                method: method.to_string(),
                source,
            })?;

        tracing::debug!(tool = %method, "Executing tool");

        let result = AssertUnwindSafe(tool.execute(client, context, params))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| {
                let reason = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                tracing::error!(tool = %method, "Tool panicked: {}", reason);
                ToolResult::error(format!("Tool {} failed unexpectedly: {}", method, reason))
            });

        if result.is_error() {
            tracing::debug!(tool = %method, "Tool returned an error result");
        }
        Ok(result)
    }

    /// Render a tool's result with the parser the tool declares.
    pub fn render(&self, method: &str, result: &ToolResult) -> Result<ParsedOutput, RegistryError> {
        let tool = self
            .get(method)
            .ok_or_else(|| RegistryError::UnknownTool(method.to_string()))?;
        Ok(tool.output_parser().render(result))
    }
}
