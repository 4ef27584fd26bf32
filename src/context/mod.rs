//! Host-supplied configuration shared by every tool.

use std::sync::Arc;

use crate::ledger::AccountId;
use crate::mirror::MirrorNodeService;

/// How state-changing tools hand off their transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AgentMode {
    /// Execute transactions immediately.
    #[default]
    Autonomous,
    /// Wrap transactions in a schedule for later execution.
    Scheduled,
}

impl AgentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Autonomous => "autonomous",
            Self::Scheduled => "scheduled",
        }
    }
}

impl std::fmt::Display for AgentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AgentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "autonomous" | "immediate" => Ok(Self::Autonomous),
            "scheduled" => Ok(Self::Scheduled),
            _ => Err(format!(
                "invalid agent mode '{}', expected 'autonomous' or 'scheduled'",
                s
            )),
        }
    }
}

/// Read-only configuration bag passed to tool factories and executions.
///
/// An empty context is valid everywhere: tools fall back to defaults for
/// anything it does not carry.
#[derive(Clone, Default)]
pub struct Context {
    /// Account advertised to the agent as the default payer/treasury.
    pub operator_account_id: Option<AccountId>,
    pub mode: AgentMode,
    /// Read service used by query tools. When absent, tools use the public
    /// mirror node of the client's network.
    pub mirror_node: Option<Arc<dyn MirrorNodeService>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operator(mut self, account_id: AccountId) -> Self {
        self.operator_account_id = Some(account_id);
        self
    }

    pub fn with_mode(mut self, mode: AgentMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_mirror_node(mut self, service: Arc<dyn MirrorNodeService>) -> Self {
        self.mirror_node = Some(service);
        self
    }

    pub fn is_scheduled(&self) -> bool {
        self.mode == AgentMode::Scheduled
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("operator_account_id", &self.operator_account_id)
            .field("mode", &self.mode)
            .field("has_mirror_node", &self.mirror_node.is_some())
            .finish()
    }
}
