//! Configuration resolved from the environment.
//!
//! `.env` is loaded by the binary before [`Config::from_env`] runs, so
//! values there behave like real env vars.

mod helpers;

use std::sync::Arc;

use url::Url;

use crate::config::helpers::{optional_env, parse_optional_env};
use crate::context::{AgentMode, Context};
use crate::error::{ConfigError, MirrorNodeError};
use crate::ledger::{AccountId, Client, LedgerId};
use crate::mirror::HttpMirrorNode;

/// Runtime settings for a host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Network the client targets (`LEDGER_NETWORK`).
    pub network: LedgerId,
    /// Operator account (`LEDGER_OPERATOR_ID`).
    pub operator_account_id: Option<AccountId>,
    /// Execution mode for mutation tools (`LEDGER_AGENT_MODE`).
    pub mode: AgentMode,
    /// Mirror node base URL override (`MIRROR_NODE_URL`).
    pub mirror_node_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mirror_node_url = optional_env("MIRROR_NODE_URL")?;
        if let Some(ref raw) = mirror_node_url {
            validate_http_url("MIRROR_NODE_URL", raw)?;
        }

        Ok(Self {
            network: parse_optional_env("LEDGER_NETWORK", LedgerId::default())?,
            operator_account_id: optional_env("LEDGER_OPERATOR_ID")?
                .map(|s| s.parse::<AccountId>())
                .transpose()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "LEDGER_OPERATOR_ID".to_string(),
                    message: e.to_string(),
                })?,
            mode: parse_optional_env("LEDGER_AGENT_MODE", AgentMode::default())?,
            mirror_node_url,
        })
    }

    /// Base URL tools read ledger state from.
    pub fn effective_mirror_node_url(&self) -> String {
        self.mirror_node_url
            .clone()
            .unwrap_or_else(|| self.network.mirror_node_url())
    }

    /// Client handle for this network and operator. No submitter is
    /// attached; hosts that execute transactions add their own.
    pub fn client(&self) -> Client {
        let client = Client::for_network(self.network);
        match self.operator_account_id {
            Some(id) => client.with_operator(id),
            None => client,
        }
    }

    /// Context for building tools, with a mirror node service attached.
    pub fn context(&self) -> Result<Context, MirrorNodeError> {
        let mirror = HttpMirrorNode::new(self.effective_mirror_node_url())?;
        let context = Context::new()
            .with_mode(self.mode)
            .with_mirror_node(Arc::new(mirror));
        Ok(match self.operator_account_id {
            Some(id) => context.with_operator(id),
            None => context,
        })
    }
}

fn validate_http_url(key: &str, raw: &str) -> Result<(), ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("not a valid URL: {e}"),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("must use http or https, got '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ledger::EntityId;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const KEYS: &[&str] = &[
        "LEDGER_NETWORK",
        "LEDGER_OPERATOR_ID",
        "LEDGER_AGENT_MODE",
        "MIRROR_NODE_URL",
    ];

    fn clear_env() {
        // SAFETY: Only called under ENV_MUTEX in tests.
        unsafe {
            for key in KEYS {
                std::env::remove_var(key);
            }
        }
    }

    fn set_env(key: &str, value: &str) {
        // SAFETY: Only called under ENV_MUTEX in tests.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    #[test]
    fn defaults_when_unset() {
        let _guard = ENV_MUTEX.lock().expect("env mutex poisoned");
        clear_env();

        let config = Config::from_env().expect("defaults should resolve");
        assert_eq!(config, Config::default());
        assert_eq!(config.network, LedgerId::Testnet);
        assert_eq!(config.mode, AgentMode::Autonomous);
        assert_eq!(
            config.effective_mirror_node_url(),
            "https://testnet.mirrornode.hedera.com"
        );
    }

    #[test]
    fn reads_all_values() {
        let _guard = ENV_MUTEX.lock().expect("env mutex poisoned");
        clear_env();
        set_env("LEDGER_NETWORK", "mainnet");
        set_env("LEDGER_OPERATOR_ID", "0.0.1001");
        set_env("LEDGER_AGENT_MODE", "scheduled");
        set_env("MIRROR_NODE_URL", "http://127.0.0.1:5551");

        let config = Config::from_env().expect("should resolve");
        clear_env();

        assert_eq!(config.network, LedgerId::Mainnet);
        assert_eq!(config.operator_account_id, Some(EntityId::new(0, 0, 1001)));
        assert_eq!(config.mode, AgentMode::Scheduled);
        assert_eq!(config.effective_mirror_node_url(), "http://127.0.0.1:5551");
    }

    #[test]
    fn empty_values_count_as_unset() {
        let _guard = ENV_MUTEX.lock().expect("env mutex poisoned");
        clear_env();
        set_env("LEDGER_OPERATOR_ID", "  ");

        let config = Config::from_env().expect("should resolve");
        clear_env();
        assert_eq!(config.operator_account_id, None);
    }

    #[test]
    fn rejects_bad_operator_id() {
        let _guard = ENV_MUTEX.lock().expect("env mutex poisoned");
        clear_env();
        set_env("LEDGER_OPERATOR_ID", "alice");

        let err = Config::from_env().unwrap_err();
        clear_env();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "LEDGER_OPERATOR_ID")
        );
    }

    #[test]
    fn rejects_unknown_network_and_mode() {
        let _guard = ENV_MUTEX.lock().expect("env mutex poisoned");
        clear_env();
        set_env("LEDGER_NETWORK", "localnet");
        assert!(Config::from_env().is_err());

        clear_env();
        set_env("LEDGER_AGENT_MODE", "sometimes");
        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    fn rejects_non_http_mirror_url() {
        let _guard = ENV_MUTEX.lock().expect("env mutex poisoned");
        clear_env();
        set_env("MIRROR_NODE_URL", "ftp://mirror.example.com");

        let err = Config::from_env().unwrap_err();
        clear_env();
        assert!(err.to_string().contains("must use http or https"));
    }

    #[test]
    fn client_and_context_carry_operator() {
        let config = Config {
            network: LedgerId::Previewnet,
            operator_account_id: Some(EntityId::new(0, 0, 7)),
            mode: AgentMode::Scheduled,
            mirror_node_url: None,
        };

        let client = config.client();
        assert_eq!(client.ledger_id(), LedgerId::Previewnet);
        assert_eq!(client.operator_account_id(), Some(EntityId::new(0, 0, 7)));
        assert!(client.submitter().is_none());

        let context = config.context().expect("context should build");
        assert_eq!(context.operator_account_id, Some(EntityId::new(0, 0, 7)));
        assert!(context.is_scheduled());
        assert!(context.mirror_node.is_some());
    }
}
