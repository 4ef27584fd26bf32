//! Ledger agent kit - command line host.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ledger_agent_kit::{
    cli::{Cli, run_command},
    config::Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logs go to stderr so command output stays pipeable
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ledger_agent_kit=info"));
    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let mut config = Config::from_env()?;
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }

    tracing::debug!(
        network = %config.network,
        mode = %config.mode,
        mirror_node = %config.effective_mirror_node_url(),
        "Configuration loaded"
    );

    run_command(cli.command, &config).await
}
