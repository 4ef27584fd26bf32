//! Tools and plugins that let an AI agent act on a distributed ledger.
//!
//! A [`Plugin`](tools::Plugin) bundles [`Tool`](tools::Tool)s built from a
//! [`Context`](context::Context). Each tool declares a parameter schema and
//! returns a [`ToolResult`](tools::ToolResult) with machine-readable data and
//! a human-readable message. Query tools read through a
//! [`MirrorNodeService`](mirror::MirrorNodeService); mutation tools describe
//! transactions and hand them to the host's
//! [`TransactionSubmitter`](ledger::TransactionSubmitter).

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod ledger;
pub mod mirror;
pub mod tools;
