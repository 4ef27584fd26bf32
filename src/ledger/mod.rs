//! Ledger-side types the tools work with.
//!
//! This crate does not sign or broadcast anything. It describes transactions
//! and hands them to a [`TransactionSubmitter`] supplied by the host, which
//! owns signing, submission, retries and receipt handling.

mod client;
mod id;
mod network;
mod submit;
mod transaction;

pub use client::Client;
pub use id::{AccountId, EntityId, ScheduleId, TokenId, is_entity_id};
pub use network::LedgerId;
pub use submit::{TransactionSubmitter, handle_transaction};
pub use transaction::{
    RawTransactionResponse, ScheduleOptions, TokenCreateTransaction, TokenSupplyType, TokenType,
    TransactionBody, TransactionRequest,
};
