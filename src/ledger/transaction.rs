//! Transaction descriptions handed to the submitter.

use serde::{Deserialize, Serialize};

use crate::ledger::{AccountId, ScheduleId, TokenId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    #[default]
    FungibleCommon,
    NonFungibleUnique,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenSupplyType {
    #[default]
    Infinite,
    Finite,
}

/// Creates a new token with the given treasury.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCreateTransaction {
    pub token_name: String,
    pub token_symbol: String,
    pub token_type: TokenType,
    pub decimals: u32,
    pub initial_supply: u64,
    pub treasury_account_id: AccountId,
    pub supply_type: TokenSupplyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_supply: Option<u64>,
}

impl TokenCreateTransaction {
    pub fn new(
        token_name: impl Into<String>,
        token_symbol: impl Into<String>,
        treasury_account_id: AccountId,
    ) -> Self {
        Self {
            token_name: token_name.into(),
            token_symbol: token_symbol.into(),
            token_type: TokenType::default(),
            decimals: 0,
            initial_supply: 0,
            treasury_account_id,
            supply_type: TokenSupplyType::default(),
            max_supply: None,
        }
    }

    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_initial_supply(mut self, initial_supply: u64) -> Self {
        self.initial_supply = initial_supply;
        self
    }

    pub fn with_supply_type(mut self, supply_type: TokenSupplyType) -> Self {
        self.supply_type = supply_type;
        self
    }

    pub fn with_max_supply(mut self, max_supply: u64) -> Self {
        self.max_supply = Some(max_supply);
        self
    }
}

/// The operation a transaction performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionBody {
    TokenCreate(TokenCreateTransaction),
}

/// Wraps a transaction in a schedule instead of executing it immediately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_account_id: Option<AccountId>,
}

/// Everything a submitter needs to run one transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub body: TransactionBody,
    /// `Some` when the transaction should be scheduled rather than executed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleOptions>,
}

impl TransactionRequest {
    pub fn immediate(body: TransactionBody) -> Self {
        Self {
            body,
            schedule: None,
        }
    }

    pub fn scheduled(body: TransactionBody, options: ScheduleOptions) -> Self {
        Self {
            body,
            schedule: Some(options),
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.schedule.is_some()
    }
}

impl From<TokenCreateTransaction> for TransactionBody {
    fn from(tx: TokenCreateTransaction) -> Self {
        Self::TokenCreate(tx)
    }
}

/// Outcome of a submitted transaction, as reported by the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransactionResponse {
    pub status: String,
    pub transaction_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<TokenId>,
    /// Present only when the transaction was scheduled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_id: Option<ScheduleId>,
}

impl RawTransactionResponse {
    pub fn success(transaction_id: impl Into<String>) -> Self {
        Self {
            status: "SUCCESS".to_string(),
            transaction_id: transaction_id.into(),
            token_id: None,
            schedule_id: None,
        }
    }

    pub fn with_token_id(mut self, token_id: TokenId) -> Self {
        self.token_id = Some(token_id);
        self
    }

    pub fn with_schedule_id(mut self, schedule_id: ScheduleId) -> Self {
        self.schedule_id = Some(schedule_id);
        self
    }
}
