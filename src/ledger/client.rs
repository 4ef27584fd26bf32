use std::sync::Arc;

use crate::ledger::{AccountId, LedgerId, TransactionSubmitter};

/// Handle to a ledger network as seen by tools.
///
/// Carries the operator identity used as the default payer/treasury and the
/// host's transaction submitter. Cloning is cheap.
#[derive(Clone, Default)]
pub struct Client {
    ledger_id: LedgerId,
    operator_account_id: Option<AccountId>,
    submitter: Option<Arc<dyn TransactionSubmitter>>,
}

impl Client {
    pub fn for_network(ledger_id: LedgerId) -> Self {
        Self {
            ledger_id,
            ..Default::default()
        }
    }

    pub fn with_operator(mut self, account_id: AccountId) -> Self {
        self.operator_account_id = Some(account_id);
        self
    }

    pub fn with_submitter(mut self, submitter: Arc<dyn TransactionSubmitter>) -> Self {
        self.submitter = Some(submitter);
        self
    }

    pub fn ledger_id(&self) -> LedgerId {
        self.ledger_id
    }

    pub fn operator_account_id(&self) -> Option<AccountId> {
        self.operator_account_id
    }

    pub fn submitter(&self) -> Option<&Arc<dyn TransactionSubmitter>> {
        self.submitter.as_ref()
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("ledger_id", &self.ledger_id)
            .field("operator_account_id", &self.operator_account_id)
            .field("has_submitter", &self.submitter.is_some())
            .finish()
    }
}
