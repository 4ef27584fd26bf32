//! Read access to ledger state through a mirror node.

mod http;
mod types;

use async_trait::async_trait;

pub use http::HttpMirrorNode;
pub use types::TokenInfo;

use crate::error::MirrorNodeError;
use crate::ledger::TokenId;

/// Point-in-time read service over ledger state.
#[async_trait]
pub trait MirrorNodeService: Send + Sync {
    /// Fetch a token's current record. Unknown tokens yield
    /// [`MirrorNodeError::NotFound`].
    async fn get_token_info(&self, token_id: &TokenId) -> Result<TokenInfo, MirrorNodeError>;
}
