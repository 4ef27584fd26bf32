//! Mirror node REST client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::MirrorNodeError;
use crate::ledger::{LedgerId, TokenId};
use crate::mirror::{MirrorNodeService, TokenInfo};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// [`MirrorNodeService`] backed by a mirror node's REST API.
#[derive(Debug, Clone)]
pub struct HttpMirrorNode {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMirrorNode {
    /// Create a client for the given base URL (e.g. `https://testnet.mirrornode.hedera.com`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, MirrorNodeError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MirrorNodeError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Client for a network's public mirror node.
    pub fn for_network(ledger_id: LedgerId) -> Result<Self, MirrorNodeError> {
        Self::new(ledger_id.mirror_node_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn token_url(&self, token_id: &TokenId) -> String {
        format!("{}/api/v1/tokens/{}", self.base_url, token_id)
    }
}

#[async_trait]
impl MirrorNodeService for HttpMirrorNode {
    async fn get_token_info(&self, token_id: &TokenId) -> Result<TokenInfo, MirrorNodeError> {
        let url = self.token_url(token_id);
        tracing::debug!(url = %url, "Fetching token info");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MirrorNodeError::Request(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(MirrorNodeError::NotFound {
                entity: "Token",
                id: token_id.to_string(),
            });
        }
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Mirror node request failed");
            return Err(MirrorNodeError::Status(status.as_u16()));
        }

        response
            .json::<TokenInfo>()
            .await
            .map_err(|e| MirrorNodeError::Decode(e.to_string()))
    }
}
