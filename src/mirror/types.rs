use serde::{Deserialize, Serialize};

/// Token record as returned by `GET /api/v1/tokens/{id}`.
///
/// Only the fields the tools present are kept. Numeric amounts arrive as
/// strings and are left that way.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenInfo {
    pub token_id: String,
    pub name: String,
    pub symbol: String,
    pub decimals: String,
    pub total_supply: String,
    pub supply_type: String,
    pub treasury_account_id: String,
    pub created_timestamp: String,
    pub modified_timestamp: String,
    pub freeze_default: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = serde_json::json!({
            "token_id": "0.0.1234",
            "name": "Gold",
            "symbol": "GLD",
            "decimals": "2",
            "total_supply": "100000",
            "supply_type": "FINITE",
            "treasury_account_id": "0.0.2",
            "created_timestamp": "1700000000.123456789",
            "modified_timestamp": "1700000100.000000000",
            "freeze_default": false,
            "memo": "ignored",
            "custom_fees": {"fixed_fees": []}
        });
        let info: TokenInfo = serde_json::from_value(json).unwrap();
        assert_eq!(info.token_id, "0.0.1234");
        assert_eq!(info.decimals, "2");
        assert!(!info.freeze_default);
    }

    #[test]
    fn test_missing_fields_default() {
        let info: TokenInfo = serde_json::from_value(serde_json::json!({
            "token_id": "0.0.5"
        }))
        .unwrap();
        assert_eq!(info.name, "");
        assert_eq!(info.total_supply, "");
    }
}
