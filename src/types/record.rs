//! Balance query result record

use serde::{Deserialize, Serialize};

use super::decimals::TokenDecimals;

/// Result of a token balance query for one wallet.
///
/// `name` and `symbol` are empty when the contract does not expose them.
/// `eth_balance` is only populated by the combined token + native query and
/// is omitted from JSON otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRecord {
    /// Wallet address exactly as supplied by the caller
    pub wallet: String,
    /// Token display name
    pub name: String,
    /// Token ticker
    pub symbol: String,
    /// Precision used to format `balance`
    pub decimals: TokenDecimals,
    /// Token balance scaled by `decimals`
    pub balance: String,
    /// Native currency balance of the wallet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eth_balance: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dream_team() -> BalanceRecord {
        BalanceRecord {
            wallet: "0x17a813df7322f8aac5cac75eb62c0d13b8aea29d".to_string(),
            name: "DreamTeam Token".to_string(),
            symbol: "DTT".to_string(),
            decimals: TokenDecimals::new(6),
            balance: "10000.0".to_string(),
            eth_balance: Some("50.0".to_string()),
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(dream_team()).unwrap();
        assert_eq!(
            value,
            json!({
                "wallet": "0x17a813df7322f8aac5cac75eb62c0d13b8aea29d",
                "name": "DreamTeam Token",
                "symbol": "DTT",
                "decimals": 6,
                "balance": "10000.0",
                "ethBalance": "50.0",
            })
        );
    }

    #[test]
    fn omits_eth_balance_when_absent() {
        let record = BalanceRecord {
            eth_balance: None,
            ..dream_team()
        };
        let value = serde_json::to_value(record).unwrap();
        assert!(value.get("ethBalance").is_none());
    }
}
