//! Jupiter Token Registry
//!
//! Entry types for the token list endpoint and the tradable-address set the
//! pipeline's gate checks against. The registry is fetched fresh each run and
//! never persisted.

use std::collections::HashSet;

use serde::Deserialize;

/// One entry of the token registry
#[derive(Debug, Clone, Deserialize)]
pub struct TokenEntry {
    /// Token mint address
    pub address: String,
    /// Trade-activity counter; an explicit 0 marks a dead listing
    #[serde(default)]
    pub trades: Option<i64>,
    /// Optional extension map carried by some listings
    #[serde(default)]
    pub extensions: Option<TokenExtensions>,
}

/// Extension fields of a registry entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenExtensions {
    #[serde(default, rename = "coingeckoId")]
    pub coingecko_id: Option<String>,
}

impl TokenEntry {
    /// An entry counts as tradable unless its trade counter is an explicit
    /// zero. A non-empty Coingecko listing qualifies it regardless.
    pub fn is_tradable(&self) -> bool {
        self.trades != Some(0) || self.has_coingecko_id()
    }

    fn has_coingecko_id(&self) -> bool {
        self.extensions
            .as_ref()
            .and_then(|e| e.coingecko_id.as_deref())
            .is_some_and(|id| !id.is_empty())
    }
}

/// Set of tradable mint addresses built from a fetched registry
#[derive(Debug, Clone)]
pub struct TradableSet {
    addresses: HashSet<String>,
}

impl TradableSet {
    pub fn from_entries(entries: Vec<TokenEntry>) -> Self {
        let addresses = entries
            .into_iter()
            .filter(TokenEntry::is_tradable)
            .map(|entry| entry.address)
            .collect();
        Self { addresses }
    }

    pub fn contains(&self, mint: &str) -> bool {
        self.addresses.contains(mint)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(address: &str, trades: Option<i64>, coingecko_id: Option<&str>) -> TokenEntry {
        TokenEntry {
            address: address.to_string(),
            trades,
            extensions: coingecko_id.map(|id| TokenExtensions {
                coingecko_id: Some(id.to_string()),
            }),
        }
    }

    #[test]
    fn test_nonzero_trades_is_tradable() {
        assert!(entry("MintA", Some(120), None).is_tradable());
    }

    #[test]
    fn test_missing_trades_is_tradable() {
        // The registry omits the counter for most listings
        assert!(entry("MintA", None, None).is_tradable());
    }

    #[test]
    fn test_zero_trades_without_coingecko_is_not_tradable() {
        assert!(!entry("MintA", Some(0), None).is_tradable());
    }

    #[test]
    fn test_zero_trades_with_coingecko_is_tradable() {
        assert!(entry("MintA", Some(0), Some("solana")).is_tradable());
    }

    #[test]
    fn test_empty_coingecko_id_does_not_qualify() {
        assert!(!entry("MintA", Some(0), Some("")).is_tradable());
    }

    #[test]
    fn test_registry_json_shape() {
        let json = r#"[
            {"address": "So11111111111111111111111111111111111111112",
             "trades": 9000,
             "extensions": {"coingeckoId": "wrapped-solana"}},
            {"address": "DeadMint11111111111111111111111111111111111",
             "trades": 0},
            {"address": "NoCounterMint111111111111111111111111111111"}
        ]"#;

        let entries: Vec<TokenEntry> = serde_json::from_str(json).unwrap();
        let set = TradableSet::from_entries(entries);

        assert_eq!(set.len(), 2);
        assert!(set.contains("So11111111111111111111111111111111111111112"));
        assert!(!set.contains("DeadMint11111111111111111111111111111111111"));
        assert!(set.contains("NoCounterMint111111111111111111111111111111"));
    }

    #[test]
    fn test_unknown_extension_fields_ignored() {
        let json = r#"{"address": "M", "extensions": {"website": "https://x.io"}}"#;
        let parsed: TokenEntry = serde_json::from_str(json).unwrap();
        assert!(parsed.is_tradable());
    }

    #[test]
    fn test_empty_registry_builds_empty_set() {
        let set = TradableSet::from_entries(vec![]);
        assert!(set.is_empty());
        assert!(!set.contains("AnyMint"));
    }
}
