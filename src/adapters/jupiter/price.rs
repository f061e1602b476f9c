//! Jupiter Price Lookup
//!
//! Reply type for the Price API. Prices arrive as strings keyed by mint:
//! `{"data": {"<mint>": {"price": "147.25", ...}, ...}}`.

use std::collections::HashMap;

use serde::Deserialize;

/// Price API reply
#[derive(Debug, Clone, Deserialize)]
pub struct PriceReply {
    #[serde(default)]
    data: HashMap<String, PriceData>,
}

#[derive(Debug, Clone, Deserialize)]
struct PriceData {
    price: String,
}

impl PriceReply {
    /// USD price for a mint, if the API returned a parseable one.
    pub fn price_for(&self, mint: &str) -> Option<f64> {
        self.data.get(mint)?.price.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOL_MINT: &str = "So11111111111111111111111111111111111111112";

    #[test]
    fn test_price_parsing() {
        let json = format!(
            r#"{{"data": {{"{}": {{"id": "{}", "type": "derivedPrice", "price": "147.25"}}}}, "timeTaken": 0.003}}"#,
            SOL_MINT, SOL_MINT
        );

        let reply: PriceReply = serde_json::from_str(&json).unwrap();
        let price = reply.price_for(SOL_MINT).unwrap();
        assert!((price - 147.25).abs() < 1e-9);
    }

    #[test]
    fn test_price_for_unknown_mint() {
        let reply: PriceReply = serde_json::from_str(r#"{"data": {}}"#).unwrap();
        assert!(reply.price_for(SOL_MINT).is_none());
    }

    #[test]
    fn test_unparseable_price_is_none() {
        let json = format!(r#"{{"data": {{"{}": {{"price": "n/a"}}}}}}"#, SOL_MINT);
        let reply: PriceReply = serde_json::from_str(&json).unwrap();
        assert!(reply.price_for(SOL_MINT).is_none());
    }

    #[test]
    fn test_missing_data_key() {
        let reply: PriceReply = serde_json::from_str(r#"{"timeTaken": 0.01}"#).unwrap();
        assert!(reply.price_for(SOL_MINT).is_none());
    }
}
