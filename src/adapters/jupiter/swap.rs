//! Jupiter Swap Types
//!
//! Request body for the V6 swap endpoint and its reply. The reply is kept as
//! raw JSON until the transaction field has been validated, so a malformed
//! reply can surface its body instead of a bare deserialization error.

use serde::Serialize;
use serde_json::Value;

use super::truncate_body;

/// Request body for building a swap transaction
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    /// The selected route, passed through from /quote unmodified
    pub quote_response: Value,
    /// User's public key (wallet address)
    pub user_public_key: String,
    /// Wrap and unwrap native SOL automatically
    pub wrap_and_unwrap_sol: bool,
}

impl SwapRequest {
    pub fn new(quote_response: Value, user_public_key: String) -> Self {
        Self {
            quote_response,
            user_public_key,
            wrap_and_unwrap_sol: true,
        }
    }
}

/// Reply from the swap endpoint
#[derive(Debug, Clone)]
pub struct SwapReply {
    raw: Value,
}

impl SwapReply {
    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    /// The base64-encoded serialized transaction, if the reply carries one.
    pub fn swap_transaction(&self) -> Option<&str> {
        self.raw.get("swapTransaction")?.as_str()
    }

    /// Raw reply for diagnostics, truncated to `max_chars`.
    pub fn raw_truncated(&self, max_chars: usize) -> String {
        truncate_body(&self.raw.to_string(), max_chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_swap_request_serialization() {
        let route = json!({"inAmount": "1000000", "outAmount": "150000"});
        let req = SwapRequest::new(route, "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM".to_string());

        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body["userPublicKey"],
            "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM"
        );
        assert_eq!(body["wrapAndUnwrapSol"], true);
        assert_eq!(body["quoteResponse"]["inAmount"], "1000000");
    }

    #[test]
    fn test_swap_transaction_present() {
        let reply = SwapReply::from_value(json!({
            "swapTransaction": "AQAAAA==",
            "lastValidBlockHeight": 123456789u64
        }));
        assert_eq!(reply.swap_transaction(), Some("AQAAAA=="));
    }

    #[test]
    fn test_swap_transaction_missing() {
        let reply = SwapReply::from_value(json!({"error": "simulation failed"}));
        assert_eq!(reply.swap_transaction(), None);
    }

    #[test]
    fn test_swap_transaction_wrong_type() {
        let reply = SwapReply::from_value(json!({"swapTransaction": 17}));
        assert_eq!(reply.swap_transaction(), None);
    }

    #[test]
    fn test_raw_truncated_bounds() {
        let reply = SwapReply::from_value(json!({"error": "y".repeat(1000)}));
        assert!(reply.raw_truncated(400).chars().count() <= 400);
    }
}
