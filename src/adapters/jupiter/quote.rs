//! Jupiter Quote Types
//!
//! Request parameters and the polymorphic reply of the V6 quote API. The API
//! answers either with a bare JSON array of routes or with an object wrapping
//! the array under a "data" key; [`QuoteReply`] normalizes both shapes.

use serde_json::Value;

use super::truncate_body;

/// Request parameters for getting a swap quote (ExactIn only)
#[derive(Debug, Clone)]
pub struct QuoteRequest {
    /// Input token mint address
    pub input_mint: String,
    /// Output token mint address
    pub output_mint: String,
    /// Amount in atomic units
    pub amount: u64,
    /// Slippage tolerance in basis points (1 = 0.01%)
    pub slippage_bps: u16,
}

impl QuoteRequest {
    pub fn new(input_mint: String, output_mint: String, amount: u64, slippage_bps: u16) -> Self {
        Self {
            input_mint,
            output_mint,
            amount,
            slippage_bps,
        }
    }
}

/// Reply from the quote endpoint, kept raw. Routes are opaque provider
/// objects and are passed through to the swap endpoint unmodified.
#[derive(Debug, Clone)]
pub struct QuoteReply {
    raw: Value,
}

impl QuoteReply {
    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    /// Route list in provider ranking order, best first. Both reply shapes
    /// normalize here; anything else yields an empty list.
    pub fn routes(&self) -> &[Value] {
        match &self.raw {
            Value::Array(list) => list,
            Value::Object(map) => map
                .get("data")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default(),
            _ => &[],
        }
    }

    /// Best-ranked route: always the first element.
    pub fn best_route(&self) -> Option<&Value> {
        self.routes().first()
    }

    /// Minimum-input hint some pairs return instead of routes. The field has
    /// appeared under two names.
    pub fn min_in_amount(&self) -> Option<u64> {
        let map = self.raw.as_object()?;
        map.get("minInAmount")
            .or_else(|| map.get("minIn"))?
            .as_u64()
    }

    /// Raw reply for diagnostics, truncated to `max_chars`.
    pub fn raw_truncated(&self, max_chars: usize) -> String {
        truncate_body(&self.raw.to_string(), max_chars)
    }
}
