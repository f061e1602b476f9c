//! Jupiter Adapter
//!
//! Client and wire types for the Jupiter aggregator endpoints the pipeline
//! touches: token registry, price lookup, quote, and swap transaction.

mod client;
mod price;
mod quote;
mod swap;
mod token_list;

pub use client::{JupiterApiError, JupiterClient, JupiterConfig};
pub use price::PriceReply;
pub use quote::{QuoteReply, QuoteRequest};
pub use swap::{SwapReply, SwapRequest};
pub use token_list::{TokenEntry, TradableSet};

/// Truncate a response body for diagnostics, on a char boundary.
pub(crate) fn truncate_body(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
