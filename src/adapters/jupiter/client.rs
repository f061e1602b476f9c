//! Jupiter API Client
//!
//! HTTP client for the Jupiter aggregator endpoints used by the swap
//! pipeline. Every call is a single attempt with a uniform timeout; a failed
//! request surfaces immediately with a truncated copy of the response body.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

use super::price::PriceReply;
use super::quote::{QuoteReply, QuoteRequest};
use super::swap::{SwapReply, SwapRequest};
use super::token_list::TokenEntry;
use super::truncate_body;

/// Characters of a failed response body kept for diagnostics
const ERROR_BODY_LIMIT: usize = 300;

/// Jupiter API client configuration
#[derive(Debug, Clone)]
pub struct JupiterConfig {
    /// V6 quote endpoint
    pub quote_url: String,
    /// V6 swap endpoint
    pub swap_url: String,
    /// Token registry endpoint
    pub token_list_url: String,
    /// Price API endpoint
    pub price_url: String,
    /// Optional API key for higher rate limits
    pub api_key: Option<String>,
    /// Uniform timeout for every outbound request
    pub timeout: Duration,
}

impl Default for JupiterConfig {
    fn default() -> Self {
        Self {
            quote_url: "https://quote-api.jup.ag/v6/quote".to_string(),
            swap_url: "https://quote-api.jup.ag/v6/swap".to_string(),
            token_list_url: "https://token.jup.ag/all".to_string(),
            price_url: "https://lite-api.jup.ag/price/v3".to_string(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Errors from Jupiter API calls
#[derive(Debug, Error)]
pub enum JupiterApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status; body truncated for diagnostics
    #[error("{status} → {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No price data for mint: {0}")]
    NoPriceData(String),
}

/// Jupiter aggregator client
#[derive(Debug, Clone)]
pub struct JupiterClient {
    config: JupiterConfig,
    http: Client,
}

impl JupiterClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self, JupiterApiError> {
        Self::with_config(JupiterConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: JupiterConfig) -> Result<Self, JupiterApiError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    /// Fetch the full token registry.
    pub async fn fetch_token_list(&self) -> Result<Vec<TokenEntry>, JupiterApiError> {
        let req = self.http.get(&self.config.token_list_url);
        let value = self.expect_json(req).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch the USD price of one mint.
    pub async fn fetch_price_usd(&self, mint: &str) -> Result<f64, JupiterApiError> {
        let req = self.http.get(&self.config.price_url).query(&[("ids", mint)]);
        let value = self.expect_json(req).await?;
        let reply: PriceReply = serde_json::from_value(value)?;
        reply
            .price_for(mint)
            .ok_or_else(|| JupiterApiError::NoPriceData(mint.to_string()))
    }

    /// GET /quote with fixed ExactIn mode. The reply shape is polymorphic and
    /// is normalized by [`QuoteReply`].
    pub async fn get_quote(&self, request: &QuoteRequest) -> Result<QuoteReply, JupiterApiError> {
        let req = self.http.get(&self.config.quote_url).query(&[
            ("inputMint", &request.input_mint),
            ("outputMint", &request.output_mint),
            ("amount", &request.amount.to_string()),
            ("slippageBps", &request.slippage_bps.to_string()),
            ("swapMode", &"ExactIn".to_string()),
        ]);
        let value = self.expect_json(req).await?;
        Ok(QuoteReply::from_value(value))
    }

    /// POST /swap to obtain the serialized transaction for a chosen route.
    pub async fn get_swap_transaction(
        &self,
        request: &SwapRequest,
    ) -> Result<SwapReply, JupiterApiError> {
        let req = self.http.post(&self.config.swap_url).json(request);
        let value = self.expect_json(req).await?;
        Ok(SwapReply::from_value(value))
    }

    /// Send one request, enforce a success status, parse the body as JSON.
    async fn expect_json(&self, req: reqwest::RequestBuilder) -> Result<Value, JupiterApiError> {
        let mut req = req;
        if let Some(ref api_key) = self.config.api_key {
            req = req.header("x-api-key", api_key);
        }

        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(JupiterApiError::Status {
                status,
                body: truncate_body(&text, ERROR_BODY_LIMIT),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// The configured quote endpoint
    pub fn quote_url(&self) -> &str {
        &self.config.quote_url
    }
}
