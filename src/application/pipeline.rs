//! Swap Pipeline
//!
//! The linear flow of one swap: price lookup, tradability gate, quote,
//! transaction assembly, submission. Stages run strictly in order, one
//! attempt each; the first failure aborts the run. The tradability gate is
//! the only stage allowed to degrade: a registry that cannot be fetched is
//! skipped with a warning, while a registry that arrives is enforced as-is,
//! even when empty.

use base64::Engine;
use serde_json::Value;
use solana_sdk::transaction::VersionedTransaction;
use thiserror::Error;

use crate::adapters::jupiter::{
    JupiterApiError, JupiterClient, QuoteReply, QuoteRequest, SwapRequest, TradableSet,
};
use crate::adapters::solana::rpc::SolanaClientError;
use crate::adapters::solana::wallet::WalletError;
use crate::adapters::solana::{SolanaClient, WalletManager};

/// Fixed explorer prefix for the success link
pub const EXPLORER_TX_URL: &str = "https://explorer.solana.com/tx/";

/// Characters of the swap reply surfaced when the transaction field is missing
const MALFORMED_SWAP_BODY_LIMIT: usize = 400;

/// Characters of the quote reply dumped when no route and no hint exist
const RAW_QUOTE_DUMP_LIMIT: usize = 800;

/// Everything one run needs, fixed before the first network call
#[derive(Debug, Clone)]
pub struct SwapParams {
    pub input_mint: String,
    pub output_mint: String,
    /// Requested input amount, denominated in USD
    pub amount_usd: f64,
    /// Decimal places of the input token
    pub input_decimals: u8,
    pub slippage_bps: u16,
}

/// Failure taxonomy of the pipeline. Display strings are the user-facing
/// messages; the binary prefixes them with an emoji marker.
#[derive(Debug, Error)]
pub enum SwapError {
    #[error("Failed to fetch input token price: {0}")]
    Price(JupiterApiError),

    #[error("Input token price is not positive ({0} USD)")]
    InvalidPrice(f64),

    #[error("Input token is not marked tradable in the Jupiter token list")]
    InputNotTradable,

    #[error("Output token is not marked tradable in the Jupiter token list — try another mint")]
    OutputNotTradable,

    #[error("Quote API error: {0}")]
    QuoteApi(JupiterApiError),

    #[error("Minimum amount for this pair ≈ {min_usd:.2} USD (minInAmount = {min_atoms}). Try a larger amount or another pair.")]
    BelowMinimumAmount { min_usd: f64, min_atoms: u64 },

    #[error("Jupiter found no route. Try a bit more USD or another pair.")]
    NoRoute,

    #[error("Swap API error: {0}")]
    SwapApi(JupiterApiError),

    #[error("Swap API did not return swapTransaction: {0}")]
    MalformedSwapReply(String),

    #[error("Failed to decode swap transaction: {0}")]
    TransactionDecode(String),

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error("RPC sendTransaction failed: {0}")]
    Rpc(SolanaClientError),
}

/// One-shot swap driver. Owns every external client for the run.
pub struct SwapPipeline {
    jupiter: JupiterClient,
    solana: SolanaClient,
    wallet: WalletManager,
}

impl SwapPipeline {
    pub fn new(jupiter: JupiterClient, solana: SolanaClient, wallet: WalletManager) -> Self {
        Self {
            jupiter,
            solana,
            wallet,
        }
    }

    /// Run the full pipeline and return the transaction signature.
    pub async fn run(&self, params: &SwapParams) -> Result<String, SwapError> {
        let price_usd = self.input_price(params).await?;
        let atoms_in = atoms_from_usd(params.amount_usd, price_usd, params.input_decimals);
        tracing::info!(price_usd, atoms_in, "sized input amount");

        self.check_tradability(params).await?;

        let route = self.best_route(params, atoms_in, price_usd).await?;
        let transaction = self.build_signed_transaction(&route).await?;

        let signature = self
            .solana
            .send_transaction(&transaction)
            .await
            .map_err(SwapError::Rpc)?;
        tracing::info!(%signature, "transaction submitted");
        Ok(signature)
    }

    /// USD price per whole unit of the input token.
    async fn input_price(&self, params: &SwapParams) -> Result<f64, SwapError> {
        let price = self
            .jupiter
            .fetch_price_usd(&params.input_mint)
            .await
            .map_err(SwapError::Price)?;
        if price <= 0.0 {
            return Err(SwapError::InvalidPrice(price));
        }
        Ok(price)
    }

    /// Tradability gate. Fails open on fetch failure only: a registry that
    /// arrives, however sparse, is enforced.
    async fn check_tradability(&self, params: &SwapParams) -> Result<(), SwapError> {
        let entries = match self.jupiter.fetch_token_list().await {
            Ok(entries) => entries,
            Err(err) => {
                eprintln!(
                    "⚠️ Could not fetch Jupiter token list ({err}). Continuing without the check …"
                );
                return Ok(());
            }
        };

        let tradable = TradableSet::from_entries(entries);
        tracing::debug!(tradable = tradable.len(), "token registry fetched");
        check_pair(&tradable, &params.input_mint, &params.output_mint)
    }

    /// Quote the pair and select the provider's best-ranked route.
    async fn best_route(
        &self,
        params: &SwapParams,
        atoms_in: u64,
        price_usd: f64,
    ) -> Result<Value, SwapError> {
        let request = QuoteRequest::new(
            params.input_mint.clone(),
            params.output_mint.clone(),
            atoms_in,
            params.slippage_bps,
        );
        let reply = self
            .jupiter
            .get_quote(&request)
            .await
            .map_err(SwapError::QuoteApi)?;

        match reply.best_route() {
            Some(route) => Ok(route.clone()),
            None => Err(no_route_error(
                &reply,
                atoms_in,
                price_usd,
                params.input_decimals,
            )),
        }
    }

    /// Fetch the pre-built transaction for the route, decode it, sign it.
    async fn build_signed_transaction(
        &self,
        route: &Value,
    ) -> Result<VersionedTransaction, SwapError> {
        let request = SwapRequest::new(route.clone(), self.wallet.public_key());
        let reply = self
            .jupiter
            .get_swap_transaction(&request)
            .await
            .map_err(SwapError::SwapApi)?;

        let encoded = reply.swap_transaction().ok_or_else(|| {
            SwapError::MalformedSwapReply(reply.raw_truncated(MALFORMED_SWAP_BODY_LIMIT))
        })?;
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| SwapError::TransactionDecode(e.to_string()))?;
        let mut transaction: VersionedTransaction =
            bincode::deserialize(&bytes).map_err(|e| SwapError::TransactionDecode(e.to_string()))?;

        self.wallet.sign_versioned(&mut transaction)?;
        Ok(transaction)
    }
}

/// Enforce the gate against a successfully fetched registry. The input side
/// is checked first; an empty registry fails both.
pub fn check_pair(
    tradable: &TradableSet,
    input_mint: &str,
    output_mint: &str,
) -> Result<(), SwapError> {
    if !tradable.contains(input_mint) {
        return Err(SwapError::InputNotTradable);
    }
    if !tradable.contains(output_mint) {
        return Err(SwapError::OutputNotTradable);
    }
    Ok(())
}

/// Failure for an empty route list: surface the provider's minimum-amount
/// hint when it exceeds the requested amount, otherwise dump the raw reply
/// and fall back to the generic no-route message.
pub fn no_route_error(
    reply: &QuoteReply,
    atoms_in: u64,
    price_usd: f64,
    input_decimals: u8,
) -> SwapError {
    if let Some(min_atoms) = reply.min_in_amount() {
        if min_atoms > atoms_in {
            let min_usd = ui_amount(min_atoms, input_decimals) * price_usd;
            return SwapError::BelowMinimumAmount { min_usd, min_atoms };
        }
    }
    eprintln!(
        "🔍 Quote API raw response (truncated): {}",
        reply.raw_truncated(RAW_QUOTE_DUMP_LIMIT)
    );
    SwapError::NoRoute
}

/// Convert a USD amount into atomic units at the given price-per-unit.
pub fn atoms_from_usd(amount_usd: f64, price_usd: f64, decimals: u8) -> u64 {
    (amount_usd / price_usd * 10f64.powi(decimals as i32)).round() as u64
}

/// Scale atomic units back to a decimal token amount.
pub fn ui_amount(atoms: u64, decimals: u8) -> f64 {
    atoms as f64 / 10f64.powi(decimals as i32)
}

/// Explorer link for a submitted transaction.
pub fn explorer_link(signature: &str) -> String {
    format!("{}{}", EXPLORER_TX_URL, signature)
}
