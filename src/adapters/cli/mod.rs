//! CLI Argument Definitions
//!
//! Single-purpose invocation: one swap per run, no subcommands.

use clap::Parser;
use std::path::PathBuf;

/// Jupswap - one-shot token swap on Solana via the Jupiter aggregator
#[derive(Parser, Debug)]
#[command(
    name = "jupswap",
    version = env!("CARGO_PKG_VERSION"),
    about = "One-shot token swap on Solana via the Jupiter aggregator",
    long_about = "Swaps a USD-denominated amount of one token for another through \
                  Jupiter: tradability check, quote, transaction build, local \
                  signing, and RPC submission, in one pass."
)]
pub struct CliApp {
    /// Input token mint address
    #[arg(value_name = "INPUT_MINT")]
    pub input_mint: String,

    /// Output token mint address
    #[arg(value_name = "OUTPUT_MINT")]
    pub output_mint: String,

    /// Amount to swap, denominated in USD
    #[arg(value_name = "AMOUNT_USD")]
    pub amount_usd: f64,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/mainnet.toml")]
    pub config: PathBuf,

    /// Slippage tolerance in basis points (overrides config)
    #[arg(long, value_name = "BPS")]
    pub slippage: Option<u16>,

    /// Decimal places of the input token
    #[arg(long, value_name = "N", default_value = "9")]
    pub decimals: u8,

    /// Override RPC URL
    #[arg(long, value_name = "URL")]
    pub rpc_url: Option<String>,

    /// Override keypair path
    #[arg(long, value_name = "FILE")]
    pub keypair: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
