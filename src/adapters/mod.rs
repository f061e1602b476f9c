//! Adapters Layer - External System Implementations
//!
//! This module contains the external-facing pieces of the pipeline:
//! - Jupiter: aggregator API client (token list, price, quote, swap)
//! - Solana: RPC submission client and wallet management
//! - CLI: command-line argument definitions

pub mod cli;
pub mod jupiter;
pub mod solana;

pub use cli::CliApp;
pub use jupiter::JupiterClient;
pub use solana::{SolanaClient, WalletManager};
