//! Jupswap - One-Shot Jupiter Swap CLI for Solana
//!
//! Performs a single token swap through the Jupiter aggregator: tradability
//! check, quote, transaction assembly, local signing, RPC submission.
//!
//! # Modules
//!
//! - `adapters`: External implementations (Jupiter, Solana, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: The swap pipeline and its failure taxonomy

pub mod adapters;
pub mod application;
pub mod config;
