//! Jupswap - one-shot token swap CLI for Solana via the Jupiter aggregator

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use jupswap::adapters::cli::CliApp;
use jupswap::adapters::jupiter::{JupiterClient, JupiterConfig};
use jupswap::adapters::solana::{SolanaClient, WalletManager};
use jupswap::application::pipeline::explorer_link;
use jupswap::application::{SwapParams, SwapPipeline};
use jupswap::config::load_config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (secrets go here, not in config.toml)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();
    init_logging(app.verbose, app.debug);

    let config = load_config(&app.config).context("Failed to load configuration")?;

    let jupiter = JupiterClient::with_config(JupiterConfig {
        quote_url: config.jupiter.quote_url.clone(),
        swap_url: config.jupiter.swap_url.clone(),
        token_list_url: config.jupiter.token_list_url.clone(),
        price_url: config.jupiter.price_url.clone(),
        api_key: config.jupiter.get_api_key(),
        timeout: Duration::from_secs(config.jupiter.timeout_secs),
    })
    .context("Failed to create Jupiter client")?;

    let rpc_url = app
        .rpc_url
        .clone()
        .unwrap_or_else(|| config.solana.get_rpc_url());
    let solana = SolanaClient::new(rpc_url);

    // Expand keypair path (handles ~ for home directory)
    let keypair_path = match &app.keypair {
        Some(path) => path.display().to_string(),
        None => config.solana.get_keypair_path(),
    };
    let keypair_path = shellexpand::tilde(&keypair_path).to_string();
    let wallet = WalletManager::from_env_or_file(&keypair_path)
        .with_context(|| format!("Failed to load wallet from '{}'", keypair_path))?;

    let params = SwapParams {
        input_mint: app.input_mint,
        output_mint: app.output_mint,
        amount_usd: app.amount_usd,
        input_decimals: app.decimals,
        slippage_bps: app.slippage.unwrap_or(config.jupiter.slippage_bps),
    };

    tracing::info!(
        input = %params.input_mint,
        output = %params.output_mint,
        usd = params.amount_usd,
        slippage_bps = params.slippage_bps,
        "starting swap"
    );

    let pipeline = SwapPipeline::new(jupiter, solana, wallet);
    match pipeline.run(&params).await {
        Ok(signature) => {
            println!("✅ Sent tx: {}", explorer_link(&signature));
            Ok(())
        }
        Err(err) => {
            eprintln!("❌ {err}");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool, debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt().with_env_filter(filter).with_target(false).init();
}
