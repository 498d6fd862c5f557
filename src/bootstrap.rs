// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line entry point for the `feedscan` binary

use std::path::PathBuf;

use alloy_primitives::Address;
use clap::Parser;
use dotenvy::dotenv;
use tracing::info;

use crate::{
    config::FeedscanConfig,
    errors::FeedscanError,
    portfolio::Portfolio,
    provider::{create_http_provider, ProviderReader},
    report::{PortfolioReport, ReportSink, TextReport},
};

/// Value an Ethereum address in USD using on-chain Chainlink feeds.
///
/// The node endpoint is read from `ETH_RPC_URL` (a `.env` file is honoured).
#[derive(Debug, Parser)]
#[command(name = "feedscan", version, about)]
pub struct Cli {
    /// Wallet address to value (0x-prefixed, 40 hex digits)
    #[arg(value_parser = parse_wallet)]
    pub wallet: Address,

    /// JSON file replacing the built-in mainnet asset table
    #[arg(long, value_name = "PATH")]
    pub assets: Option<PathBuf>,
}

fn parse_wallet(s: &str) -> Result<Address, String> {
    s.trim()
        .parse::<Address>()
        .map_err(|e| format!("invalid wallet address '{s}': {e}"))
}

/// Main entry point for the application.
///
/// Report lines go to stdout; diagnostics go to stderr through `tracing`.
pub async fn run(cli: Cli) -> Result<(), FeedscanError> {
    // Load environment variables
    dotenv().ok();

    let config = FeedscanConfig::from_env(cli.assets.as_deref())?;

    let stdout = std::io::stdout();
    let mut sink = TextReport::new(stdout.lock());
    run_with_config(&config, cli.wallet, &mut sink).await?;

    Ok(())
}

/// Value `wallet` with an already-loaded config, writing lines to `sink`
///
/// # Errors
///
/// - [`FeedscanError::Config`] if the RPC URL is not a valid http(s) URL;
///   nothing is written to `sink` in that case
/// - [`FeedscanError::Output`] if `sink` fails
pub async fn run_with_config<S>(
    config: &FeedscanConfig,
    wallet: Address,
    sink: &mut S,
) -> Result<PortfolioReport, FeedscanError>
where
    S: ReportSink + ?Sized,
{
    let provider = create_http_provider(&config.provider)?;
    info!(%wallet, assets = config.assets.len(), "Starting portfolio valuation");

    let portfolio = Portfolio::new(ProviderReader::new(provider), config.assets.clone());
    Ok(portfolio.run(wallet, sink).await?)
}
