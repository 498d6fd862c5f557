// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Portfolio valuation across a configured asset list
//!
//! For each asset, in configuration order:
//!
//! 1. Resolve the wallet's raw balance
//! 2. Skip the asset if the balance is zero (no price read is made)
//! 3. Resolve the feed price and compute `balance / 10^decimals * price`
//! 4. Emit the report line immediately
//!
//! Failures for one asset are logged and the asset is skipped; they never
//! stop the run or contaminate the total. The total is the exact sum of the
//! unrounded per-asset values and is rounded only when displayed.
//!
//! # Example
//!
//! ```rust,ignore
//! use feedscan::{config::mainnet_assets, portfolio::Portfolio, report::TextReport};
//!
//! let portfolio = Portfolio::new(reader, mainnet_assets());
//! let mut sink = TextReport::new(std::io::stdout().lock());
//! let report = portfolio.run(wallet, &mut sink).await?;
//! println!("{} assets valued", report.lines.len());
//! ```

use alloy_primitives::Address;
use tracing::{debug, info, warn, Instrument};

use crate::config::AssetConfig;
use crate::provider::ChainReader;
use crate::report::{PortfolioReport, ReportLine, ReportSink, SkipReason, SkippedAsset};
use crate::retrieval::{resolve_balance, resolve_price};
use crate::spans;
use crate::types::tokens::UsdValue;

/// Outcome of valuing a single asset
#[derive(Debug)]
pub enum AssetOutcome {
    /// The asset contributes a report line
    Valued(ReportLine),
    /// The asset is left out of the report
    Skipped(SkippedAsset),
}

/// Values a wallet across a fixed list of assets
#[derive(Debug)]
pub struct Portfolio<R> {
    reader: R,
    assets: Vec<AssetConfig>,
}

impl<R: ChainReader> Portfolio<R> {
    /// Create a portfolio valuer reading through `reader`
    pub fn new(reader: R, assets: Vec<AssetConfig>) -> Self {
        Self { reader, assets }
    }

    /// Configured assets, in report order
    pub fn assets(&self) -> &[AssetConfig] {
        &self.assets
    }

    /// The underlying chain reader
    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Value one asset held by `wallet`.
    ///
    /// Never fails: zero balances and resolution errors become
    /// [`AssetOutcome::Skipped`].
    pub async fn value_asset(&self, asset: &AssetConfig, wallet: Address) -> AssetOutcome {
        async move {
            let balance = match resolve_balance(&self.reader, asset.kind, wallet).await {
                Ok(balance) => balance,
                Err(e) => {
                    warn!(symbol = %asset.symbol, error = %e, "Skipping asset: balance lookup failed");
                    return skipped(asset, e.into());
                }
            };

            if balance.is_zero() {
                debug!(symbol = %asset.symbol, "Skipping asset: zero balance");
                return skipped(asset, SkipReason::ZeroBalance);
            }

            let price = match resolve_price(&self.reader, asset.feed).await {
                Ok(price) => price,
                Err(e) => {
                    warn!(symbol = %asset.symbol, error = %e, "Skipping asset: price read failed");
                    return skipped(asset, e.into());
                }
            };

            let amount = balance.normalize(asset.decimals);
            let usd = price.value_of(&amount);
            debug!(symbol = %asset.symbol, %amount, %price, %usd, "Valued asset");

            AssetOutcome::Valued(ReportLine {
                symbol: asset.symbol.clone(),
                amount,
                usd,
            })
        }
        .instrument(spans::value_asset(&asset.symbol))
        .await
    }

    /// Value every configured asset and write the report to `sink`.
    ///
    /// Asset lines are written as each asset completes; the total line is
    /// written last, even when no asset was valued.
    ///
    /// # Errors
    ///
    /// Only write failures from `sink` are returned.
    pub async fn run<S>(&self, wallet: Address, sink: &mut S) -> std::io::Result<PortfolioReport>
    where
        S: ReportSink + ?Sized,
    {
        async move {
            let mut report = PortfolioReport::default();

            for asset in &self.assets {
                match self.value_asset(asset, wallet).await {
                    AssetOutcome::Valued(line) => {
                        sink.asset_line(&line)?;
                        report.total += &line.usd;
                        report.lines.push(line);
                    }
                    AssetOutcome::Skipped(skip) => report.skipped.push(skip),
                }
            }

            sink.total_line(&report.total)?;
            info!(
                valued = report.lines.len(),
                skipped = report.skipped.len(),
                total = %report.total,
                "Portfolio valued"
            );
            Ok::<_, std::io::Error>(report)
        }
        .instrument(spans::portfolio_run(wallet, self.assets.len()))
        .await
    }
}

fn skipped(asset: &AssetConfig, reason: SkipReason) -> AssetOutcome {
    AssetOutcome::Skipped(SkippedAsset {
        symbol: asset.symbol.clone(),
        reason,
    })
}

/// Sum of the unrounded values of `lines`
pub fn total_of(lines: &[ReportLine]) -> UsdValue {
    lines.iter().map(|line| &line.usd).sum()
}
