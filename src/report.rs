// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Portfolio report types and plain-text rendering
//!
//! Lines are fixed-width for visual alignment only:
//!
//! ```text
//! ETH        2.500000 => $7500.00
//! USDC     100.000000 => $100.00
//! TOTAL              => $7600.00
//! ```
//!
//! The layout is not a machine-readable contract.

use std::io::Write;

use crate::errors::{BalanceResolutionError, PriceResolutionError};
use crate::types::tokens::{NormalizedAmount, UsdValue};

/// One successfully valued asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    /// Asset symbol
    pub symbol: String,
    /// Balance in whole tokens
    pub amount: NormalizedAmount,
    /// Unrounded USD value of the balance
    pub usd: UsdValue,
}

/// Why an asset did not appear in the report
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    /// The wallet holds none of this asset
    #[error("zero balance")]
    ZeroBalance,

    /// The balance lookup failed
    #[error(transparent)]
    Balance(#[from] BalanceResolutionError),

    /// The price-feed read failed
    #[error(transparent)]
    Price(#[from] PriceResolutionError),
}

/// An asset left out of the report, kept for diagnostics
#[derive(Debug)]
pub struct SkippedAsset {
    /// Asset symbol
    pub symbol: String,
    /// Why it was skipped
    pub reason: SkipReason,
}

/// Result of valuing one wallet
#[derive(Debug, Default)]
pub struct PortfolioReport {
    /// Valued assets in configuration order
    pub lines: Vec<ReportLine>,
    /// Sum of the unrounded USD values of `lines`
    pub total: UsdValue,
    /// Assets that were left out, in configuration order
    pub skipped: Vec<SkippedAsset>,
}

impl PortfolioReport {
    /// Symbols of the valued assets, in report order
    pub fn symbols(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.symbol.as_str()).collect()
    }
}

/// Receives report lines as soon as each asset is valued
pub trait ReportSink {
    /// Called once per valued asset, in configuration order
    fn asset_line(&mut self, line: &ReportLine) -> std::io::Result<()>;

    /// Called once after every asset has been processed
    fn total_line(&mut self, total: &UsdValue) -> std::io::Result<()>;
}

/// Render one asset line: `SYMBOL  <amount@6dp> => $<usd@2dp>`
pub fn format_asset_line(line: &ReportLine) -> String {
    format!("{:<6} {:>12} => {}", line.symbol, line.amount, line.usd)
}

/// Render the closing total line: `TOTAL  <blank> => $<usd@2dp>`
pub fn format_total_line(total: &UsdValue) -> String {
    format!("TOTAL {:>12} => {}", "", total)
}

/// [`ReportSink`] writing plain-text lines to any writer
#[derive(Debug)]
pub struct TextReport<W> {
    out: W,
}

impl<W: Write> TextReport<W> {
    /// Write report lines to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextReport<W> {
    fn asset_line(&mut self, line: &ReportLine) -> std::io::Result<()> {
        writeln!(self.out, "{}", format_asset_line(line))?;
        self.out.flush()
    }

    fn total_line(&mut self, total: &UsdValue) -> std::io::Result<()> {
        writeln!(self.out, "{}", format_total_line(total))?;
        self.out.flush()
    }
}
