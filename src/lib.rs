// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # Feedscan
//!
//! Read-only USD valuation of an EVM address.
//!
//! Feedscan reads the native-currency balance and a configured set of ERC-20
//! token balances of one wallet, prices each through an on-chain
//! Chainlink-style USD feed, and prints one line per non-zero asset followed
//! by a total. All arithmetic is exact: raw on-chain integers become
//! [`bigdecimal::BigDecimal`] values without passing through floating point,
//! and rounding happens only when a value is displayed.
//!
//! ## Layout
//!
//! - [`codec`]: `balanceOf`, `decimals` and `latestRoundData` payloads and decoders
//! - [`fixed_point`]: exact `raw / 10^decimals` conversion and fixed-digit formatting
//! - [`provider`]: HTTP provider factory and the [`ChainReader`](provider::ChainReader) seam
//! - [`retrieval`]: balance and price resolution over a `ChainReader`
//! - [`portfolio`]: per-asset valuation and the running total
//! - [`report`]: report types and the plain-text line format
//! - [`config`]: RPC endpoint and asset table
//!
//! ## Example
//!
//! ```rust,ignore
//! use feedscan::config::FeedscanConfig;
//! use feedscan::portfolio::Portfolio;
//! use feedscan::provider::{create_http_provider, ProviderReader};
//! use feedscan::report::TextReport;
//!
//! let config = FeedscanConfig::from_env(None)?;
//! let reader = ProviderReader::new(create_http_provider(&config.provider)?);
//! let portfolio = Portfolio::new(reader, config.assets);
//!
//! let mut sink = TextReport::new(std::io::stdout().lock());
//! let report = portfolio.run(wallet, &mut sink).await?;
//! ```
//!
//! ## Error handling
//!
//! Per-asset failures never abort a run; see [`errors`] for the taxonomy.

pub mod bootstrap;
pub mod codec;
pub mod config;
pub mod errors;
pub mod fixed_point;
pub mod portfolio;
pub mod provider;
pub mod report;
pub mod retrieval;
mod spans;
pub mod types;

pub use errors::{
    BalanceResolutionError, CodecError, ConfigError, FeedStage, FeedscanError,
    PriceResolutionError, RpcError,
};
pub use portfolio::{AssetOutcome, Portfolio};
pub use report::{PortfolioReport, ReportLine, ReportSink, SkipReason, SkippedAsset, TextReport};
pub use types::tokens::{NormalizedAmount, TokenAmount, TokenDecimals, TokenPrice, UsdValue};
