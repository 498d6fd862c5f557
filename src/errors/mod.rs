// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the feedscan library.
//!
//! This module provides strongly-typed errors for all public APIs in feedscan.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling
//!   (`BalanceResolutionError`, `PriceResolutionError`, etc.)
//! - **Unified error type** (`FeedscanError`) for the failures that end a run
//!
//! # Architecture
//!
//! - [`RpcError`] - Node call failures shared by every resolver
//! - [`CodecError`] - Contract responses that do not match the expected shape
//! - [`BalanceResolutionError`] - Errors from native and token balance lookups
//! - [`PriceResolutionError`] - Errors from price-feed reads, tagged with a [`FeedStage`]
//! - [`ConfigError`] - Setup failures that abort a run before any output
//!
//! Per-asset errors (balance and price) never abort a portfolio run; the
//! asset is skipped and the error is logged. Only [`ConfigError`] and report
//! output failures surface as [`FeedscanError`] from a run.
//!
//! # Example
//!
//! ```rust,ignore
//! use feedscan::{FeedscanError, ConfigError};
//!
//! match feedscan::bootstrap::run(cli).await {
//!     Ok(()) => {}
//!     Err(FeedscanError::Config(ConfigError::MissingEnvVar(var))) => {
//!         eprintln!("set {var} first");
//!     }
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! ```

mod balance;
mod codec;
mod config;
mod price;
mod rpc;

pub use balance::BalanceResolutionError;
pub use codec::CodecError;
pub use config::ConfigError;
pub use price::{FeedStage, PriceResolutionError};
pub use rpc::RpcError;

/// Errors that end a feedscan run.
///
/// Per-asset resolution errors are not represented here: they are recorded
/// as skips in the report instead.
#[derive(Debug, thiserror::Error)]
pub enum FeedscanError {
    /// Setup failure (environment, RPC URL, asset file).
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The report could not be written.
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
