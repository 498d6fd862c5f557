// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for feedscan operations.
//!
//! Telemetry concerns are kept separate from business logic. Instead of using
//! `#[instrument]` attributes directly on functions, each instrumented operation
//! has a corresponding span helper here, attached with
//! [`tracing::Instrument`].
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(spans::my_operation(param_value))
//!     .await
//! }
//! ```

use alloy_primitives::Address;
use tracing::{Level, Span};

use crate::config::AssetKind;

/// Create span for valuing every configured asset of one wallet.
///
/// Parent: None (root span for a run)
/// Children: value_asset spans (one per asset)
#[inline]
pub(crate) fn portfolio_run(wallet: Address, assets: usize) -> Span {
    tracing::span!(
        Level::INFO,
        "feedscan.portfolio_run",
        wallet = %wallet,
        assets = assets,
    )
}

/// Create span for valuing a single asset.
///
/// Parent: portfolio_run span
/// Children: resolve_balance and resolve_price spans
#[inline]
pub(crate) fn value_asset(symbol: &str) -> Span {
    tracing::debug_span!("feedscan.value_asset", symbol = symbol)
}

/// Create span for a balance lookup.
///
/// Parent: value_asset span
/// Children: one eth_getBalance or eth_call
#[inline]
pub(crate) fn resolve_balance(kind: AssetKind, owner: Address) -> Span {
    tracing::debug_span!(
        "feedscan.resolve_balance",
        token = ?kind.token_address(),
        owner = %owner,
    )
}

/// Create span for reading a price feed.
///
/// Parent: value_asset span
/// Children: decimals() and latestRoundData() eth_calls
#[inline]
pub(crate) fn resolve_price(feed: Address) -> Span {
    tracing::debug_span!("feedscan.resolve_price", feed = %feed)
}
