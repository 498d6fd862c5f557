// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! On-chain data retrieval.
//!
//! This module resolves the two inputs needed to value an asset:
//! - Balances, from the native currency or an ERC-20 token contract
//! - Prices, from Chainlink-style USD feeds
//!
//! Every function performs its remote calls through a
//! [`ChainReader`](crate::provider::ChainReader) and reports failures to the
//! caller; nothing is retried, cached or defaulted here.

mod balance;
mod price;

pub use balance::resolve_balance;
pub use price::{read_feed, resolve_price, FeedReading};
