// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for price resolution.
//!
//! This module provides error types for operations in the `retrieval::price`
//! module, which reads a Chainlink-style feed to produce a USD price.

use alloy_primitives::Address;

use super::{CodecError, RpcError};

/// The feed call a price resolution failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStage {
    /// `decimals()`
    Decimals,
    /// `latestRoundData()`
    LatestRound,
}

impl std::fmt::Display for FeedStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedStage::Decimals => f.write_str("decimals()"),
            FeedStage::LatestRound => f.write_str("latestRoundData()"),
        }
    }
}

/// Errors that can occur while resolving a feed price.
///
/// # Examples
///
/// ```rust,ignore
/// use feedscan::{PriceResolver, PriceResolutionError};
///
/// match resolver.resolve_price(feed).await {
///     Ok(price) => println!("Price: {price}"),
///     Err(PriceResolutionError::Rpc { stage, source, .. }) => {
///         eprintln!("{stage} call failed: {source}");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum PriceResolutionError {
    /// A feed call failed at the transport level.
    #[error("Feed {feed} {stage} call failed: {source}")]
    Rpc {
        /// Feed contract address
        feed: Address,
        /// Which call failed
        stage: FeedStage,
        /// The RPC failure
        #[source]
        source: RpcError,
    },

    /// A feed call returned a response of the wrong shape.
    #[error("Feed {feed} {stage} response invalid: {source}")]
    Decode {
        /// Feed contract address
        feed: Address,
        /// Which call returned bad data
        stage: FeedStage,
        /// The decode failure
        #[source]
        source: CodecError,
    },
}

impl PriceResolutionError {
    /// Create an `Rpc` error for a feed call.
    pub fn rpc(feed: Address, stage: FeedStage, source: RpcError) -> Self {
        PriceResolutionError::Rpc {
            feed,
            stage,
            source,
        }
    }

    /// Create a `Decode` error for a feed call.
    pub fn decode(feed: Address, stage: FeedStage, source: CodecError) -> Self {
        PriceResolutionError::Decode {
            feed,
            stage,
            source,
        }
    }

    /// The feed call this error happened in.
    pub fn stage(&self) -> FeedStage {
        match self {
            PriceResolutionError::Rpc { stage, .. } | PriceResolutionError::Decode { stage, .. } => {
                *stage
            }
        }
    }
}
