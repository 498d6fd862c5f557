// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Price reads from Chainlink-style USD feeds
//!
//! A feed publishes an integer `answer` together with its own `decimals()`,
//! so resolving one price always takes exactly two calls: `decimals()` then
//! `latestRoundData()`. There is no caching; every resolution reads the chain.

use alloy_primitives::Address;
use tracing::{debug, Instrument};

use crate::codec::{
    decimals_call, decode_decimals, decode_latest_round_data, latest_round_data_call, RoundData,
};
use crate::errors::{FeedStage, PriceResolutionError};
use crate::provider::ChainReader;
use crate::spans;
use crate::types::tokens::{TokenDecimals, TokenPrice};

/// A feed's precision and latest round, as read from the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedReading {
    /// Decimal places of `round.answer`
    pub decimals: TokenDecimals,
    /// Latest published round
    pub round: RoundData,
}

impl FeedReading {
    /// Precision-normalized price: `answer / 10^decimals`
    ///
    /// Negative answers yield negative prices.
    pub fn price(&self) -> TokenPrice {
        TokenPrice::from_feed_answer(self.round.answer, self.decimals)
    }
}

/// Read a feed's `decimals()` and `latestRoundData()`.
///
/// # Errors
///
/// Returns [`PriceResolutionError`] tagged with the failing [`FeedStage`] if
/// either call fails or either response cannot be decoded.
pub async fn read_feed<R>(reader: &R, feed: Address) -> Result<FeedReading, PriceResolutionError>
where
    R: ChainReader + ?Sized,
{
    let data = reader
        .call(feed, decimals_call())
        .await
        .map_err(|e| PriceResolutionError::rpc(feed, FeedStage::Decimals, e))?;
    let decimals = decode_decimals(&data)
        .map_err(|e| PriceResolutionError::decode(feed, FeedStage::Decimals, e))?;

    let data = reader
        .call(feed, latest_round_data_call())
        .await
        .map_err(|e| PriceResolutionError::rpc(feed, FeedStage::LatestRound, e))?;
    let round = decode_latest_round_data(&data)
        .map_err(|e| PriceResolutionError::decode(feed, FeedStage::LatestRound, e))?;

    Ok(FeedReading { decimals, round })
}

/// Resolve the USD price published by a feed.
///
/// # Example
///
/// ```rust,ignore
/// use feedscan::{config::constants::feeds, retrieval::resolve_price};
///
/// let price = resolve_price(&reader, feeds::ETH_USD).await?;
/// println!("ETH/USD: {price}");
/// ```
pub async fn resolve_price<R>(reader: &R, feed: Address) -> Result<TokenPrice, PriceResolutionError>
where
    R: ChainReader + ?Sized,
{
    async move {
        let reading = read_feed(reader, feed).await?;
        let price = reading.price();

        debug!(
            decimals = reading.decimals.as_u8(),
            answer = %reading.round.answer,
            updated_at = %reading.round.updated_at,
            %price,
            "Resolved feed price"
        );
        Ok::<_, PriceResolutionError>(price)
    }
    .instrument(spans::resolve_price(feed))
    .await
}
