// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token price type (USD per token)

use alloy_primitives::I256;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::decimals::TokenDecimals;
use super::normalized::NormalizedAmount;
use super::usd::UsdValue;
use crate::fixed_point::{decode_signed, format_fixed};

/// Price of one token in USD
///
/// This type represents the exchange rate between a token and USD as
/// reported by a price feed, providing type safety to distinguish prices
/// from amounts or raw values.
///
/// Feed answers are signed, so a price may be negative. No positivity
/// check is applied here.
///
/// # Examples
///
/// ```
/// use alloy_primitives::I256;
/// use feedscan::{TokenDecimals, TokenPrice};
///
/// // Chainlink ETH/USD answer with 8 decimals
/// let answer = I256::try_from(300_000_000_000i64).unwrap();
/// let price = TokenPrice::from_feed_answer(answer, TokenDecimals::FEED);
/// assert_eq!(price.format(8), "$3000.00000000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenPrice(BigDecimal);

impl TokenPrice {
    /// Create a new token price
    pub fn new(price_per_token: BigDecimal) -> Self {
        Self(price_per_token)
    }

    /// Build a price from a feed's raw `answer` and its reported decimals
    pub fn from_feed_answer(answer: I256, decimals: TokenDecimals) -> Self {
        Self(decode_signed(answer, decimals))
    }

    /// Get the inner decimal value
    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Check if price is exactly zero
    pub fn is_zero(&self) -> bool {
        self.0 == BigDecimal::from(0)
    }

    /// Calculate USD value for a given amount of tokens
    ///
    /// The product is exact; rounding only happens when the value is displayed.
    pub fn value_of(&self, amount: &NormalizedAmount) -> UsdValue {
        UsdValue::new(amount.as_decimal() * &self.0)
    }

    /// Format as price string with specified precision
    pub fn format(&self, precision: u32) -> String {
        format!("${}", format_fixed(&self.0, precision))
    }
}

impl From<BigDecimal> for TokenPrice {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(6)) // 6 decimal places for crypto prices
    }
}
