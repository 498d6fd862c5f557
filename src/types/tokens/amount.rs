// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw token amount type

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::decimals::TokenDecimals;
use super::normalized::NormalizedAmount;
use crate::fixed_point::decode_unsigned;

/// Raw token amount (not normalized for decimals)
///
/// This represents the raw token amount as stored on-chain in the smallest
/// unit (e.g., wei for ETH, 10^-6 USDC). To convert to human-readable
/// amounts, use [`normalize`](Self::normalize) with the token's [`TokenDecimals`].
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use feedscan::{TokenAmount, TokenDecimals};
///
/// // 1.5 ETH in wei (18 decimals)
/// let amount = TokenAmount::new(U256::from(1_500_000_000_000_000_000u64));
/// let normalized = amount.normalize(TokenDecimals::STANDARD);
/// assert_eq!(normalized.to_fixed(6), "1.500000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Zero token amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new token amount from U256
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Check if the raw amount is exactly zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Normalize by token decimals: amount / 10^decimals
    ///
    /// The result is exact for every U256 and every decimal count.
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use feedscan::{TokenAmount, TokenDecimals};
    ///
    /// // 100 USDC (6 decimals)
    /// let raw = TokenAmount::new(U256::from(100_000_000u64));
    /// let normalized = raw.normalize(TokenDecimals::USDC);
    /// assert_eq!(normalized.to_fixed(2), "100.00");
    /// ```
    pub fn normalize(&self, decimals: TokenDecimals) -> NormalizedAmount {
        NormalizedAmount::new(decode_unsigned(self.0, decimals))
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
