// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token decimal precision type

use serde::{Deserialize, Serialize};

/// Decimal precision of a token or price feed
///
/// Represents the number of decimal places between an on-chain integer and
/// its human-readable value. Most ERC-20 tokens use 18 decimals (like ETH),
/// but some use different values:
/// - USDC: 6 decimals
/// - Chainlink USD feeds: 8 decimals
///
/// # Examples
///
/// ```
/// use feedscan::TokenDecimals;
///
/// let eth_decimals = TokenDecimals::STANDARD;
/// assert_eq!(eth_decimals.as_u8(), 18);
///
/// let usdc_decimals = TokenDecimals::USDC;
/// assert_eq!(usdc_decimals.as_u8(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Maximum reasonable decimals (following ERC-20 convention)
    pub const MAX_REASONABLE: u8 = 18;

    /// Standard decimals for ETH-like tokens (18)
    pub const STANDARD: Self = Self(18);

    /// USDC decimals (6)
    pub const USDC: Self = Self(6);

    /// Decimals reported by Chainlink USD-denominated feeds (8)
    pub const FEED: Self = Self(8);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Decimal scale for building a fixed-point value
    pub const fn scale(&self) -> i64 {
        self.0 as i64
    }

    /// Check if decimals are in reasonable range (0-18)
    ///
    /// While the ERC-20 standard allows any u8 value, most tokens
    /// use 18 or fewer decimals. Values over 18 are unusual and
    /// may indicate data errors.
    pub const fn is_reasonable(&self) -> bool {
        self.0 <= Self::MAX_REASONABLE
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_decimals_constants() {
        assert_eq!(TokenDecimals::STANDARD.as_u8(), 18);
        assert_eq!(TokenDecimals::USDC.as_u8(), 6);
        assert_eq!(TokenDecimals::FEED.as_u8(), 8);
    }

    #[test]
    fn test_token_decimals_reasonable() {
        assert!(TokenDecimals::new(0).is_reasonable());
        assert!(TokenDecimals::new(18).is_reasonable());
        assert!(!TokenDecimals::new(19).is_reasonable());
        assert!(!TokenDecimals::new(255).is_reasonable());
    }

    #[test]
    fn test_scale() {
        assert_eq!(TokenDecimals::USDC.scale(), 6);
        assert_eq!(TokenDecimals::new(255).scale(), 255);
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(format!("{}", TokenDecimals::STANDARD), "18 decimals");
    }

    #[test]
    fn test_deserializes_from_plain_number() {
        let decimals: TokenDecimals = serde_json::from_str("6").unwrap();
        assert_eq!(decimals, TokenDecimals::USDC);
    }
}
