// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Normalized (human-readable) token amount type

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::fixed_point::format_fixed;

/// Token amount normalized by decimals (human-readable)
///
/// This represents a token amount after dividing by 10^decimals.
/// For example, 1.5 ETH (not 1.5e18 wei), or 100.25 USDC (not 100250000).
/// The value is an exact decimal; no precision is lost in normalization.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedAmount(BigDecimal);

impl NormalizedAmount {
    /// Fractional digits used when an amount is displayed in a report
    pub const DISPLAY_DIGITS: u32 = 6;

    /// Create a new normalized amount
    pub fn new(amount: BigDecimal) -> Self {
        Self(amount)
    }

    /// Zero normalized amount
    pub fn zero() -> Self {
        Self(BigDecimal::from(0))
    }

    /// Get the inner decimal value
    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Check if amount is exactly zero
    pub fn is_zero(&self) -> bool {
        self.0 == BigDecimal::from(0)
    }

    /// Render with a fixed number of fractional digits
    pub fn to_fixed(&self, digits: u32) -> String {
        format_fixed(&self.0, digits)
    }
}

impl From<BigDecimal> for NormalizedAmount {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for NormalizedAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.to_fixed(Self::DISPLAY_DIGITS))
    }
}
