// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! USD value type for financial calculations

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::AddAssign;

use crate::fixed_point::format_fixed;

/// Represents a USD-denominated value
///
/// This type provides type safety for financial calculations involving USD values,
/// preventing confusion with other decimals like prices or token amounts.
/// Values are exact; [`Display`](std::fmt::Display) rounds to cents.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use feedscan::UsdValue;
/// use std::str::FromStr;
///
/// let value = UsdValue::new(BigDecimal::from_str("1800.505").unwrap());
/// assert_eq!(value.to_string(), "$1800.50");
/// assert_eq!(value.format(3), "$1800.505");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsdValue(BigDecimal);

impl UsdValue {
    /// Fractional digits used when a USD value is displayed in a report
    pub const DISPLAY_DIGITS: u32 = 2;

    /// Create a new USD value
    pub fn new(value: BigDecimal) -> Self {
        Self(value)
    }

    /// Zero USD value
    pub fn zero() -> Self {
        Self(BigDecimal::from(0))
    }

    /// Get the inner decimal value
    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Check if the value is exactly zero
    pub fn is_zero(&self) -> bool {
        self.0 == BigDecimal::from(0)
    }

    /// Render the amount without the dollar sign
    pub fn to_fixed(&self, precision: u32) -> String {
        format_fixed(&self.0, precision)
    }

    /// Format as USD string with specified precision
    pub fn format(&self, precision: u32) -> String {
        format!("${}", self.to_fixed(precision))
    }
}

impl Default for UsdValue {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigDecimal> for UsdValue {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl AddAssign<&UsdValue> for UsdValue {
    fn add_assign(&mut self, rhs: &UsdValue) {
        self.0 += &rhs.0;
    }
}

impl<'a> Sum<&'a UsdValue> for UsdValue {
    fn sum<I: Iterator<Item = &'a UsdValue>>(iter: I) -> Self {
        iter.fold(Self::zero(), |mut acc, value| {
            acc += value;
            acc
        })
    }
}

impl std::fmt::Display for UsdValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.format(Self::DISPLAY_DIGITS))
    }
}
