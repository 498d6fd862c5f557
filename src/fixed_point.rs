// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact fixed-point conversion between on-chain integers and decimals
//!
//! On-chain quantities are integers in the smallest unit of an asset (wei for
//! ETH, 10^-6 USDC, 10^-8 USD for most Chainlink feeds). This module turns them
//! into [`BigDecimal`] values by attaching a scale to the integer mantissa, so
//! `raw / 10^decimals` is represented exactly and never passes through binary
//! floating point.
//!
//! # Example
//!
//! ```
//! use alloy_primitives::U256;
//! use feedscan::fixed_point::{decode_unsigned, format_fixed};
//! use feedscan::TokenDecimals;
//!
//! let wei = U256::from(2_500_000_000_000_000_000u128);
//! let eth = decode_unsigned(wei, TokenDecimals::STANDARD);
//! assert_eq!(format_fixed(&eth, 6), "2.500000");
//! ```

use alloy_primitives::{I256, U256};
use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::{BigDecimal, RoundingMode};

use crate::types::tokens::TokenDecimals;

/// Convert an unsigned raw integer to `raw / 10^decimals`.
pub fn decode_unsigned(raw: U256, decimals: TokenDecimals) -> BigDecimal {
    let mantissa = BigInt::from_bytes_be(Sign::Plus, &raw.to_be_bytes::<32>());
    BigDecimal::new(mantissa, decimals.scale())
}

/// Convert a signed raw integer to `raw / 10^decimals`.
///
/// Chainlink feeds report `answer` as `int256`; negative answers produce
/// negative decimals.
pub fn decode_signed(raw: I256, decimals: TokenDecimals) -> BigDecimal {
    let (sign, magnitude) = raw.into_sign_and_abs();
    let sign = if sign.is_negative() {
        Sign::Minus
    } else {
        Sign::Plus
    };
    let mantissa = BigInt::from_bytes_be(sign, &magnitude.to_be_bytes::<32>());
    BigDecimal::new(mantissa, decimals.scale())
}

/// Render a decimal in positional notation with exactly `digits` fractional digits.
///
/// Rounds half-to-even and keeps trailing zeros, so `2.5` at 6 digits renders
/// as `2.500000`. Very large or very small magnitudes are never switched to
/// scientific notation.
pub fn format_fixed(value: &BigDecimal, digits: u32) -> String {
    let rounded = value.with_scale_round(i64::from(digits), RoundingMode::HalfEven);
    let (mantissa, _) = rounded.into_bigint_and_exponent();

    let negative = mantissa.sign() == Sign::Minus;
    let magnitude = mantissa.magnitude().to_string();

    let digits = digits as usize;
    let padded = format!("{magnitude:0>width$}", width = digits + 1);
    let (whole, fractional) = padded.split_at(padded.len() - digits);

    let sign = if negative { "-" } else { "" };
    if digits == 0 {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{fractional}")
    }
}
