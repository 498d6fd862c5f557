// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for fixed-point decoding
//!
//! These tests use proptest to check that converting on-chain integers to
//! decimals is exact for any raw value and precision.

use alloy_primitives::U256;
use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;
use feedscan::fixed_point::{decode_unsigned, format_fixed};
use feedscan::TokenDecimals;
use proptest::prelude::*;

// Helper to generate arbitrary U256 values across the full width
fn arb_u256() -> impl Strategy<Value = U256> {
    any::<[u8; 32]>().prop_map(U256::from_be_bytes)
}

fn pow10(exp: u8) -> BigDecimal {
    BigDecimal::from(BigInt::from(10u8).pow(u32::from(exp)))
}

fn to_bigdecimal(raw: U256) -> BigDecimal {
    raw.to_string().parse().unwrap()
}

proptest! {
    /// Property: decode(R, D) * 10^D == R exactly
    #[test]
    fn prop_decode_is_exact(raw in arb_u256(), decimals in 0u8..=30) {
        let value = decode_unsigned(raw, TokenDecimals::new(decimals));
        prop_assert_eq!(value * pow10(decimals), to_bigdecimal(raw));
    }

    /// Property: zero decodes to zero at every precision
    #[test]
    fn prop_zero_decodes_to_zero(decimals in 0u8..=30) {
        let value = decode_unsigned(U256::ZERO, TokenDecimals::new(decimals));
        prop_assert_eq!(value, BigDecimal::from(0));
    }

    /// Property: decoding is deterministic
    #[test]
    fn prop_decode_is_deterministic(raw in arb_u256(), decimals in 0u8..=30) {
        let decimals = TokenDecimals::new(decimals);
        prop_assert_eq!(decode_unsigned(raw, decimals), decode_unsigned(raw, decimals));
    }

    /// Property: formatted output has exactly the requested fractional digits
    #[test]
    fn prop_format_has_requested_digits(raw in any::<u128>(), decimals in 0u8..=30, digits in 1u32..=12) {
        let value = decode_unsigned(U256::from(raw), TokenDecimals::new(decimals));
        let rendered = format_fixed(&value, digits);

        let (whole, fractional) = rendered.split_once('.').unwrap();
        prop_assert_eq!(fractional.len(), digits as usize);
        prop_assert!(!whole.is_empty());
        prop_assert!(rendered.chars().all(|c| c.is_ascii_digit() || c == '.'));
    }

    /// Property: integers format with a zero fraction at any precision
    #[test]
    fn prop_integers_format_without_rounding(raw in any::<u64>(), digits in 0u32..=8) {
        let rendered = format_fixed(&BigDecimal::from(raw), digits);
        let expected = if digits == 0 {
            raw.to_string()
        } else {
            format!("{raw}.{}", "0".repeat(digits as usize))
        };
        prop_assert_eq!(rendered, expected);
    }
}
