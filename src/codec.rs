// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Call payloads and response decoding for the contract reads feedscan makes
//!
//! Only four call shapes are ever needed, so they are declared once at compile
//! time with `sol!` instead of being parsed from ABI JSON at runtime:
//!
//! | Contract | Function | Returns |
//! |----------|----------|---------|
//! | ERC-20 token | `balanceOf(address)` | `uint256` |
//! | ERC-20 token | `decimals()` | `uint8` |
//! | Chainlink feed | `decimals()` | `uint8` |
//! | Chainlink feed | `latestRoundData()` | `(uint80, int256, uint256, uint256, uint80)` |
//!
//! Both `decimals()` functions share selector `0x313ce567`, so a single
//! builder and decoder serve tokens and feeds.
//!
//! # Example
//!
//! ```rust
//! use alloy_primitives::{address, U256};
//! use feedscan::codec::{balance_of_call, decode_balance_of};
//!
//! let payload = balance_of_call(address!("d8da6bf26964af9d7eed9e03e53415d37aa96045"));
//! assert_eq!(&payload[..4], &[0x70, 0xa0, 0x82, 0x31]);
//!
//! let response = U256::from(42u64).to_be_bytes::<32>();
//! assert_eq!(decode_balance_of(&response).unwrap().as_u256(), U256::from(42u64));
//! ```

use alloy_primitives::{aliases::U80, Address, Bytes, I256, U256};
use alloy_sol_types::{sol, SolCall};
use serde::{Deserialize, Serialize};

use crate::errors::CodecError;
use crate::types::tokens::{TokenAmount, TokenDecimals};

sol! {
    /// Read-only subset of the ERC-20 interface
    interface IERC20Balance {
        function balanceOf(address owner) external view returns (uint256);
        function decimals() external view returns (uint8);
    }

    /// Read-only subset of Chainlink's `AggregatorV3Interface`
    interface AggregatorV3Interface {
        function decimals() external view returns (uint8);
        function latestRoundData()
            external
            view
            returns (
                uint80 roundId,
                int256 answer,
                uint256 startedAt,
                uint256 updatedAt,
                uint80 answeredInRound
            );
    }
}

/// Latest observation published by a price feed
///
/// Only `answer` feeds the valuation; the bookkeeping fields are decoded so
/// callers can inspect staleness (`updated_at`) or round completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundData {
    /// Aggregator round identifier
    pub round_id: U80,
    /// Price in feed units (divide by `10^decimals`)
    pub answer: I256,
    /// Timestamp the round started
    pub started_at: U256,
    /// Timestamp the answer was last updated
    pub updated_at: U256,
    /// Round in which the answer was computed
    pub answered_in_round: U80,
}

impl From<AggregatorV3Interface::latestRoundDataReturn> for RoundData {
    fn from(ret: AggregatorV3Interface::latestRoundDataReturn) -> Self {
        Self {
            round_id: ret.roundId,
            answer: ret.answer,
            started_at: ret.startedAt,
            updated_at: ret.updatedAt,
            answered_in_round: ret.answeredInRound,
        }
    }
}

/// Payload for `balanceOf(owner)` on an ERC-20 token
pub fn balance_of_call(owner: Address) -> Bytes {
    IERC20Balance::balanceOfCall { owner }.abi_encode().into()
}

/// Decode a `balanceOf` response: a single ABI-encoded `uint256`
pub fn decode_balance_of(data: &[u8]) -> Result<TokenAmount, CodecError> {
    IERC20Balance::balanceOfCall::abi_decode_returns(data)
        .map(TokenAmount::new)
        .map_err(|e| CodecError::new(IERC20Balance::balanceOfCall::SIGNATURE, data, e))
}

/// Payload for `decimals()` on a token or feed
pub fn decimals_call() -> Bytes {
    AggregatorV3Interface::decimalsCall {}.abi_encode().into()
}

/// Decode a `decimals()` response: a single ABI-encoded `uint8`
pub fn decode_decimals(data: &[u8]) -> Result<TokenDecimals, CodecError> {
    AggregatorV3Interface::decimalsCall::abi_decode_returns(data)
        .map(TokenDecimals::new)
        .map_err(|e| CodecError::new(AggregatorV3Interface::decimalsCall::SIGNATURE, data, e))
}

/// Payload for `latestRoundData()` on a feed
pub fn latest_round_data_call() -> Bytes {
    AggregatorV3Interface::latestRoundDataCall {}
        .abi_encode()
        .into()
}

/// Decode a `latestRoundData()` response into all five round fields
pub fn decode_latest_round_data(data: &[u8]) -> Result<RoundData, CodecError> {
    AggregatorV3Interface::latestRoundDataCall::abi_decode_returns(data)
        .map(RoundData::from)
        .map_err(|e| {
            CodecError::new(
                AggregatorV3Interface::latestRoundDataCall::SIGNATURE,
                data,
                e,
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    fn word(value: U256) -> [u8; 32] {
        value.to_be_bytes::<32>()
    }

    fn round_response(round: u128, answer: I256, started: u64, updated: u64) -> Vec<u8> {
        let mut data = Vec::with_capacity(160);
        data.extend_from_slice(&word(U256::from(round)));
        data.extend_from_slice(&word(answer.into_raw()));
        data.extend_from_slice(&word(U256::from(started)));
        data.extend_from_slice(&word(U256::from(updated)));
        data.extend_from_slice(&word(U256::from(round)));
        data
    }

    #[test]
    fn balance_of_payload_is_selector_plus_padded_owner() {
        let owner = address!("d8da6bf26964af9d7eed9e03e53415d37aa96045");
        let payload = balance_of_call(owner);

        assert_eq!(payload.len(), 36);
        assert_eq!(&payload[..4], IERC20Balance::balanceOfCall::SELECTOR.as_slice());
        assert_eq!(&payload[..4], &[0x70, 0xa0, 0x82, 0x31]);
        assert_eq!(&payload[4..16], &[0u8; 12]);
        assert_eq!(&payload[16..], owner.as_slice());
    }

    #[test]
    fn decode_balance_of_returns_exact_integer() {
        let raw = U256::from_str_radix("123456789012345678901234567890", 10).unwrap();
        let amount = decode_balance_of(&word(raw)).unwrap();
        assert_eq!(amount.as_u256(), raw);
    }

    #[test]
    fn decode_balance_of_rejects_short_response() {
        let err = decode_balance_of(&[0u8; 31]).unwrap_err();
        assert_eq!(err.call, "balanceOf(address)");
        assert_eq!(err.len, 31);
    }

    #[test]
    fn decode_balance_of_rejects_empty_response() {
        // Calling an EOA returns empty data
        assert!(decode_balance_of(&[]).is_err());
    }

    #[test]
    fn decimals_payload_is_bare_selector() {
        assert_eq!(&decimals_call()[..], &[0x31, 0x3c, 0xe5, 0x67]);
        assert_eq!(
            AggregatorV3Interface::decimalsCall::SELECTOR,
            IERC20Balance::decimalsCall::SELECTOR
        );
    }

    #[test]
    fn decode_decimals_reads_uint8() {
        let decimals = decode_decimals(&word(U256::from(8u8))).unwrap();
        assert_eq!(decimals, TokenDecimals::FEED);
    }

    #[test]
    fn decode_decimals_rejects_empty_response() {
        assert!(decode_decimals(&[]).is_err());
    }

    #[test]
    fn latest_round_data_payload_is_bare_selector() {
        assert_eq!(&latest_round_data_call()[..], &[0xfe, 0xaf, 0x96, 0x8c]);
    }

    #[test]
    fn decode_latest_round_data_reads_all_fields() {
        let answer = I256::try_from(300_000_000_000i64).unwrap();
        let data = round_response(110_680_464_442_257_320_247, answer, 1_700_000_000, 1_700_000_012);

        let round = decode_latest_round_data(&data).unwrap();
        assert_eq!(round.answer, answer);
        assert_eq!(round.round_id, U80::from(110_680_464_442_257_320_247u128));
        assert_eq!(round.answered_in_round, round.round_id);
        assert_eq!(round.started_at, U256::from(1_700_000_000u64));
        assert_eq!(round.updated_at, U256::from(1_700_000_012u64));
    }

    #[test]
    fn decode_latest_round_data_keeps_negative_answer() {
        let answer = I256::try_from(-5i64).unwrap();
        let round = decode_latest_round_data(&round_response(1, answer, 0, 0)).unwrap();
        assert!(round.answer.is_negative());
        assert_eq!(round.answer, answer);
    }

    #[test]
    fn decode_latest_round_data_rejects_truncated_response() {
        let data = round_response(1, I256::ONE, 0, 0);
        let err = decode_latest_round_data(&data[..96]).unwrap_err();
        assert_eq!(err.call, "latestRoundData()");
    }
}
