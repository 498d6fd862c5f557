// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for feedscan integration tests
//!
//! Provides an in-memory [`ChainReader`] so the valuation pipeline can be
//! tested without a node.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use alloy_primitives::{Address, Bytes, I256, U256};
use async_trait::async_trait;
use feedscan::codec::{balance_of_call, decimals_call, latest_round_data_call};
use feedscan::provider::ChainReader;
use feedscan::RpcError;

/// In-memory chain state answering `eth_getBalance` and `eth_call`
///
/// Calls with no registered response fail the way a revert would.
///
/// # Example
///
/// ```rust,ignore
/// let reader = MockChainReader::new()
///     .with_native_balance(wallet, U256::from(2_500_000_000_000_000_000u128))
///     .with_feed(ETH_FEED, 8, 300_000_000_000);
/// ```
#[derive(Default)]
pub struct MockChainReader {
    native: HashMap<Address, U256>,
    responses: HashMap<(Address, Bytes), Bytes>,
    failing: HashSet<Address>,
    failing_native: bool,
    calls: Mutex<Vec<(Address, Bytes)>>,
}

impl MockChainReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the native balance of `owner` in wei
    pub fn with_native_balance(mut self, owner: Address, wei: U256) -> Self {
        self.native.insert(owner, wei);
        self
    }

    /// Make every `eth_getBalance` fail
    pub fn with_failing_native(mut self) -> Self {
        self.failing_native = true;
        self
    }

    /// Answer `balanceOf(owner)` on `token` with `raw`
    pub fn with_token_balance(mut self, token: Address, owner: Address, raw: U256) -> Self {
        self.responses
            .insert((token, balance_of_call(owner)), word(raw).into());
        self
    }

    /// Register a feed publishing `answer` with `decimals` places
    pub fn with_feed(mut self, feed: Address, decimals: u8, answer: i64) -> Self {
        let answer = I256::try_from(answer).expect("answer fits in int256");
        self.responses
            .insert((feed, decimals_call()), word(U256::from(decimals)).into());
        self.responses
            .insert((feed, latest_round_data_call()), round_data(answer).into());
        self
    }

    /// Register a feed whose `latestRoundData()` response is truncated
    pub fn with_malformed_feed(mut self, feed: Address, decimals: u8) -> Self {
        self.responses
            .insert((feed, decimals_call()), word(U256::from(decimals)).into());
        self.responses.insert(
            (feed, latest_round_data_call()),
            word(U256::from(1u64)).into(),
        );
        self
    }

    /// Make every call to `address` fail with a transport error
    pub fn with_failing_contract(mut self, address: Address) -> Self {
        self.failing.insert(address);
        self
    }

    /// Number of `eth_call`s made to `address`
    pub fn calls_to(&self, address: Address) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(to, _)| *to == address)
            .count()
    }

    /// Total number of `eth_call`s made
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChainReader for MockChainReader {
    async fn native_balance(&self, owner: Address) -> Result<U256, RpcError> {
        if self.failing_native {
            return Err(RpcError::native_balance_failed(
                owner,
                std::io::Error::other("connection refused"),
            ));
        }
        Ok(self.native.get(&owner).copied().unwrap_or(U256::ZERO))
    }

    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes, RpcError> {
        self.calls.lock().unwrap().push((to, input.clone()));

        if self.failing.contains(&to) {
            return Err(RpcError::call_failed(
                to,
                std::io::Error::other("connection reset by peer"),
            ));
        }

        self.responses
            .get(&(to, input))
            .cloned()
            .ok_or_else(|| RpcError::call_failed(to, std::io::Error::other("execution reverted")))
    }
}

/// One ABI word holding `value`
pub fn word(value: U256) -> Vec<u8> {
    value.to_be_bytes::<32>().to_vec()
}

/// A `latestRoundData()` response with fixed bookkeeping fields
pub fn round_data(answer: I256) -> Vec<u8> {
    let mut data = Vec::with_capacity(160);
    data.extend(word(U256::from(42u64)));
    data.extend(word(answer.into_raw()));
    data.extend(word(U256::from(1_700_000_000u64)));
    data.extend(word(U256::from(1_700_000_000u64)));
    data.extend(word(U256::from(42u64)));
    data
}
