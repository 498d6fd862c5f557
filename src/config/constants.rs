// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known addresses and constants
//!
//! This module centralizes the Ethereum mainnet token and Chainlink feed
//! addresses used by the built-in asset table.

use alloy_primitives::{address, Address};

/// Well-known ERC-20 token addresses on Ethereum mainnet
pub mod tokens {
    use super::*;

    /// Wrapped Ether
    ///
    /// Contract: 0xC02aaA39b223FE8D0A0E5C4F27eAD9083C756Cc2
    pub const WETH: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");

    /// Native USDC on Ethereum Mainnet
    ///
    /// Contract: 0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48
    pub const USDC: Address = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");

    /// Dai Stablecoin
    ///
    /// Contract: 0x6B175474E89094C44Da98b954EedeAC495271d0F
    pub const DAI: Address = address!("6b175474e89094c44da98b954eedeac495271d0f");

    /// Chainlink Token
    ///
    /// Contract: 0x514910771AF9Ca656af840dff83E8264EcF986CA
    pub const LINK: Address = address!("514910771af9ca656af840dff83e8264ecf986ca");
}

/// Chainlink USD price feeds on Ethereum mainnet
pub mod feeds {
    use super::*;

    /// ETH / USD (also prices WETH)
    pub const ETH_USD: Address = address!("5f4ec3df9cbd43714fe2740f5e3616155c5b8419");

    /// USDC / USD
    pub const USDC_USD: Address = address!("8fffffd4afb6115b954bd326cbe7b4ba576818f6");

    /// DAI / USD
    pub const DAI_USD: Address = address!("aed0c38402a5d19df6e4c03f4e2dced6e29c1ee9");

    /// LINK / USD
    pub const LINK_USD: Address = address!("2c1d072e956affc0d435cb7ac38ef18d24d9127c");
}
