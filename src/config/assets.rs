// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Static asset configuration

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use super::constants::{feeds, tokens};
use crate::types::tokens::TokenDecimals;

/// Where an asset's balance lives
///
/// Serialized as an optional token address: `null` (or a missing field)
/// means the chain's native currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<Address>", into = "Option<Address>")]
pub enum AssetKind {
    /// The chain's native currency, read with `eth_getBalance`
    #[default]
    Native,
    /// An ERC-20 token, read with `balanceOf` on this contract
    Token(Address),
}

impl AssetKind {
    /// Token contract address, if this is a token asset
    pub fn token_address(&self) -> Option<Address> {
        match self {
            AssetKind::Native => None,
            AssetKind::Token(address) => Some(*address),
        }
    }
}

impl From<Option<Address>> for AssetKind {
    fn from(value: Option<Address>) -> Self {
        value.map_or(AssetKind::Native, AssetKind::Token)
    }
}

impl From<AssetKind> for Option<Address> {
    fn from(value: AssetKind) -> Self {
        value.token_address()
    }
}

/// One tracked asset: how to read its balance and which feed prices it
///
/// `decimals` is trusted to match the token's on-chain `decimals()`; it is
/// not verified at runtime.
///
/// # Example
///
/// ```rust
/// use feedscan::config::{AssetConfig, AssetKind};
///
/// let json = r#"{
///     "symbol": "USDC",
///     "token_address": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
///     "feed_address": "0x8fFfFfd4AfB6115b954Bd326cbe7b4Ba576818f6",
///     "decimals": 6
/// }"#;
/// let asset: AssetConfig = serde_json::from_str(json).unwrap();
/// assert!(matches!(asset.kind, AssetKind::Token(_)));
/// assert_eq!(asset.decimals.as_u8(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Display symbol
    pub symbol: String,
    /// Native currency or token contract
    #[serde(rename = "token_address", default)]
    pub kind: AssetKind,
    /// Chainlink-style USD feed for this asset
    #[serde(rename = "feed_address")]
    pub feed: Address,
    /// Token decimal places
    pub decimals: TokenDecimals,
}

impl AssetConfig {
    /// Native-currency asset
    pub fn native(symbol: impl Into<String>, feed: Address, decimals: TokenDecimals) -> Self {
        Self {
            symbol: symbol.into(),
            kind: AssetKind::Native,
            feed,
            decimals,
        }
    }

    /// ERC-20 token asset
    pub fn token(
        symbol: impl Into<String>,
        token: Address,
        feed: Address,
        decimals: TokenDecimals,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            kind: AssetKind::Token(token),
            feed,
            decimals,
        }
    }
}

/// The built-in Ethereum mainnet asset table
///
/// ETH and WETH share the ETH/USD feed.
pub fn mainnet_assets() -> Vec<AssetConfig> {
    vec![
        AssetConfig::native("ETH", feeds::ETH_USD, TokenDecimals::STANDARD),
        AssetConfig::token(
            "WETH",
            tokens::WETH,
            feeds::ETH_USD,
            TokenDecimals::STANDARD,
        ),
        AssetConfig::token("USDC", tokens::USDC, feeds::USDC_USD, TokenDecimals::USDC),
        AssetConfig::token("DAI", tokens::DAI, feeds::DAI_USD, TokenDecimals::STANDARD),
        AssetConfig::token(
            "LINK",
            tokens::LINK,
            feeds::LINK_USD,
            TokenDecimals::STANDARD,
        ),
    ]
}
