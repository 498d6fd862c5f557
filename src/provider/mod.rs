// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider utilities
//!
//! This module provides:
//! - [`create_http_provider`] - Create a read-only HTTP provider from a [`ProviderConfig`]
//! - [`ChainReader`] - The two node operations resolvers depend on
//! - [`ProviderReader`] - `ChainReader` implementation over any alloy `Provider`
//!
//! # Example
//!
//! ```rust,ignore
//! use feedscan::provider::{create_http_provider, ProviderConfig, ProviderReader};
//!
//! let provider = create_http_provider(&ProviderConfig::new("https://eth.llamarpc.com"))?;
//! let reader = ProviderReader::new(provider);
//! let wei = reader.native_balance(wallet).await?;
//! ```

mod config;
mod factory;
mod reader;

pub use config::ProviderConfig;
pub use factory::create_http_provider;
pub use reader::{ChainReader, ProviderReader};

use alloy_network::Ethereum;

/// Type alias for an HTTP provider using Ethereum network
pub type EthereumHttpProvider = alloy_provider::RootProvider<Ethereum>;
