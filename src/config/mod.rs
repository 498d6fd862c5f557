// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for feedscan runs
//!
//! A run needs two things: an RPC endpoint and a list of assets to value.
//!
//! - The endpoint comes from the `ETH_RPC_URL` environment variable (a `.env`
//!   file in the working directory is honoured).
//! - The asset list defaults to [`mainnet_assets`] and can be replaced by a
//!   JSON file holding an array of [`AssetConfig`].
//!
//! # Example
//!
//! ```rust,no_run
//! use feedscan::config::FeedscanConfig;
//!
//! # fn example() -> Result<(), feedscan::ConfigError> {
//! let config = FeedscanConfig::from_env(None)?;
//! println!("Valuing {} assets via {}", config.assets.len(), config.provider.url);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use tracing::{debug, warn};

use crate::errors::ConfigError;
use crate::provider::ProviderConfig;

mod assets;
pub mod constants;

pub use assets::{mainnet_assets, AssetConfig, AssetKind};

/// Environment variable holding the node's RPC URL
pub const RPC_URL_ENV_VAR: &str = "ETH_RPC_URL";

/// Everything a portfolio run is configured with
#[derive(Debug, Clone)]
pub struct FeedscanConfig {
    /// Node endpoint
    pub provider: ProviderConfig,
    /// Assets to value, in report order
    pub assets: Vec<AssetConfig>,
}

impl FeedscanConfig {
    /// Create a config for an explicit endpoint using the built-in asset table
    pub fn new(provider: ProviderConfig) -> Self {
        Self {
            provider,
            assets: mainnet_assets(),
        }
    }

    /// Replace the asset list
    #[must_use]
    pub fn with_assets(mut self, assets: Vec<AssetConfig>) -> Self {
        self.assets = assets;
        self
    }

    /// Build the config from the environment and an optional asset file
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingEnvVar`] if `ETH_RPC_URL` is unset or empty
    /// - [`ConfigError::AssetFileRead`] / [`ConfigError::AssetFileParse`] if
    ///   the asset file cannot be loaded
    pub fn from_env(assets_path: Option<&Path>) -> Result<Self, ConfigError> {
        let url = rpc_url(dotenvy::var(RPC_URL_ENV_VAR).ok())?;
        let config = Self::new(ProviderConfig::new(url));

        match assets_path {
            Some(path) => Ok(config.with_assets(load_assets(path)?)),
            None => Ok(config),
        }
    }
}

/// Validate a raw RPC URL setting
///
/// Surrounding whitespace is trimmed; an empty value counts as missing.
pub fn rpc_url(value: Option<String>) -> Result<String, ConfigError> {
    match value.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => Ok(url.to_string()),
        _ => Err(ConfigError::MissingEnvVar(RPC_URL_ENV_VAR)),
    }
}

/// Load an asset list from a JSON file
pub fn load_assets(path: &Path) -> Result<Vec<AssetConfig>, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::AssetFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let assets = parse_assets(&contents).map_err(|source| ConfigError::AssetFileParse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), count = assets.len(), "Loaded asset file");
    Ok(assets)
}

/// Parse an asset list from JSON
///
/// Assets whose decimals exceed the ERC-20 convention are accepted but
/// logged, since they usually indicate a configuration mistake.
pub fn parse_assets(json: &str) -> Result<Vec<AssetConfig>, serde_json::Error> {
    let assets: Vec<AssetConfig> = serde_json::from_str(json)?;

    for asset in assets.iter().filter(|a| !a.decimals.is_reasonable()) {
        warn!(
            symbol = %asset.symbol,
            decimals = asset.decimals.as_u8(),
            "Asset decimals exceed {}; check the asset file",
            crate::TokenDecimals::MAX_REASONABLE
        );
    }

    Ok(assets)
}
