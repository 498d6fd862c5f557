// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider factory functions

use alloy_provider::ProviderBuilder;
use alloy_rpc_client::ClientBuilder;

use crate::errors::ConfigError;

use super::config::ProviderConfig;
use super::EthereumHttpProvider;

/// Create a read-only HTTP provider for Ethereum mainnet
///
/// No connection is opened here; the first request dials the endpoint.
///
/// # Examples
///
/// ```rust,no_run
/// use feedscan::provider::{create_http_provider, ProviderConfig};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = create_http_provider(&ProviderConfig::new("https://eth.llamarpc.com"))?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`ConfigError::InvalidUrl`] if the URL cannot be parsed
/// - [`ConfigError::UnsupportedScheme`] if the URL is not `http` or `https`
pub fn create_http_provider(config: &ProviderConfig) -> Result<EthereumHttpProvider, ConfigError> {
    let url: url::Url = config
        .url
        .parse()
        .map_err(|e| ConfigError::InvalidUrl(config.url.clone(), e))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            url: config.url.clone(),
            scheme: url.scheme().to_string(),
        });
    }

    // No fillers: the builder yields a bare RootProvider
    let client = ClientBuilder::default().http(url);
    Ok(ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_client(client))
}
