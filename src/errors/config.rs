// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for configuration loading.

use std::path::PathBuf;

/// Errors that prevent a run from starting.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty
    #[error("Missing environment variable {0}: please set it to your node's RPC URL")]
    MissingEnvVar(&'static str),

    /// Invalid RPC URL format
    #[error("Invalid URL {0}: {1}")]
    InvalidUrl(String, #[source] url::ParseError),

    /// The RPC URL uses a transport other than HTTP(S)
    #[error("Unsupported RPC URL scheme '{scheme}' in {url}: use an http:// or https:// endpoint")]
    UnsupportedScheme {
        /// The configured URL
        url: String,
        /// The rejected scheme
        scheme: String,
    },

    /// The asset file could not be read
    #[error("Failed to read asset file {}: {source}", .path.display())]
    AssetFileRead {
        /// Path that was read
        path: PathBuf,
        /// The I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The asset file is not a valid asset list
    #[error("Failed to parse asset file {}: {source}", .path.display())]
    AssetFileParse {
        /// Path that was parsed
        path: PathBuf,
        /// The JSON failure
        #[source]
        source: serde_json::Error,
    },
}
