// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for balance resolution.

use alloy_primitives::Address;

use super::{CodecError, RpcError};

/// Errors that can occur while resolving the balance of one asset.
#[derive(Debug, thiserror::Error)]
pub enum BalanceResolutionError {
    /// The node call for the balance failed.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// The token contract returned a malformed `balanceOf` response.
    #[error("Token {token} returned an invalid balance: {source}")]
    Decode {
        /// Token contract that was queried
        token: Address,
        /// The decode failure
        #[source]
        source: CodecError,
    },
}

impl BalanceResolutionError {
    /// Create a `Decode` error for a specific token.
    pub fn decode(token: Address, source: CodecError) -> Self {
        BalanceResolutionError::Decode { token, source }
    }
}
