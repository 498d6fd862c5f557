// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Shared RPC error types for blockchain provider operations.
//!
//! This module provides error types for the two remote operations feedscan
//! performs against a node: native balance lookups and read-only contract calls.

use alloy_primitives::Address;

/// Errors that can occur during blockchain RPC operations.
///
/// This error type captures the failure modes of the node calls made while
/// valuing a portfolio. It includes the address involved to aid in debugging.
///
/// # Examples
///
/// ```rust
/// use alloy_primitives::Address;
/// use feedscan::RpcError;
///
/// let error = RpcError::NativeBalanceFailed {
///     owner: Address::ZERO,
///     source: "connection refused".into(),
/// };
/// println!("Error: {}", error);
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// Failed to fetch the native-currency balance of an address.
    #[error("Failed to fetch native balance of {owner}: {source}")]
    NativeBalanceFailed {
        /// The address whose balance was requested
        owner: Address,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A read-only contract call (`eth_call`) failed.
    ///
    /// This can occur due to network connectivity issues, provider-side
    /// errors, or the call reverting (e.g., the address is not a contract).
    #[error("eth_call to {to} failed: {source}")]
    CallFailed {
        /// The contract that was called
        to: Address,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl RpcError {
    /// Helper to create a `NativeBalanceFailed` error from any error type.
    pub fn native_balance_failed(
        owner: Address,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::NativeBalanceFailed {
            owner,
            source: Box::new(source),
        }
    }

    /// Helper to create a `CallFailed` error from any error type.
    pub fn call_failed(to: Address, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        RpcError::CallFailed {
            to,
            source: Box::new(source),
        }
    }
}
