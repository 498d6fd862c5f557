// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The node operations a portfolio valuation needs
//!
//! Resolvers are written against [`ChainReader`] rather than a concrete alloy
//! provider so the valuation pipeline can be exercised with an in-memory
//! reader in tests.

use alloy_network::{Ethereum, TransactionBuilder};
use alloy_primitives::{Address, Bytes, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use async_trait::async_trait;
use tracing::trace;

use crate::errors::RpcError;

/// Read-only access to chain state at the latest block
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Native-currency balance of `owner` (`eth_getBalance`)
    async fn native_balance(&self, owner: Address) -> Result<U256, RpcError>;

    /// Execute a read-only contract call and return the raw result (`eth_call`)
    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes, RpcError>;
}

/// [`ChainReader`] backed by an alloy [`Provider`]
#[derive(Debug, Clone)]
pub struct ProviderReader<P> {
    provider: P,
}

impl<P> ProviderReader<P> {
    /// Wrap a provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The wrapped provider
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P> ChainReader for ProviderReader<P>
where
    P: Provider<Ethereum> + Send + Sync,
{
    async fn native_balance(&self, owner: Address) -> Result<U256, RpcError> {
        trace!(?owner, "eth_getBalance");
        self.provider
            .get_balance(owner)
            .await
            .map_err(|e| RpcError::native_balance_failed(owner, e))
    }

    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes, RpcError> {
        trace!(?to, input = %input, "eth_call");
        let tx = TransactionRequest::default().with_to(to).with_input(input);
        self.provider
            .call(tx)
            .await
            .map_err(|e| RpcError::call_failed(to, e))
    }
}
