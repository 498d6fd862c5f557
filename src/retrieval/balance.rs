// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Balance lookups for native currency and ERC-20 tokens

use alloy_primitives::Address;
use tracing::{debug, Instrument};

use crate::codec::{balance_of_call, decode_balance_of};
use crate::config::AssetKind;
use crate::errors::BalanceResolutionError;
use crate::provider::ChainReader;
use crate::spans;
use crate::types::tokens::TokenAmount;

/// Fetch the raw balance `owner` holds of an asset at the latest block.
///
/// - [`AssetKind::Native`]: `eth_getBalance(owner)`
/// - [`AssetKind::Token`]: `eth_call` of `balanceOf(owner)` on the token
///
/// A zero balance is returned as-is; deciding whether to skip it is up to
/// the caller.
///
/// # Errors
///
/// - [`BalanceResolutionError::Rpc`] if the node call fails
/// - [`BalanceResolutionError::Decode`] if the token returns a malformed response
pub async fn resolve_balance<R>(
    reader: &R,
    kind: AssetKind,
    owner: Address,
) -> Result<TokenAmount, BalanceResolutionError>
where
    R: ChainReader + ?Sized,
{
    async move {
        let balance = match kind {
            AssetKind::Native => TokenAmount::new(reader.native_balance(owner).await?),
            AssetKind::Token(token) => {
                let data = reader.call(token, balance_of_call(owner)).await?;
                decode_balance_of(&data).map_err(|e| BalanceResolutionError::decode(token, e))?
            }
        };

        debug!(%balance, "Resolved raw balance");
        Ok::<_, BalanceResolutionError>(balance)
    }
    .instrument(spans::resolve_balance(kind, owner))
    .await
}
