// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for contract call response decoding.

/// A contract returned bytes that do not match the expected return shape.
///
/// This indicates a mismatch between the call definition and the contract at
/// the target address (wrong address, non-standard token, proxy not yet
/// initialized), not a transient condition.
#[derive(Debug, thiserror::Error)]
#[error("Failed to decode {call} response ({len} bytes): {source}")]
pub struct CodecError {
    /// Solidity signature of the call whose response failed to decode
    pub call: &'static str,
    /// Length of the undecodable response
    pub len: usize,
    /// The underlying ABI error
    #[source]
    pub source: alloy_sol_types::Error,
}

impl CodecError {
    /// Create a `CodecError` for a named call.
    pub fn new(call: &'static str, data: &[u8], source: alloy_sol_types::Error) -> Self {
        CodecError {
            call,
            len: data.len(),
            source,
        }
    }
}
