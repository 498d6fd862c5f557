// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for token-related values
//!
//! This module provides newtype wrappers for token operations
//! to add type safety and prevent mixing incompatible units.
//!
//! # Type Relationships
//!
//! ```text
//! TokenAmount (U256, raw)
//!     |
//!     | normalize(TokenDecimals)
//!     ↓
//! NormalizedAmount (BigDecimal, human-readable)
//!     |
//!     | × TokenPrice (BigDecimal, from feed answer + feed decimals)
//!     ↓
//! UsdValue (BigDecimal, USD-denominated)
//! ```

mod amount;
mod decimals;
mod normalized;
mod price;
mod usd;

pub use amount::TokenAmount;
pub use decimals::TokenDecimals;
pub use normalized::NormalizedAmount;
pub use price::TokenPrice;
pub use usd::UsdValue;
