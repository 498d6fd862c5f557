// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across feedscan.
//!
//! This module provides newtype wrappers for token amounts, decimal
//! precision, prices and USD values.

pub mod tokens;

// Note: Public types are re-exported from lib.rs, not here
