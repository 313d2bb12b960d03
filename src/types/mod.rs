// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for balance queries.
//!
//! This module provides newtype wrappers so raw amounts, precisions and
//! addresses cannot be mixed up:
//! - [`TokenAmount`] - raw integer amount in the smallest unit
//! - [`TokenDecimals`] - number of fractional digits
//! - [`HexAddress`] - parsed address that keeps its input text
//! - [`BalanceRecord`] - assembled query result

mod address;
mod amount;
mod decimals;
mod record;

pub use address::HexAddress;
pub use amount::TokenAmount;
pub use decimals::TokenDecimals;
pub use record::BalanceRecord;
