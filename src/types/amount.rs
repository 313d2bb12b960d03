// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw token amount type

use alloy_primitives::U256;

use super::decimals::TokenDecimals;
use crate::format::format_units;

/// Raw token amount (not normalized for decimals)
///
/// This represents the amount as stored on-chain in the smallest unit
/// (wei for ETH). To render a human-readable amount use
/// [`format`](Self::format) with the token's [`TokenDecimals`].
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use tokenbalance::{TokenAmount, TokenDecimals};
///
/// let amount = TokenAmount::new(U256::from(1_500_000_000_000_000_000u64));
/// assert_eq!(amount.format(TokenDecimals::NATIVE), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Zero token amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new token amount from U256
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Render as an exact decimal string scaled by `decimals`.
    ///
    /// See [`format_units`] for the display convention.
    pub fn format(&self, decimals: TokenDecimals) -> String {
        format_units(self.0, decimals.as_u8())
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
