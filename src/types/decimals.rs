//! Token decimal precision type

use serde::{Deserialize, Serialize};

/// ERC-20 token decimal precision
///
/// The number of rightmost digits of a raw amount that form the fractional
/// part. The ERC-20 `decimals()` method returns a `uint8`, so the full
/// 0-255 range is representable.
///
/// # Examples
///
/// ```
/// use tokenbalance::TokenDecimals;
///
/// assert_eq!(TokenDecimals::NATIVE.as_u8(), 18);
/// assert_eq!(TokenDecimals::UNKNOWN.as_u8(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Native currency precision (wei per ETH is 10^18)
    pub const NATIVE: Self = Self(18);

    /// Precision used when the token's `decimals()` call failed.
    ///
    /// The raw amount is then displayed as if it were already integral.
    pub const UNKNOWN: Self = Self(0);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }
}

impl Default for TokenDecimals {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<TokenDecimals> for u8 {
    fn from(value: TokenDecimals) -> Self {
        value.0
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}
