// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Address type that remembers the text it was parsed from

use std::str::FromStr;

use alloy_primitives::Address;

use crate::errors::AddressParseError;

/// A 20-byte address together with its original hexadecimal text.
///
/// Balance records echo the wallet exactly as the caller supplied it, so the
/// textual form is kept alongside the parsed bytes instead of being
/// re-rendered with an EIP-55 checksum.
///
/// # Examples
///
/// ```
/// use tokenbalance::HexAddress;
///
/// let wallet: HexAddress = "0x17a813df7322f8aac5cac75eb62c0d13b8aea29d".parse().unwrap();
/// assert_eq!(wallet.as_str(), "0x17a813df7322f8aac5cac75eb62c0d13b8aea29d");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexAddress {
    address: Address,
    raw: String,
}

impl HexAddress {
    /// The parsed address
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The text the address was parsed from
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for HexAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| AddressParseError::missing_prefix(s))?;

        if hex.len() != 40 {
            return Err(AddressParseError::invalid_length(s, hex.len()));
        }

        let address =
            Address::from_str(hex).map_err(|e| AddressParseError::invalid_hex(s, e.to_string()))?;

        Ok(Self {
            address,
            raw: s.to_string(),
        })
    }
}

impl From<Address> for HexAddress {
    fn from(address: Address) -> Self {
        Self {
            address,
            raw: address.to_string(),
        }
    }
}

impl std::fmt::Display for HexAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn keeps_lowercase_text_verbatim() {
        let raw = "0x42d4722b804585cdf6406fa7739e794b0aa8b1ff";
        let parsed: HexAddress = raw.parse().unwrap();
        assert_eq!(parsed.as_str(), raw);
        assert_eq!(
            parsed.address(),
            address!("42d4722b804585cdf6406fa7739e794b0aa8b1ff")
        );
    }

    #[test]
    fn keeps_mixed_case_text_verbatim() {
        let raw = "0xd26114cd6EE289AccF82350c8d8487fedB8A0C07";
        let parsed: HexAddress = raw.parse().unwrap();
        assert_eq!(parsed.to_string(), raw);
    }

    #[test]
    fn rejects_missing_prefix() {
        let err = "42d4722b804585cdf6406fa7739e794b0aa8b1ff"
            .parse::<HexAddress>()
            .unwrap_err();
        assert!(matches!(err, AddressParseError::MissingPrefix { .. }));
    }

    #[test]
    fn rejects_wrong_length() {
        let err = "0x1234".parse::<HexAddress>().unwrap_err();
        assert!(matches!(
            err,
            AddressParseError::InvalidLength { digits: 4, .. }
        ));
    }

    #[test]
    fn rejects_non_hex_digits() {
        let err = "0xzzd4722b804585cdf6406fa7739e794b0aa8b1ff"
            .parse::<HexAddress>()
            .unwrap_err();
        assert!(matches!(err, AddressParseError::InvalidHex { .. }));
    }
}
