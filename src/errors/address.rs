//! Error types for parsing hexadecimal addresses.

/// Errors returned when a string is not a `0x`-prefixed 20-byte hex address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressParseError {
    /// The input does not start with `0x`.
    #[error("Address {input:?} must start with 0x")]
    MissingPrefix {
        /// The rejected input
        input: String,
    },

    /// The input does not have 40 hex digits after the prefix.
    #[error("Address {input:?} has {digits} hex digits, expected 40")]
    InvalidLength {
        /// The rejected input
        input: String,
        /// Number of digits after the prefix
        digits: usize,
    },

    /// The input contains non-hexadecimal characters.
    #[error("Address {input:?} is not valid hex: {reason}")]
    InvalidHex {
        /// The rejected input
        input: String,
        /// Decoder message
        reason: String,
    },
}

impl AddressParseError {
    pub(crate) fn missing_prefix(input: &str) -> Self {
        AddressParseError::MissingPrefix {
            input: input.to_string(),
        }
    }

    pub(crate) fn invalid_length(input: &str, digits: usize) -> Self {
        AddressParseError::InvalidLength {
            input: input.to_string(),
            digits,
        }
    }

    pub(crate) fn invalid_hex(input: &str, reason: String) -> Self {
        AddressParseError::InvalidHex {
            input: input.to_string(),
            reason,
        }
    }
}
