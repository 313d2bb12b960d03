// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact decimal formatting of raw on-chain amounts
//!
//! Balances are stored on-chain as integers in the token's smallest unit.
//! [`format_units`] inserts the decimal point `decimals` digits from the right
//! of the integer's decimal expansion. The conversion is done entirely on the
//! digit string, so no value is ever routed through a float.
//!
//! # Example
//!
//! ```
//! use alloy_primitives::U256;
//! use tokenbalance::format_units;
//!
//! let raw = U256::from(1_500_000u64);
//! assert_eq!(format_units(raw, 6), "1.5");
//! assert_eq!(format_units(raw, 0), "1500000.0");
//! ```

use alloy_primitives::U256;

/// Format a raw integer amount with `decimals` fractional digits.
///
/// The output always contains a decimal point followed by at least one digit.
/// Trailing zeros of the fractional part are trimmed down to a single digit,
/// so `10000 * 10^18` at 18 decimals renders as `"10000.0"`.
pub fn format_units(amount: U256, decimals: u8) -> String {
    let digits = amount.to_string();
    let scale = usize::from(decimals);

    if scale == 0 {
        return format!("{digits}.0");
    }

    // Left-pad so there is always at least one integer digit.
    let padded = if digits.len() <= scale {
        format!("{digits:0>width$}", width = scale + 1)
    } else {
        digits
    };

    let (whole, fractional) = padded.split_at(padded.len() - scale);
    let trimmed = fractional.trim_end_matches('0');

    if trimmed.is_empty() {
        format!("{whole}.0")
    } else {
        format!("{whole}.{trimmed}")
    }
}
