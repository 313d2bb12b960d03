// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for decimal formatting
//!
//! These tests use proptest to validate that formatting never loses or
//! alters a digit across the whole U256 range and every precision.

use alloy_primitives::U256;
use proptest::prelude::*;
use tokenbalance::format_units;

// Arbitrary U256 built from four random limbs, biased towards small values
fn arb_amount() -> impl Strategy<Value = U256> {
    prop_oneof![
        any::<u64>().prop_map(U256::from),
        any::<u128>().prop_map(U256::from),
        any::<[u64; 4]>().prop_map(U256::from_limbs),
    ]
}

/// Undo the formatting: restore trimmed zeros and drop the decimal point.
fn reconstruct(formatted: &str, decimals: u8) -> String {
    let (whole, fraction) = formatted.split_once('.').expect("always has a decimal point");
    let scale = usize::from(decimals);
    let fraction = if scale == 0 {
        assert_eq!(fraction, "0");
        String::new()
    } else {
        format!("{fraction:0<scale$}")
    };
    let joined = format!("{whole}{fraction}");
    let trimmed = joined.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

proptest! {
    /// Property: every digit of the amount survives, in order
    #[test]
    fn prop_digits_are_preserved(amount in arb_amount(), decimals in any::<u8>()) {
        let formatted = format_units(amount, decimals);
        prop_assert_eq!(reconstruct(&formatted, decimals), amount.to_string());
    }

    /// Property: output always has exactly one decimal point and a fractional digit
    #[test]
    fn prop_always_has_fraction(amount in arb_amount(), decimals in any::<u8>()) {
        let formatted = format_units(amount, decimals);
        prop_assert_eq!(formatted.matches('.').count(), 1);
        let (whole, fraction) = formatted.split_once('.').unwrap();
        prop_assert!(!whole.is_empty());
        prop_assert!(!fraction.is_empty());
        prop_assert!(fraction.len() <= usize::from(decimals).max(1));
    }

    /// Property: the integer part is the amount divided by 10^decimals
    #[test]
    fn prop_integer_part_matches_division(amount in arb_amount(), decimals in 0u8..=77) {
        let formatted = format_units(amount, decimals);
        let whole = formatted.split_once('.').unwrap().0;
        let divisor = U256::from(10u64).pow(U256::from(decimals));
        prop_assert_eq!(whole, (amount / divisor).to_string());
    }

    /// Property: only the trailing zero of an integral value is kept
    #[test]
    fn prop_fraction_has_no_redundant_zeros(amount in arb_amount(), decimals in 1u8..=u8::MAX) {
        let formatted = format_units(amount, decimals);
        let fraction = formatted.split_once('.').unwrap().1;
        prop_assert!(fraction == "0" || !fraction.ends_with('0'));
    }
}
