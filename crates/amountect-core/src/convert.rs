//! Exact conversion between display units and base units.
//!
//! Both directions go through [`DecimalParts`](crate::literal::DecimalParts)
//! with an arbitrary-precision mantissa. Nothing here touches floating point.

use crate::{literal::DecimalLiteral, value::AmountValue};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Largest supported number of decimals.
pub const MAX_DECIMALS: u32 = 255;

/// Display text → base units, scaled by 10^decimals and truncated.
///
/// Text that is not a decimal literal (including `""`) yields
/// [`AmountValue::Invalid`], as does `decimals` above [`MAX_DECIMALS`].
/// Results are integers, so a negative amount that truncates to zero
/// (`-0.001` at 2 decimals) is plain `0`.
#[must_use]
pub fn to_base_unit(display: &str, decimals: u32) -> AmountValue {
    if decimals > MAX_DECIMALS {
        return AmountValue::Invalid;
    }

    DecimalLiteral::parse(display)
        .and_then(|literal| literal.parts())
        .map_or(AmountValue::Invalid, |parts| {
            AmountValue::Atomic(parts.scale_to_integer(decimals))
        })
}

/// Base units → display text.
///
/// Only the part before the first `.` is read; if it is not a literal the
/// value is taken as zero.
#[must_use]
pub fn to_display(base_unit: &str, decimals: u32) -> String {
    let integer_part = base_unit.split('.').next().unwrap_or_default();

    let atomic = DecimalLiteral::parse(integer_part)
        .and_then(|literal| literal.parts())
        .map(|parts| parts.mantissa)
        .unwrap_or_default();

    format_fixed_point(&atomic, decimals)
}

/// Render `atomic / 10^decimals` as plain fixed-point text.
///
/// No exponent, no trailing fractional zeros, no `-0`. Decimals above
/// [`MAX_DECIMALS`] are treated as [`MAX_DECIMALS`].
#[must_use]
pub fn format_fixed_point(atomic: &BigInt, decimals: u32) -> String {
    if atomic.is_zero() {
        return "0".to_string();
    }

    let decimals = usize::try_from(decimals.min(MAX_DECIMALS)).unwrap_or(usize::MAX);
    let digits = atomic.magnitude().to_string();

    let padded = if digits.len() <= decimals {
        format!("{digits:0>width$}", width = decimals.saturating_add(1))
    } else {
        digits
    };

    let (integer, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    let sign = if atomic.is_negative() { "-" } else { "" };

    if fraction.is_empty() {
        format!("{sign}{integer}")
    } else {
        format!("{sign}{integer}.{fraction}")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn atomic(s: &str) -> AmountValue {
        s.parse().unwrap()
    }

    #[test]
    fn to_base_unit_truncates() {
        assert_eq!(to_base_unit("1.23456", 4), atomic("12345"));
        assert_eq!(to_base_unit("0.999", 2), atomic("99"));
        assert_eq!(to_base_unit("-1.239", 2), atomic("-123"));
        assert_eq!(to_base_unit("-0.001", 2), atomic("0"));
    }

    #[test]
    fn to_base_unit_scales_up() {
        assert_eq!(to_base_unit("1.5", 18), atomic("1500000000000000000"));
        assert_eq!(to_base_unit(".5", 1), atomic("5"));
        assert_eq!(to_base_unit("42", 0), atomic("42"));
        assert_eq!(
            to_base_unit("123456789012345678901234567890", 18),
            atomic("123456789012345678901234567890000000000000000000")
        );
    }

    #[test]
    fn to_base_unit_rejects_non_literals() {
        for input in ["", "-", "1.", "1.5.6", "abc", "1,5"] {
            assert_eq!(to_base_unit(input, 6), AmountValue::Invalid, "{input:?}");
        }
    }

    #[test]
    fn to_display_divides_exactly() {
        assert_eq!(to_display("12345", 4), "1.2345");
        assert_eq!(to_display("1500000000000000000", 18), "1.5");
        assert_eq!(to_display("1", 8), "0.00000001");
        assert_eq!(to_display("100", 2), "1");
        assert_eq!(to_display("42", 0), "42");
        assert_eq!(to_display("-500", 2), "-5");
        assert_eq!(to_display("-5", 2), "-0.05");
    }

    #[test]
    fn to_display_reads_integer_part_only() {
        assert_eq!(to_display("12345.999", 2), "123.45");
        assert_eq!(to_display(".5", 2), "0");
    }

    #[test]
    fn to_display_defaults_to_zero() {
        for input in ["", "abc", "__NAN__", "-", "-0"] {
            assert_eq!(to_display(input, 6), "0", "{input:?}");
        }
    }

    #[test]
    fn oversized_decimals_are_bounded() {
        assert_eq!(to_base_unit("1", u32::MAX), AmountValue::Invalid);
        assert_eq!(to_base_unit("1", MAX_DECIMALS).to_string().len(), 256);
        assert_eq!(to_display("1", u32::MAX), to_display("1", MAX_DECIMALS));
    }

    #[test]
    fn format_fixed_point_pads_short_values() {
        assert_eq!(format_fixed_point(&BigInt::from(7), 3), "0.007");
        assert_eq!(format_fixed_point(&BigInt::from(-70), 3), "-0.07");
        assert_eq!(format_fixed_point(&BigInt::from(1_000), 3), "1");
    }

    // Canonical text for a literal: no redundant leading zeros, no trailing
    // fractional zeros, no "-0".
    fn canonical(literal: &str) -> String {
        let (negative, rest) = match literal.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, literal),
        };
        let (integer, fraction) = rest.split_once('.').unwrap_or((rest, ""));

        let integer = integer.trim_start_matches('0');
        let integer = if integer.is_empty() { "0" } else { integer };
        let fraction = fraction.trim_end_matches('0');

        let body = if fraction.is_empty() {
            integer.to_string()
        } else {
            format!("{integer}.{fraction}")
        };

        if negative && body != "0" {
            format!("-{body}")
        } else {
            body
        }
    }

    fn literal(negative: bool, integer: &str, fraction: &str) -> String {
        let mut s = String::new();
        if negative {
            s.push('-');
        }
        s.push_str(integer);
        if !fraction.is_empty() {
            s.push('.');
            s.push_str(fraction);
        }

        s
    }

    proptest! {
        #[test]
        fn display_roundtrip_is_canonical(
            negative in any::<bool>(),
            integer in "[0-9]{0,40}",
            fraction in "[0-9]{0,18}",
            extra in 0u32..12,
        ) {
            prop_assume!(!(integer.is_empty() && fraction.is_empty()));

            let s = literal(negative, &integer, &fraction);
            let decimals = u32::try_from(fraction.len()).unwrap() + extra;

            let base = to_base_unit(&s, decimals);
            prop_assert_eq!(to_display(&base.to_string(), decimals), canonical(&s));
        }

        #[test]
        fn excess_fraction_is_dropped(
            integer in "[1-9][0-9]{0,20}",
            fraction in "[0-9]{1,24}",
            decimals in 0usize..24,
        ) {
            prop_assume!(decimals < fraction.len());

            let kept = &fraction[..decimals];
            let full = literal(false, &integer, &fraction);
            let cut = literal(false, &integer, kept);
            let decimals = u32::try_from(decimals).unwrap();

            prop_assert_eq!(to_base_unit(&full, decimals), to_base_unit(&cut, decimals));
        }
    }
}
