//! Decimal literal grammar.
//!
//! Accepted text is `-?\d*(\.\d+)?` with at least one digit somewhere.
//! No whitespace, no `+`, no exponent, no grouping separators.

use num_bigint::BigInt;

///
/// DecimalParts
///
/// Exact decomposition of a decimal literal.
///
/// Invariant:
/// - value == mantissa * 10^-scale
/// - mantissa carries the sign
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecimalParts {
    pub mantissa: BigInt,
    pub scale: u32,
}

impl DecimalParts {
    /// Scale by 10^target_scale and drop any fractional remainder.
    ///
    /// Truncates toward zero, so `-1.239` at scale 2 gives `-123`.
    #[must_use]
    pub fn scale_to_integer(&self, target_scale: u32) -> BigInt {
        if self.scale <= target_scale {
            &self.mantissa * pow10(target_scale - self.scale)
        } else {
            // BigInt division truncates toward zero
            &self.mantissa / pow10(self.scale - target_scale)
        }
    }
}

///
/// DecimalLiteral
///
/// Borrowed view over text accepted by the literal grammar.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DecimalLiteral<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
}

impl<'a> DecimalLiteral<'a> {
    /// Parse `input` against the grammar, returning `None` on any mismatch.
    #[must_use]
    pub fn parse(input: &'a str) -> Option<Self> {
        let (negative, rest) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        let (integer, fraction) = match rest.split_once('.') {
            // a separator must be followed by at least one digit
            Some((_, "")) => return None,
            Some((integer, fraction)) => (integer, fraction),
            None => (rest, ""),
        };

        if !is_ascii_digits(integer) || !is_ascii_digits(fraction) {
            return None;
        }

        // "-" and "" match the pattern but do not denote a number
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }

        Some(Self {
            negative,
            integer,
            fraction,
        })
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Integer digits as typed (may be empty, as in `.5`).
    #[must_use]
    pub const fn integer(&self) -> &'a str {
        self.integer
    }

    /// Fractional digits as typed (empty when there is no separator).
    #[must_use]
    pub const fn fraction(&self) -> &'a str {
        self.fraction
    }

    /// Returns true if the literal has no fractional part.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.fraction.is_empty()
    }

    /// Decompose into an exact mantissa and scale.
    ///
    /// Returns `None` only if the fractional part is longer than `u32::MAX`
    /// digits.
    #[must_use]
    pub fn parts(&self) -> Option<DecimalParts> {
        let scale = u32::try_from(self.fraction.len()).ok()?;

        let mut digits = String::with_capacity(self.integer.len() + self.fraction.len());
        digits.push_str(self.integer);
        digits.push_str(self.fraction);

        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)?;
        let mantissa = if self.negative { -magnitude } else { magnitude };

        Some(DecimalParts { mantissa, scale })
    }
}

/// Returns true if `input` is a decimal literal denoting a number.
#[must_use]
pub fn is_valid_decimal_literal(input: &str) -> bool {
    DecimalLiteral::parse(input).is_some()
}

/// 10^exp as an arbitrary-precision integer.
#[must_use]
pub fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u8).pow(exp)
}

fn is_ascii_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_grammar() {
        for input in ["1.5", "-3", "0", "007", ".5", "-.5", "123456789012345678901234567890"] {
            assert!(is_valid_decimal_literal(input), "{input} should be valid");
        }
    }

    #[test]
    fn rejects_non_literals() {
        for input in [
            "", "-", ".", "1.", "-1.", "1.5.6", "abc", "+1", " 1", "1 ", "1e5", "1,5", "--1", "1-",
            "١",
        ] {
            assert!(!is_valid_decimal_literal(input), "{input:?} should be invalid");
        }
    }

    #[test]
    fn parts_are_exact() {
        let parts = DecimalLiteral::parse("-12.340").unwrap().parts().unwrap();

        assert_eq!(parts.mantissa, BigInt::from(-12_340));
        assert_eq!(parts.scale, 3);
    }

    #[test]
    fn parts_of_bare_fraction() {
        let parts = DecimalLiteral::parse(".05").unwrap().parts().unwrap();

        assert_eq!(parts.mantissa, BigInt::from(5));
        assert_eq!(parts.scale, 2);
    }

    #[test]
    fn scale_to_integer_truncates_toward_zero() {
        let up = DecimalLiteral::parse("1.5").unwrap().parts().unwrap();
        assert_eq!(up.scale_to_integer(3), BigInt::from(1_500));

        let down = DecimalLiteral::parse("1.23456").unwrap().parts().unwrap();
        assert_eq!(down.scale_to_integer(4), BigInt::from(12_345));

        let negative = DecimalLiteral::parse("-1.239").unwrap().parts().unwrap();
        assert_eq!(negative.scale_to_integer(2), BigInt::from(-123));
    }

    #[test]
    fn accessors_reflect_input() {
        let literal = DecimalLiteral::parse("-0042.10").unwrap();

        assert!(literal.is_negative());
        assert_eq!(literal.integer(), "0042");
        assert_eq!(literal.fraction(), "10");
        assert!(!literal.is_integer());
        assert!(DecimalLiteral::parse("42").unwrap().is_integer());
    }
}
