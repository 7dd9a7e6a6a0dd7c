use crate::literal::DecimalLiteral;
use num_bigint::BigInt;
use num_traits::Signed;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt::{self, Display},
    str::FromStr,
};
use thiserror::Error as ThisError;

/// String form of [`AmountValue::Invalid`] handed to hosts that speak strings.
pub const INVALID_AMOUNT_VALUE: &str = "__NAN__";

/// Returns true if `value` is the invalid-amount sentinel.
#[must_use]
pub fn is_invalid_amount_value(value: &str) -> bool {
    value == INVALID_AMOUNT_VALUE
}

///
/// ParseAmountValueError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ParseAmountValueError {
    #[error("not a base-unit integer: {0:?}")]
    NotAnInteger(String),
}

///
/// AmountValue
///
/// The base-unit side of an amount field, as emitted to the hosting form.
///
/// - `Cleared`: the user emptied the field; renders as `""`
/// - `Invalid`: the current text is not a number; renders as `__NAN__`
/// - `Atomic`: display value × 10^decimals, truncated
/// - `External`: a base-unit string forced in by the caller, kept verbatim
///

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum AmountValue {
    #[default]
    Cleared,
    Invalid,
    Atomic(BigInt),
    External(String),
}

impl AmountValue {
    /// Wrap a caller-supplied base-unit string without touching it.
    #[must_use]
    pub fn from_external(value: impl Into<String>) -> Self {
        Self::External(value.into())
    }

    /// Computed atomics only; see [`Self::to_atomic`] for externals.
    #[must_use]
    pub const fn as_atomic(&self) -> Option<&BigInt> {
        match self {
            Self::Atomic(n) => Some(n),
            _ => None,
        }
    }

    /// Base units as an integer, reading externals that are integer literals.
    #[must_use]
    pub fn to_atomic(&self) -> Option<BigInt> {
        match self {
            Self::Atomic(n) => Some(n.clone()),
            Self::External(s) => parse_integer(s),
            Self::Cleared | Self::Invalid => None,
        }
    }

    #[must_use]
    pub const fn is_cleared(&self) -> bool {
        matches!(self, Self::Cleared)
    }

    /// Returns true for `Invalid` and for externals that are not integers.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        match self {
            Self::Invalid => true,
            Self::External(s) => parse_integer(s).is_none(),
            Self::Cleared | Self::Atomic(_) => false,
        }
    }

    /// Returns true for values below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.to_atomic().is_some_and(|n| n.is_negative())
    }
}

fn parse_integer(s: &str) -> Option<BigInt> {
    DecimalLiteral::parse(s)
        .filter(|literal| literal.is_integer())
        .and_then(|literal| literal.parts())
        .map(|parts| parts.mantissa)
}

impl Display for AmountValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cleared => Ok(()),
            Self::Invalid => f.write_str(INVALID_AMOUNT_VALUE),
            Self::Atomic(n) => Display::fmt(n, f),
            Self::External(s) => f.write_str(s),
        }
    }
}

impl From<BigInt> for AmountValue {
    fn from(n: BigInt) -> Self {
        Self::Atomic(n)
    }
}

impl From<u64> for AmountValue {
    fn from(n: u64) -> Self {
        Self::Atomic(n.into())
    }
}

impl From<u128> for AmountValue {
    fn from(n: u128) -> Self {
        Self::Atomic(n.into())
    }
}

// Only "", the sentinel, or an integer literal. Externals are not
// recovered; "007" parses back as Atomic(7).
impl FromStr for AmountValue {
    type Err = ParseAmountValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::Cleared);
        }
        if is_invalid_amount_value(s) {
            return Ok(Self::Invalid);
        }

        parse_integer(s)
            .map(Self::Atomic)
            .ok_or_else(|| ParseAmountValueError::NotAnInteger(s.to_string()))
    }
}

// Serde uses the same string form hosts see, so JSON payloads stay readable
// and integers of any width survive.
impl Serialize for AmountValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AmountValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;

        // anything that is not our own form came from a caller
        Ok(s.parse().unwrap_or(Self::External(s)))
    }
}

///
/// TESTS
///
