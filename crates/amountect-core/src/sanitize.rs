//! Input sanitizers applied to raw amount text before conversion.

use crate::config::DEFAULT_INTEGER_MAX_LEN;
use tracing::trace;

///
/// Sanitizer
///
/// Rewrites a value in place. An `Err` carries a message for the caller.
///

pub trait Sanitizer<T> {
    fn sanitize(&self, value: &mut T) -> Result<(), String>;
}

///
/// NormalizeSeparator
///
/// Treats `,` as the decimal separator, as typed on locales whose numeric
/// keypad only offers a comma.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NormalizeSeparator;

impl Sanitizer<String> for NormalizeSeparator {
    fn sanitize(&self, value: &mut String) -> Result<(), String> {
        if value.contains(',') {
            *value = value.replace(',', ".");
        }

        Ok(())
    }
}

///
/// MaxInputLen
///
/// Truncates text to the longest input the field accepts for a given
/// number of decimals. See [`max_input_len`].
///

#[derive(Clone, Copy, Debug)]
pub struct MaxInputLen {
    decimals: u32,
    integer_max_len: usize,
}

impl MaxInputLen {
    #[must_use]
    pub const fn new(decimals: u32, integer_max_len: usize) -> Self {
        Self {
            decimals,
            integer_max_len,
        }
    }
}

impl Default for MaxInputLen {
    fn default() -> Self {
        Self::new(0, DEFAULT_INTEGER_MAX_LEN)
    }
}

impl Sanitizer<String> for MaxInputLen {
    fn sanitize(&self, value: &mut String) -> Result<(), String> {
        let max = max_input_len(value, self.decimals, self.integer_max_len);

        if value.chars().count() > max {
            trace!(max, input = %value, "truncating amount input");
            *value = value.chars().take(max).collect();
        }

        Ok(())
    }
}

/// Longest input accepted for `text` at `decimals`.
///
/// With a `.` present this is the integer part (sign included) plus the
/// separator plus `decimals` digits; without one it is `integer_max_len`.
#[must_use]
pub fn max_input_len(text: &str, decimals: u32, integer_max_len: usize) -> usize {
    match text.split_once('.') {
        Some((integer, _)) => usize::try_from(decimals)
            .unwrap_or(usize::MAX)
            .saturating_add(1)
            .saturating_add(integer.chars().count()),
        None => integer_max_len,
    }
}

///
/// TESTS
///
