//! Rules a hosting form applies to the value an amount field emits.
//!
//! The session only says whether the text is a number; whether that number
//! is acceptable (present, positive, within balance) is decided here.

use crate::value::AmountValue;
use derive_more::Deref;
use num_bigint::BigInt;
use thiserror::Error as ThisError;

///
/// ValidateError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValidateError {
    #[error("validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),
}

impl ValidateError {
    #[must_use]
    pub fn messages(&self) -> &[String] {
        match self {
            Self::ValidationFailed(messages) => messages,
        }
    }
}

///
/// Validator
///

pub trait Validator {
    fn validate(&self, value: &AmountValue) -> Result<(), String>;
}

///
/// Required
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Required;

impl Validator for Required {
    fn validate(&self, value: &AmountValue) -> Result<(), String> {
        if value.is_cleared() {
            Err("amount is required".to_string())
        } else {
            Ok(())
        }
    }
}

///
/// NotInvalid
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NotInvalid;

impl Validator for NotInvalid {
    fn validate(&self, value: &AmountValue) -> Result<(), String> {
        if value.is_invalid() {
            Err("amount is not a valid number".to_string())
        } else {
            Ok(())
        }
    }
}

///
/// NonNegative
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NonNegative;

impl Validator for NonNegative {
    fn validate(&self, value: &AmountValue) -> Result<(), String> {
        if value.is_negative() {
            Err(format!("{value} must not be negative"))
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// Comparison validators
// ============================================================================

// Targets are in base units. Values with no integer reading pass; Required
// and NotInvalid cover those.
macro_rules! cmp_validator {
    ($name:ident, $op:tt, $msg:expr) => {
        #[derive(Clone, Debug)]
        pub struct $name {
            target: BigInt,
        }

        impl $name {
            #[must_use]
            pub fn new(target: impl Into<BigInt>) -> Self {
                Self {
                    target: target.into(),
                }
            }
        }

        impl Validator for $name {
            fn validate(&self, value: &AmountValue) -> Result<(), String> {
                let Some(v) = value.to_atomic() else {
                    return Ok(());
                };

                if v $op self.target {
                    Ok(())
                } else {
                    Err(format!($msg, v, self.target))
                }
            }
        }
    };
}

cmp_validator!(Lt, <,  "{} must be < {}");
cmp_validator!(Gt, >,  "{} must be > {}");
cmp_validator!(Lte, <=, "{} must be <= {}");
cmp_validator!(Gte, >=, "{} must be >= {}");

// ============================================================================
// AmountRules
// ============================================================================

///
/// AmountRules
///
/// Ordered validator list. Every failing rule contributes a message.
///

#[derive(Default, Deref)]
pub struct AmountRules(Vec<Box<dyn Validator>>);

impl AmountRules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Present, numeric, non-negative and above zero.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with(Required)
            .with(NotInvalid)
            .with(NonNegative)
            .with(Gt::new(0u8))
    }

    #[must_use]
    pub fn with(mut self, validator: impl Validator + 'static) -> Self {
        self.0.push(Box::new(validator));
        self
    }

    pub fn validate(&self, value: &AmountValue) -> Result<(), ValidateError> {
        let messages: Vec<String> = self
            .0
            .iter()
            .filter_map(|rule| rule.validate(value).err())
            .collect();

        if messages.is_empty() {
            Ok(())
        } else {
            Err(ValidateError::ValidationFailed(messages))
        }
    }

    #[must_use]
    pub fn is_valid(&self, value: &AmountValue) -> bool {
        self.validate(value).is_ok()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn atomic(s: &str) -> AmountValue {
        s.parse().unwrap()
    }

    #[test]
    fn required() {
        assert!(Required.validate(&AmountValue::Cleared).is_err());
        assert!(Required.validate(&AmountValue::Invalid).is_ok());
        assert!(Required.validate(&atomic("1")).is_ok());
    }

    #[test]
    fn not_invalid() {
        assert!(NotInvalid.validate(&AmountValue::Invalid).is_err());
        assert!(NotInvalid.validate(&AmountValue::Cleared).is_ok());
    }

    #[test]
    fn non_negative() {
        assert!(NonNegative.validate(&atomic("-1")).is_err());
        assert!(NonNegative.validate(&atomic("0")).is_ok());
    }

    #[test]
    fn comparisons() {
        assert!(Lte::new(100u64).validate(&atomic("100")).is_ok());
        assert!(Lte::new(100u64).validate(&atomic("101")).is_err());
        assert!(Lt::new(100u64).validate(&atomic("100")).is_err());
        assert!(Gte::new(1u64).validate(&atomic("1")).is_ok());
        assert!(Gt::new(0u64).validate(&atomic("0")).is_err());
    }

    #[test]
    fn comparisons_skip_non_atomics() {
        assert!(Gt::new(0u64).validate(&AmountValue::Invalid).is_ok());
        assert!(Lte::new(0u64).validate(&AmountValue::Cleared).is_ok());
    }

    #[test]
    fn forced_values_are_compared() {
        let balance = Lte::new(1_000u64);

        assert!(balance.validate(&AmountValue::from_external("0999")).is_ok());
        assert!(balance.validate(&AmountValue::from_external("1001")).is_err());
        assert!(NotInvalid.validate(&AmountValue::from_external("12.5")).is_err());
        assert!(NonNegative.validate(&AmountValue::from_external("-1")).is_err());
    }

    #[test]
    fn comparison_message() {
        let err = Lte::new(5u64).validate(&atomic("6")).unwrap_err();

        assert_eq!(err, "6 must be <= 5");
    }

    #[test]
    fn wide_balance() {
        let balance: BigInt = "1000000000000000000000000000000".parse().unwrap();
        let rule = Lte::new(balance);

        assert!(rule.validate(&atomic("999999999999999999999999999999")).is_ok());
        assert!(rule.validate(&atomic("1000000000000000000000000000001")).is_err());
    }

    #[test]
    fn standard_rules_collect_messages() {
        let rules = AmountRules::standard();
        assert_eq!(rules.len(), 4);

        assert!(rules.is_valid(&atomic("1")));

        let err = rules.validate(&AmountValue::Cleared).unwrap_err();
        assert_eq!(err.messages(), ["amount is required".to_string()]);

        let err = rules.validate(&atomic("-5")).unwrap_err();
        assert_eq!(err.messages().len(), 2);
        assert!(err.to_string().starts_with("validation failed: "));
    }

    #[test]
    fn balance_rule_composes() {
        let rules = AmountRules::standard().with(Lte::new(1_000u64));

        assert!(rules.is_valid(&atomic("1000")));
        assert!(!rules.is_valid(&atomic("1001")));
    }
}
