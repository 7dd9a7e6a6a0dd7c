//! Core runtime for AmountEct: the decimal literal grammar, exact conversion
//! between display and base units, the amount-entry session, and the
//! sanitizers, validators and telemetry around it.
#![warn(unreachable_pub)]

pub mod config;
pub mod convert;
pub mod error;
pub mod literal;
pub mod obs;
pub mod sanitize;
pub mod session;
pub mod validate;
pub mod value;

pub use error::Error;

///
/// Prelude
///
/// Domain vocabulary only. Errors, sinks and sanitizers stay in their
/// modules.
///

pub mod prelude {
    pub use crate::{
        config::AmountConfig,
        convert::{to_base_unit, to_display},
        literal::is_valid_decimal_literal,
        session::{AmountChange, AmountSession, ChangeOrigin},
        validate::AmountRules,
        value::{AmountValue, INVALID_AMOUNT_VALUE, is_invalid_amount_value},
    };
}
