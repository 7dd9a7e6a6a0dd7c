use crate::{config::ConfigError, validate::ValidateError, value::ParseAmountValueError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Umbrella for the fallible edges of the crate. Amount conversion itself
/// never fails; bad input surfaces as `AmountValue::Invalid`.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    ParseAmountValue(#[from] ParseAmountValueError),

    #[error(transparent)]
    Validate(#[from] ValidateError),
}
