use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};
use thiserror::Error as ThisError;

/// Input length allowed while the text has no decimal separator.
pub const DEFAULT_INTEGER_MAX_LEN: usize = 10;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read amount config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse amount config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid amount config: {0}")]
    Invalid(String),
}

///
/// AmountConfig
///
/// Per-field knobs for amount entry. Every key is optional in TOML; missing
/// keys take the defaults below.
///
/// ```toml
/// integer_max_len = 10
/// normalize_comma = true
/// ```
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AmountConfig {
    /// Max input length while no `.` has been typed.
    pub integer_max_len: usize,

    /// Rewrite `,` to `.` before validating an edit.
    pub normalize_comma: bool,
}

impl AmountConfig {
    /// Parse and check a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.check()?;

        Ok(config)
    }

    /// Read, parse and check a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;

        Self::from_toml_str(&text)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.integer_max_len == 0 {
            return Err(ConfigError::Invalid(
                "integer_max_len must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for AmountConfig {
    fn default() -> Self {
        Self {
            integer_max_len: DEFAULT_INTEGER_MAX_LEN,
            normalize_comma: true,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = AmountConfig::from_toml_str("").unwrap();

        assert_eq!(config, AmountConfig::default());
        assert_eq!(config.integer_max_len, 10);
        assert!(config.normalize_comma);
    }

    #[test]
    fn keys_override_defaults() {
        let config =
            AmountConfig::from_toml_str("integer_max_len = 16\nnormalize_comma = false").unwrap();

        assert_eq!(config.integer_max_len, 16);
        assert!(!config.normalize_comma);
    }

    #[test]
    fn rejects_zero_length() {
        let err = AmountConfig::from_toml_str("integer_max_len = 0").unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = AmountConfig::from_toml_str("decimals = 8").unwrap_err();

        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = AmountConfig::load("/nonexistent/amountect.toml").unwrap_err();

        assert!(matches!(err, ConfigError::Io(_)));
    }
}
