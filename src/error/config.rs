//! Configuration errors raised while parsing arguments and environment.

use thiserror::Error;

/// Invalid command-line argument or environment value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A flag that takes a value was given without one.
    #[error("missing value for {flag}")]
    MissingValue { flag: String },

    /// A value could not be parsed or is out of range.
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// A category name that is not one of the four known categories.
    #[error("unknown category '{0}' (expected users, products, news or statistics)")]
    UnknownCategory(String),

    /// An argument the CLI does not recognize.
    #[error("unknown argument '{0}' (try --help)")]
    UnknownArgument(String),
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, value: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
