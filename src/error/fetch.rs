//! The "fetch failed" error reported by data providers.

use thiserror::Error;

/// Message shown when a failure carries no message of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// A failed fetch, optionally carrying a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The provider reported a failure with a message.
    #[error("{0}")]
    Failed(String),

    /// The provider failed without saying why.
    #[error("Unknown error")]
    Unspecified,
}

impl FetchError {
    /// Create a failure with the given message.
    ///
    /// Blank messages collapse into [`FetchError::Unspecified`] so the screen
    /// never shows an empty error line.
    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            FetchError::Unspecified
        } else {
            FetchError::Failed(message)
        }
    }

    /// The message carried by this failure, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            FetchError::Failed(message) => Some(message),
            FetchError::Unspecified => None,
        }
    }

    /// Text to display on the error view.
    pub fn user_message(&self) -> &str {
        self.message().unwrap_or(UNKNOWN_ERROR_MESSAGE)
    }
}
