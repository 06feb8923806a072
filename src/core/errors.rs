//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for usermgr operations
#[derive(Debug, Error)]
pub enum Error {
    /// Division with a zero divisor
    #[error("Division by zero: cannot divide {dividend} by zero")]
    DivisionByZero { dividend: f64 },

    /// Age text that does not parse as a non-negative integer
    #[error("Invalid age '{input}': {reason}")]
    InvalidAge { input: String, reason: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        path: Option<PathBuf>,
    },

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error without a file
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error tied to a config file
    pub fn configuration_at(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create an age parse error
    pub fn invalid_age(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAge {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
