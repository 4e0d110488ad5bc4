//! Error types for rotorvib.
//!
//! All fallible operations return `Result<T, RotorError>` instead of
//! panicking. Invalid user input is reported through the
//! `InvalidParameter` variant so the CLI can print a single actionable
//! message and exit non-zero.

use thiserror::Error;

/// Result type alias for rotorvib operations.
pub type RotorResult<T> = Result<T, RotorError>;

/// Unified error type for all rotorvib operations.
#[derive(Debug, Error)]
pub enum RotorError {
    /// A user-supplied parameter violates one of the model invariants
    /// (non-positive mass, negative radius, rpm <= 0, samples < 2, ...).
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Name of the offending parameter or flag.
        name: String,
        /// Description of the violated constraint.
        message: String,
    },

    /// Invalid scenario configuration.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Schema validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Plot or viewer rendering error.
    #[error("Render error: {0}")]
    Render(String),
}

impl RotorError {
    /// Create an invalid-parameter error.
    #[must_use]
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create a render error.
    #[must_use]
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }

    /// Create an I/O error with a message (wraps in `std::io::Error`).
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(std::io::Error::other(message.into()))
    }
}
