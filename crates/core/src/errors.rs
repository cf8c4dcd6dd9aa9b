//! Core error types for the StockShare engine.
//!
//! Every failure here is deterministic: the engine performs no I/O, so the
//! caller must fix its input rather than retry.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the valuation and ranking engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("No quote available for symbol '{symbol}'")]
    MissingQuote { symbol: String },

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Shorthand for `Error::Validation(ValidationError::InvalidInput(..))`.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::Validation(ValidationError::InvalidInput(message.into()))
    }

    pub fn missing_quote(symbol: impl Into<String>) -> Self {
        Error::MissingQuote {
            symbol: symbol.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Validation errors for caller-supplied input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
