//! Core error types for the Ledgerboard engine.
//!
//! This module defines store-agnostic error types. Storage-specific errors
//! are converted to these types by the persistence layer before they reach
//! the engine.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors that occur during metric calculations.
///
/// Missing data is deliberately *not* an error: an absent actual, a zero
/// target or an empty snapshot resolves to zero, because "no data yet" is an
/// expected steady state of the dashboard.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Calculation failed: {0}")]
    Calculation(String),
}

/// Validation errors for configuration data and parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Overlapping effective intervals in configuration series: record effective {0} collides with record effective {1}")]
    OverlappingIntervals(String, String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] chrono::ParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
