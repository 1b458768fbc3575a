//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// General file I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// The tracker file is missing or unreadable
    #[error("Unable to read from file: {0}")]
    StorageRead(String),

    /// The tracker file cannot be opened or written
    #[error("Unable to write to file: {0}")]
    StorageWrite(String),

    /// Malformed document, missing field, or unparseable date
    #[error("Format error: {0}")]
    Format(String),

    /// Index outside the recorded expenses
    #[error("Index {index} out of range for {len} expenses")]
    IndexOutOfRange { index: usize, len: usize },

    /// Invalid user input (month numbers, dates)
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ExpenseError {
    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Format(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
