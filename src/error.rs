//! Custom error types for fdd
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::Path;

use thiserror::Error;

/// The main error type for fdd operations
#[derive(Error, Debug)]
pub enum FddError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for amounts and dates
    #[error("Validation error: {0}")]
    Validation(String),

    /// A zero or negative daily allowance was given to `init`
    #[error("Invalid daily allowance: {0} (must be at least 1 cent)")]
    InvalidAllowance(i64),

    /// A negative spending amount
    #[error("Invalid amount: {0} (must not be negative)")]
    InvalidAmount(i64),

    /// The state file cannot be opened for reading or writing
    #[error("Cannot open '{path}': {reason}")]
    PersistenceUnavailable { path: String, reason: String },

    /// The state file exists but does not hold a valid record
    #[error("Corrupt state file '{path}': {reason}")]
    CorruptState { path: String, reason: String },
}

impl FddError {
    /// Create a persistence error naming the offending path
    pub fn unavailable(path: &Path, reason: impl ToString) -> Self {
        Self::PersistenceUnavailable {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a corrupt state error naming the offending path
    pub fn corrupt(path: &Path, reason: impl Into<String>) -> Self {
        Self::CorruptState {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this error was caused by bad user input rather than the environment
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::InvalidAllowance(_) | Self::InvalidAmount(_) | Self::Validation(_)
        )
    }

    /// Check if this is a persistence error
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            Self::PersistenceUnavailable { .. } | Self::CorruptState { .. }
        )
    }
}

impl From<std::io::Error> for FddError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FddError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fdd operations
pub type FddResult<T> = Result<T, FddError>;
