//! Application layer errors.
//!
//! These errors represent failures at the I/O boundary, not calendar logic.
//! Calendar errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while reading the year or writing the calendar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Input ended before a year token was found.
    #[error("No year given: input ended before a year was read")]
    MissingYear,

    /// Reading from the year source failed.
    #[error("Failed to read year: {reason}")]
    InputFailed { reason: String },

    /// Writing to the calendar sink failed.
    #[error("Failed to write calendar: {reason}")]
    OutputFailed { reason: String },

    /// A stream lock was poisoned by a panicking writer.
    #[error("Stream lock poisoned")]
    StreamLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingYear => vec![
                "Type a year and press Enter, e.g. 2024".into(),
                "Or pass it as an argument: yearcal show 2024".into(),
            ],
            Self::InputFailed { reason } => vec![
                format!("Input error: {}", reason),
                "Check that standard input is readable".into(),
            ],
            Self::OutputFailed { .. } => vec![
                "Check that standard output is still open".into(),
                "When piping, make sure the reader consumes all output".into(),
            ],
            Self::StreamLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingYear => ErrorCategory::Validation,
            Self::InputFailed { .. } | Self::OutputFailed { .. } => ErrorCategory::Io,
            Self::StreamLockError => ErrorCategory::Internal,
        }
    }
}
