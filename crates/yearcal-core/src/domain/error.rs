// ============================================================================
// domain/error.rs - CALENDAR DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they carry only plain data)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid year '{input}': {reason}")]
    InvalidYear { input: String, reason: String },

    #[error("Invalid month '{value}': expected 1-12 or a month name")]
    InvalidMonth { value: String },

    #[error("Invalid day {day} for {month}: month has {days} days")]
    InvalidDay {
        day: u32,
        month: &'static str,
        days: u32,
    },

    #[error("Invalid weekday index {index}: expected 0-6")]
    InvalidWeekday { index: u8 },

    #[error("Invalid leading blank count {blanks}: expected 0-6")]
    InvalidOffset { blanks: u8 },

    // ========================================================================
    // Consistency Errors
    // ========================================================================
    #[error(
        "{month} {year}: carried offset {carried} does not match computed weekday {computed}"
    )]
    OffsetMismatch {
        month: &'static str,
        year: i32,
        carried: u8,
        computed: u8,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidYear { input, .. } => vec![
                format!("'{}' is not a whole number", input),
                "Enter a year such as 2024 (negative years are accepted)".into(),
                format!("Years must fit between {} and {}", i32::MIN, i32::MAX),
            ],
            Self::InvalidMonth { .. } => vec![
                "Use a month number from 1 to 12".into(),
                "Or a name such as 'march' or 'mar'".into(),
            ],
            Self::InvalidDay { month, days, .. } => {
                vec![format!("{} has days 1 to {} in that year", month, days)]
            }
            Self::OffsetMismatch { .. } => vec![
                "The month grid alignment drifted from the weekday formula".into(),
                "This is a bug in the day-count rules, please report it".into(),
                "Set calendar.verify_offsets = false to print anyway".into(),
            ],
            _ => vec!["See --help for accepted values".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidYear { .. }
            | Self::InvalidMonth { .. }
            | Self::InvalidDay { .. }
            | Self::InvalidWeekday { .. }
            | Self::InvalidOffset { .. } => ErrorCategory::Validation,
            Self::OffsetMismatch { .. } => ErrorCategory::Consistency,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Consistency,
}
