//! Application layer for yearcal.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CalendarService)
//! - **Ports**: Interface definitions (traits) for input and output
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! calendar logic itself. All date rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{CalendarOptions, CalendarService, PROMPT};

// Re-export port traits (for adapter implementation)
pub use ports::{CalendarSink, YearSource};

pub use error::ApplicationError;
