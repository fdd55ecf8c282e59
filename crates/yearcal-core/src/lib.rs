//! yearcal Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the yearcal
//! calendar printer, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           yearcal-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │           (CalendarService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │       (YearSource, CalendarSink)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     yearcal-adapters (Infrastructure)   │
//! │   (ReaderYearSource, WriterSink, ...)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (arithmetic, MonthGrid, YearCalendar)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use yearcal_core::prelude::*;
//!
//! // Pure functions
//! assert!(is_leap_year(2000));
//! assert_eq!(find_day(1, Month::January, 2000), Weekday::Saturday);
//!
//! // Layout without I/O
//! let calendar = YearCalendar::for_year(Year::new(2024)).unwrap();
//! print!("{}", render_year(&calendar));
//! ```

// Domain layer (pure calendar logic)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CalendarOptions, CalendarService, PROMPT,
        ports::{CalendarSink, YearSource},
    };
    pub use crate::domain::{
        Month, MonthGrid, Weekday, Year, YearCalendar, find_day, is_leap_year, month_header,
        number_of_days, render_month, render_year, weekday_of,
    };
    pub use crate::error::{CalendarError, CalendarResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
