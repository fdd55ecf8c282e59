//! Core domain layer for yearcal.
//!
//! This module contains pure calendar logic with no I/O. Reading a year and
//! writing text are handled via ports (traits) defined in the application
//! layer.
//!
//! - **No I/O**: everything here returns values or `String`s
//! - **No hidden state**: every function is a function of its arguments
//! - **Immutable entities**: grids are built once and never mutated
//!
// Public API - what the world sees
pub mod arithmetic;
pub mod entities;
pub mod error;
pub mod layout;
pub mod value_objects;

// Re-exports for convenience
pub use arithmetic::{find_day, is_leap_year, number_of_days, weekday_of};
pub use entities::{MonthGrid, YearCalendar, YearCalendarBuilder};
pub use error::{DomainError, ErrorCategory};
pub use layout::{month_header, render_month, render_year, weekday_row, year_label};
pub use value_objects::{Month, Weekday, Year};
