//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `yearcal-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Input) Port**: `YearSource`, where the year comes from
//! - **Driven (Output) Port**: `CalendarSink`, where the text goes

pub mod input;
pub mod output;

pub use input::YearSource;
pub use output::CalendarSink;
