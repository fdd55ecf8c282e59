//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "prompt for a year and print its calendar".

pub mod calendar_service;

pub use calendar_service::{CalendarOptions, CalendarService, PROMPT};
