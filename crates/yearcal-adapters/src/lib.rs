//! Infrastructure adapters for yearcal.
//!
//! This crate implements the ports defined in `yearcal-core::application::ports`.
//! It contains all stream I/O.

pub mod sink;
pub mod source;

// Re-export commonly used adapters
pub use sink::{MemorySink, WriterSink};
pub use source::{FixedYearSource, ReaderYearSource};
