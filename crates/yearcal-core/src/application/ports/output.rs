//! Driven output port - implemented by infrastructure.

use crate::error::CalendarResult;

/// Port for emitting calendar text.
///
/// Implemented by:
/// - `yearcal_adapters::sink::WriterSink` (stdout, stderr, files)
/// - `yearcal_adapters::sink::MemorySink` (testing)
///
/// Text is written verbatim; the sink adds no separators or line breaks.
#[cfg_attr(test, mockall::automock)]
pub trait CalendarSink: Send + Sync {
    /// Append `text` to the output.
    fn write_text(&self, text: &str) -> CalendarResult<()>;

    /// Push buffered text to the underlying stream.
    fn flush(&self) -> CalendarResult<()>;
}
