//! Calendar sink over any `std::io::Write`.

use std::io::{self, Write};
use std::sync::Mutex;

use yearcal_core::{
    application::{ApplicationError, ports::CalendarSink},
    error::{CalendarError, CalendarResult},
};

/// Production sink writing to stdout, stderr, or any other writer.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl WriterSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> CalendarSink for WriterSink<W> {
    fn write_text(&self, text: &str) -> CalendarResult<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ApplicationError::StreamLockError)?;
        writer
            .write_all(text.as_bytes())
            .map_err(|e| map_io_error(e, "write"))
    }

    fn flush(&self) -> CalendarResult<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ApplicationError::StreamLockError)?;
        writer.flush().map_err(|e| map_io_error(e, "flush"))
    }
}

fn map_io_error(e: io::Error, operation: &str) -> CalendarError {
    tracing::debug!(error = %e, operation, "Sink I/O failed");
    ApplicationError::OutputFailed {
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
