//! In-memory calendar sink for testing.

use std::sync::{Arc, RwLock};

use yearcal_core::{
    application::{ApplicationError, ports::CalendarSink},
    error::CalendarResult,
};

/// In-memory sink for testing.
///
/// Clones share the same buffer, so a test can hand one clone to the
/// service and read the text back through another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    inner: Arc<RwLock<MemorySinkInner>>,
}

#[derive(Debug, Default)]
struct MemorySinkInner {
    text: String,
    flushes: usize,
}

impl MemorySink {
    /// Create a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.inner
            .read()
            .map(|inner| inner.text.clone())
            .unwrap_or_default()
    }

    /// Number of times `flush` was called.
    pub fn flush_count(&self) -> usize {
        self.inner.read().map(|inner| inner.flushes).unwrap_or(0)
    }

    /// Clear all contents.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.text.clear();
            inner.flushes = 0;
        }
    }
}

impl CalendarSink for MemorySink {
    fn write_text(&self, text: &str) -> CalendarResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StreamLockError)?;
        inner.text.push_str(text);
        Ok(())
    }

    fn flush(&self) -> CalendarResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StreamLockError)?;
        inner.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_buffer() {
        let sink = MemorySink::new();
        let handle = sink.clone();
        sink.write_text("Year: ").unwrap();
        sink.write_text("2023").unwrap();
        sink.flush().unwrap();
        assert_eq!(handle.contents(), "Year: 2023");
        assert_eq!(handle.flush_count(), 1);
    }

    #[test]
    fn clear_empties_buffer() {
        let sink = MemorySink::new();
        sink.write_text("x").unwrap();
        sink.clear();
        assert!(sink.contents().is_empty());
    }
}
