//! Year source reading the first whitespace-delimited token of a stream.

use std::io::{self, BufRead, BufReader};
use std::sync::Mutex;

use tracing::debug;
use yearcal_core::{
    application::{ApplicationError, ports::YearSource},
    domain::Year,
    error::CalendarResult,
};

/// Reads one year from stdin or any other `BufRead`.
///
/// Blank lines and leading whitespace are skipped. The first token found is
/// parsed as the year; whatever follows it on the same line stays buffered
/// and is what the next call reads from.
#[derive(Debug)]
pub struct ReaderYearSource<R> {
    state: Mutex<ReaderState<R>>,
}

#[derive(Debug)]
struct ReaderState<R> {
    reader: R,
    /// Unread remainder of the last line.
    pending: String,
}

impl<R: BufRead + Send> ReaderYearSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            state: Mutex::new(ReaderState {
                reader,
                pending: String::new(),
            }),
        }
    }
}

impl ReaderYearSource<BufReader<io::Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead + Send> YearSource for ReaderYearSource<R> {
    fn read_year(&self) -> CalendarResult<Year> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ApplicationError::StreamLockError)?;
        let ReaderState { reader, pending } = &mut *state;

        loop {
            let rest = pending.trim_start();
            if !rest.is_empty() {
                let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                let (token, tail) = rest.split_at(end);
                debug!(token, "Year token read");
                let year = token.parse::<Year>();
                let tail = tail.to_owned();
                *pending = tail;
                return Ok(year?);
            }

            pending.clear();
            let read = reader
                .read_line(pending)
                .map_err(|e| ApplicationError::InputFailed {
                    reason: e.to_string(),
                })?;
            if read == 0 {
                return Err(ApplicationError::MissingYear.into());
            }
        }
    }
}
