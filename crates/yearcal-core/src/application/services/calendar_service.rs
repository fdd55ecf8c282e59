//! Calendar Service - main application orchestrator.
//!
//! This service coordinates the whole run:
//! 1. Prompt for and read the year
//! 2. Lay out the twelve month grids
//! 3. Write the rendered text to the sink
//!
//! It uses driven ports for both ends and owns no state between calls.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{CalendarSink, YearSource},
    domain::{Year, YearCalendar, render_year},
    error::CalendarResult,
};

/// Prompt written before the year is read.
pub const PROMPT: &str = "Enter the year you wish to see the calendar of: ";

/// Knobs for a calendar run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarOptions {
    /// Write [`PROMPT`] before reading the year.
    pub prompt: bool,
    /// Cross-check carried month offsets against the weekday formula.
    pub verify_offsets: bool,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            prompt: true,
            verify_offsets: true,
        }
    }
}

/// Main calendar service.
pub struct CalendarService {
    source: Box<dyn YearSource>,
    sink: Box<dyn CalendarSink>,
    options: CalendarOptions,
}

impl CalendarService {
    /// Create a new calendar service with the given adapters and default
    /// options.
    pub fn new(source: Box<dyn YearSource>, sink: Box<dyn CalendarSink>) -> Self {
        Self {
            source,
            sink,
            options: CalendarOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CalendarOptions) -> Self {
        self.options = options;
        self
    }

    pub const fn options(&self) -> CalendarOptions {
        self.options
    }

    /// Full interactive run: prompt, read, print, trailing line break.
    ///
    /// Returns the year that was printed.
    #[instrument(skip_all)]
    pub fn run(&self) -> CalendarResult<Year> {
        let year = self.read_year()?;
        self.show(year)?;
        Ok(year)
    }

    /// Prompt (if enabled) and read one year from the source.
    pub fn read_year(&self) -> CalendarResult<Year> {
        if self.options.prompt {
            self.sink.write_text(PROMPT)?;
            self.sink.flush()?;
        }

        let year = self.source.read_year()?;
        debug!(%year, "Year read");
        Ok(year)
    }

    /// Print the calendar for `year` followed by the closing blank line.
    #[instrument(skip_all, fields(year = %year))]
    pub fn show(&self, year: Year) -> CalendarResult<()> {
        self.print_calendar(year)?;
        self.sink.write_text("\n")?;
        self.sink.flush()?;
        info!("Calendar printed");
        Ok(())
    }

    /// Write the year label and all twelve month grids.
    pub fn print_calendar(&self, year: Year) -> CalendarResult<YearCalendar> {
        let calendar = self.calendar(year)?;
        self.sink.write_text(&render_year(&calendar))?;
        Ok(calendar)
    }

    /// Lay out `year` without writing anything.
    pub fn calendar(&self, year: Year) -> CalendarResult<YearCalendar> {
        let calendar = YearCalendar::builder(year)
            .verify_offsets(self.options.verify_offsets)
            .build()?;
        Ok(calendar)
    }
}
