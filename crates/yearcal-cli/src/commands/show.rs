//! `yearcal show`: print the calendar for a year.
//!
//! Without a year argument the year is read from stdin after the prompt.
//! Text output is written byte-for-byte by the core service; JSON output
//! replaces the grid with the laid-out [`YearCalendar`].

use tracing::{debug, instrument};
use yearcal_adapters::{FixedYearSource, ReaderYearSource, WriterSink};
use yearcal_core::{
    application::{CalendarOptions, CalendarService, CalendarSink, YearSource},
    domain::YearCalendar,
};

use crate::{cli::ShowArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Run the `show` command.
#[instrument(skip_all, fields(year = ?args.year))]
pub fn execute(args: ShowArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let options = CalendarOptions {
        prompt: args.year.is_none(),
        verify_offsets: config.calendar.verify_offsets && !args.no_verify,
    };
    debug!(?options, json = output.is_json(), "Showing calendar");

    let source: Box<dyn YearSource> = match args.year {
        Some(year) => Box::new(FixedYearSource::new(year)),
        None => Box::new(ReaderYearSource::stdin()),
    };

    if output.is_json() {
        // The prompt must not end up in the JSON document.
        let sink: Box<dyn CalendarSink> = Box::new(WriterSink::stderr());
        let service = CalendarService::new(source, sink).with_options(options);
        let year = service.read_year()?;
        let calendar: YearCalendar = service.calendar(year)?;
        output.json(&calendar)?;
    } else {
        let sink: Box<dyn CalendarSink> = Box::new(WriterSink::stdout());
        let service = CalendarService::new(source, sink).with_options(options);
        service.run()?;
    }

    Ok(())
}
