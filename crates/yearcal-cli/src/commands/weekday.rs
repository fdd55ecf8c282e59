//! `yearcal weekday`: day of the week for one date.

use serde::Serialize;
use tracing::{debug, instrument};
use yearcal_core::{
    domain::{Month, Weekday, Year, weekday_of},
    error::CalendarError,
};

use crate::{cli::WeekdayArgs, error::CliResult, output::OutputManager};

/// JSON shape of a weekday answer.
#[derive(Debug, Serialize)]
struct WeekdayReport {
    day: u32,
    month: u32,
    year: Year,
    weekday: &'static str,
    index: u8,
}

impl WeekdayReport {
    fn new(day: u32, month: Month, year: Year, weekday: Weekday) -> Self {
        Self {
            day,
            month: month.number(),
            year,
            weekday: weekday.name(),
            index: weekday.index(),
        }
    }
}

/// Run the `weekday` command.
#[instrument(skip_all, fields(day = args.day, month = %args.month, year = %args.year))]
pub fn execute(args: WeekdayArgs, output: &OutputManager) -> CliResult<()> {
    let weekday = weekday_of(args.day, args.month, args.year).map_err(CalendarError::from)?;
    debug!(weekday = weekday.name(), "Weekday computed");

    if output.is_json() {
        output.json(&WeekdayReport::new(args.day, args.month, args.year, weekday))?;
    } else {
        output.print(&output.emphasis(weekday.name()))?;
    }
    Ok(())
}
