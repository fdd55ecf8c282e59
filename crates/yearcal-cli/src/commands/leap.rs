//! `yearcal leap`: leap-year check.

use serde::Serialize;
use tracing::instrument;
use yearcal_core::domain::{Month, Year};

use crate::{cli::LeapArgs, error::CliResult, output::OutputManager};

#[derive(Debug, Serialize)]
struct LeapReport {
    year: Year,
    leap: bool,
    february_days: u32,
}

impl LeapReport {
    fn new(year: Year) -> Self {
        Self {
            year,
            leap: year.is_leap(),
            february_days: Month::February.days_in(year),
        }
    }

    fn verdict(&self) -> String {
        if self.leap {
            format!("{} is a leap year", self.year)
        } else {
            format!("{} is not a leap year", self.year)
        }
    }
}

/// Run the `leap` command.
#[instrument(skip_all, fields(year = %args.year))]
pub fn execute(args: LeapArgs, output: &OutputManager) -> CliResult<()> {
    let report = LeapReport::new(args.year);

    if output.is_json() {
        output.json(&report)?;
    } else {
        output.print(&output.emphasis(&report.verdict()))?;
        output.print(&format!("February has {} days", report.february_days))?;
    }
    Ok(())
}
