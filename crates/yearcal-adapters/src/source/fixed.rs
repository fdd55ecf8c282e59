//! Year source returning a preset value.

use yearcal_core::{
    application::{ApplicationError, ports::YearSource},
    domain::Year,
    error::CalendarResult,
};

/// Source for a year that is already known, e.g. given on the command line.
///
/// `FixedYearSource::empty()` behaves like input that ended immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedYearSource {
    year: Option<Year>,
}

impl FixedYearSource {
    pub fn new(year: Year) -> Self {
        Self { year: Some(year) }
    }

    pub fn empty() -> Self {
        Self { year: None }
    }
}

impl YearSource for FixedYearSource {
    fn read_year(&self) -> CalendarResult<Year> {
        self.year.ok_or_else(|| ApplicationError::MissingYear.into())
    }
}
