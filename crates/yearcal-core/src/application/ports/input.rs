//! Driven input port - implemented by infrastructure.

use crate::domain::Year;
use crate::error::CalendarResult;

/// Port for obtaining the year to render.
///
/// Implemented by:
/// - `yearcal_adapters::source::ReaderYearSource` (stdin or any `BufRead`)
/// - `yearcal_adapters::source::FixedYearSource` (preset values, testing)
#[cfg_attr(test, mockall::automock)]
pub trait YearSource: Send + Sync {
    /// Read exactly one year.
    ///
    /// Returns `ApplicationError::MissingYear` at end of input and
    /// `DomainError::InvalidYear` when the token is not an integer.
    fn read_year(&self) -> CalendarResult<Year>;
}
