use serde::Serialize;

use crate::domain::{
    error::DomainError,
    value_objects::{Month, Weekday, Year},
};

/// Number of cells in one grid row.
pub const WEEK_LEN: u8 = 7;

/// Layout of a single month: how many days it has and how many blank
/// cells precede day 1.
///
/// This is pure data; turning it into text is `layout::render_month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    month: Month,
    days: u32,
    leading_blanks: u8,
}

impl MonthGrid {
    /// Lay out `month` of `year` starting after `leading_blanks` empty cells.
    pub fn new(month: Month, year: Year, leading_blanks: u8) -> Result<Self, DomainError> {
        if leading_blanks >= WEEK_LEN {
            return Err(DomainError::InvalidOffset {
                blanks: leading_blanks,
            });
        }

        Ok(Self {
            month,
            days: month.days_in(year),
            leading_blanks,
        })
    }

    pub const fn month(&self) -> Month {
        self.month
    }
    pub const fn days(&self) -> u32 {
        self.days
    }
    pub const fn leading_blanks(&self) -> u8 {
        self.leading_blanks
    }

    /// Weekday of day 1, read off the grid column.
    pub fn first_weekday(&self) -> Weekday {
        Weekday::ALL[usize::from(self.leading_blanks)]
    }

    /// Column the cursor sits on after the last day.
    ///
    /// Zero means the month filled its final row exactly. This is the
    /// leading blank count of the following month.
    pub const fn trailing_column(&self) -> u8 {
        ((self.leading_blanks as u32 + self.days) % WEEK_LEN as u32) as u8
    }

    /// Number of printed day rows.
    pub const fn rows(&self) -> u32 {
        (self.leading_blanks as u32 + self.days).div_ceil(WEEK_LEN as u32)
    }
}
