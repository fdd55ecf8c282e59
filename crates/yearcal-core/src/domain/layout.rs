//! Plain-text layout of month grids.
//!
//! Byte-exact output:
//!
//! ```text
//! Year: 2023
//!
//!
//! ---------- January ----------
//! Sun  Mon  Tue  Wed  Thu  Fri  Sat
//!   1    2    3    4    5    6    7
//! ...
//! ```
//!
//! Every cell is five characters wide: a blank cell is five spaces, a day is
//! right-aligned in three characters followed by two spaces. Rows keep their
//! trailing spaces.

use crate::domain::{
    entities::{MonthGrid, YearCalendar, month_grid::WEEK_LEN},
    value_objects::{Month, Weekday, Year},
};

const RULE: &str = "----------";
const BLANK_CELL: &str = "     ";
const DAY_WIDTH: usize = 3;
const DAY_GAP: &str = "  ";
const HEADER_WIDTH: usize = 5;

/// `Year: <yy>` followed by a blank line.
pub fn year_label(year: Year) -> String {
    format!("Year: {year}\n\n")
}

/// `Sun  Mon  Tue  Wed  Thu  Fri  Sat`, without the line break.
pub fn weekday_row() -> String {
    let mut row = String::from(Weekday::Sunday.abbreviation());
    for day in &Weekday::ALL[1..] {
        row.push_str(&format!("{:>HEADER_WIDTH$}", day.abbreviation()));
    }
    row
}

/// Banner and weekday row for `month`, preceded by a blank line.
///
/// The rule is ten dashes on each side whatever the length of the name.
pub fn month_header(month: Month) -> String {
    format!("\n{RULE} {} {RULE}\n{}\n", month.name(), weekday_row())
}

/// Header plus day grid for one month.
pub fn render_month(grid: &MonthGrid) -> String {
    let mut out = month_header(grid.month());

    let mut column = 0;
    for _ in 0..grid.leading_blanks() {
        out.push_str(BLANK_CELL);
        column += 1;
    }

    for day in 1..=grid.days() {
        out.push_str(&format!("{day:>DAY_WIDTH$}{DAY_GAP}"));
        column += 1;
        if column == WEEK_LEN {
            column = 0;
            out.push('\n');
        }
    }

    // A month that fills its last row exactly already ended with a break.
    if column != 0 {
        out.push('\n');
    }

    out
}

/// Year label followed by all twelve months.
pub fn render_year(calendar: &YearCalendar) -> String {
    let mut out = year_label(calendar.year());
    for grid in calendar.months() {
        out.push_str(&render_month(grid));
    }
    out
}
