//! Gregorian date arithmetic.
//!
//! Three pure functions, leaf-first: the leap-year predicate, the day count
//! of a month, and Sakamoto's day-of-week formula. None of them allocate or
//! fail; range checks happen when a [`Month`] is constructed.

use crate::domain::{
    error::DomainError,
    value_objects::{Month, Weekday, Year},
};

/// Per-month offsets for Sakamoto's algorithm, indexed by 0-based month.
const SAKAMOTO_OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Gregorian leap-year rule: divisible by 4 and not by 100, unless also
/// divisible by 400.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in `month` of `year`.
///
/// Parity rule instead of a table. February depends on the leap year; every
/// other month has 31 days when its 0-based index is even up to July and odd
/// from August on, 30 days otherwise.
pub const fn number_of_days(month: Month, year: i32) -> u32 {
    let index = month.index();
    if index == 1 {
        return if is_leap_year(year) { 29 } else { 28 };
    }

    // July and August are both long months; the parity flips between them.
    let long_parity = if index <= Month::July.index() { 0 } else { 1 };
    if index % 2 == long_parity { 31 } else { 30 }
}

/// Day of week of `day`/`month`/`year` (Sakamoto). Sunday is 0.
///
/// Divisions round toward negative infinity. For positive years this is the
/// usual truncating formula; for year 0 and earlier, truncation would count
/// the wrong years as leap and disagree with [`is_leap_year`].
pub fn find_day(day: u32, month: Month, year: i32) -> Weekday {
    let mut y = i64::from(year);
    if month.number() < 3 {
        y -= 1;
    }

    let raw = y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        + SAKAMOTO_OFFSETS[month.index()]
        + i64::from(day);
    Weekday::ALL[raw.rem_euclid(7) as usize]
}

/// Checked form of [`find_day`]: rejects a day outside the month.
pub fn weekday_of(day: u32, month: Month, year: Year) -> Result<Weekday, DomainError> {
    let days = month.days_in(year);
    if day == 0 || day > days {
        return Err(DomainError::InvalidDay {
            day,
            month: month.name(),
            days,
        });
    }
    Ok(find_day(day, month, year.value()))
}
