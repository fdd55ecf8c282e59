//! Domain value objects: Year, Month, Weekday.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO date arithmetic. Leap years, day counts and weekday math
//! live in `arithmetic.rs`. This file's only job is to define the types,
//! their string representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Year ─────────────────────────────────────────────────────────────────────

/// A proleptic Gregorian year.
///
/// No range is enforced: zero, negative and far-future years are all valid
/// and go through the same rules as 2024.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Year(i32);

impl Year {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    pub const fn is_leap(self) -> bool {
        crate::domain::arithmetic::is_leap_year(self.0)
    }
}

impl From<i32> for Year {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<i32>()
            .map(Self)
            .map_err(|e| DomainError::InvalidYear {
                input: trimmed.to_owned(),
                reason: e.to_string(),
            })
    }
}

// ── Month ────────────────────────────────────────────────────────────────────

/// A calendar month.
///
/// Internally months are 0-based (`index`), the way the grid loop walks
/// them; `number` gives the familiar 1-based value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// 0-based position (January = 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 1-based month number (January = 1).
    pub const fn number(self) -> u32 {
        self as u32 + 1
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    pub fn from_index(index: usize) -> Result<Self, DomainError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| DomainError::InvalidMonth {
                value: index.to_string(),
            })
    }

    pub fn from_number(number: u32) -> Result<Self, DomainError> {
        match number {
            1..=12 => Self::from_index(number as usize - 1),
            _ => Err(DomainError::InvalidMonth {
                value: number.to_string(),
            }),
        }
    }

    /// Number of days in this month of `year`.
    pub const fn days_in(self, year: Year) -> u32 {
        crate::domain::arithmetic::number_of_days(self, year.value())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(number) = s.parse::<u32>() {
            return Self::from_number(number);
        }

        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| {
                let name = m.name().to_ascii_lowercase();
                lower == name || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| DomainError::InvalidMonth { value: s.to_owned() })
    }
}

// ── Weekday ──────────────────────────────────────────────────────────────────

/// Day of the week, Sunday first.
///
/// The discriminant doubles as the grid column and as the number of blank
/// cells that precede day 1 when a month starts on this weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Three-letter column label.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Sunday => "Sun",
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
        }
    }

    pub fn from_index(index: u8) -> Result<Self, DomainError> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(DomainError::InvalidWeekday { index })
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_from_str_accepts_sign_and_whitespace() {
        assert_eq!("2024".parse::<Year>().unwrap(), Year::new(2024));
        assert_eq!(" +1999\n".parse::<Year>().unwrap(), Year::new(1999));
        assert_eq!("-44".parse::<Year>().unwrap(), Year::new(-44));
    }

    #[test]
    fn year_from_str_rejects_garbage() {
        let err = "twenty".parse::<Year>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidYear { ref input, .. } if input == "twenty"));
        assert!("".parse::<Year>().is_err());
        assert!("99999999999".parse::<Year>().is_err());
    }

    #[test]
    fn month_index_and_number_agree() {
        for (i, month) in Month::ALL.into_iter().enumerate() {
            assert_eq!(month.index(), i);
            assert_eq!(month.number() as usize, i + 1);
            assert_eq!(Month::from_index(i).unwrap(), month);
        }
    }

    #[test]
    fn month_out_of_range_errors() {
        assert!(Month::from_index(12).is_err());
        assert!(Month::from_number(0).is_err());
        assert!(Month::from_number(13).is_err());
    }

    #[test]
    fn month_from_str_accepts_numbers_names_and_abbreviations() {
        assert_eq!("2".parse::<Month>().unwrap(), Month::February);
        assert_eq!("september".parse::<Month>().unwrap(), Month::September);
        assert_eq!("Dec".parse::<Month>().unwrap(), Month::December);
        assert!("ju".parse::<Month>().is_err());
        assert!("13".parse::<Month>().is_err());
    }

    #[test]
    fn weekday_index_round_trips_through_from_index() {
        assert_eq!(Weekday::from_index(0).unwrap(), Weekday::Sunday);
        assert_eq!(Weekday::from_index(6).unwrap(), Weekday::Saturday);
        assert_eq!(
            Weekday::from_index(7),
            Err(DomainError::InvalidWeekday { index: 7 })
        );
    }

    #[test]
    fn weekday_abbreviations_are_three_letters() {
        assert!(Weekday::ALL.iter().all(|d| d.abbreviation().len() == 3));
    }
}
