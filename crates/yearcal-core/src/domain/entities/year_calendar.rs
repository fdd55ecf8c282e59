use serde::Serialize;
use tracing::{debug, error, trace};

use crate::domain::{
    arithmetic::find_day,
    entities::month_grid::MonthGrid,
    error::DomainError,
    value_objects::{Month, Year},
};

/// Twelve month grids for one year, in calendar order.
///
/// Only January's start is computed from the weekday formula. Every later
/// month starts on the column where the previous one stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCalendar {
    year: Year,
    months: Vec<MonthGrid>,
}

impl YearCalendar {
    pub fn builder(year: Year) -> YearCalendarBuilder {
        YearCalendarBuilder::new(year)
    }

    /// Lay out `year` with offset verification enabled.
    pub fn for_year(year: Year) -> Result<Self, DomainError> {
        Self::builder(year).build()
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub fn months(&self) -> &[MonthGrid] {
        &self.months
    }

    pub fn month(&self, month: Month) -> &MonthGrid {
        &self.months[month.index()]
    }

    pub fn total_days(&self) -> u32 {
        self.months.iter().map(MonthGrid::days).sum()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`YearCalendar`].
#[derive(Debug, Clone)]
pub struct YearCalendarBuilder {
    year: Year,
    verify_offsets: bool,
}

impl YearCalendarBuilder {
    pub fn new(year: Year) -> Self {
        Self {
            year,
            verify_offsets: true,
        }
    }

    /// Recompute each month's first weekday and compare it with the carried
    /// column. On by default.
    pub fn verify_offsets(mut self, verify: bool) -> Self {
        self.verify_offsets = verify;
        self
    }

    pub fn build(self) -> Result<YearCalendar, DomainError> {
        let year = self.year;
        let mut carried = find_day(1, Month::January, year.value()).index();
        debug!(%year, offset = carried, "Seeded January offset");

        let mut months = Vec::with_capacity(Month::ALL.len());
        for month in Month::ALL {
            if self.verify_offsets {
                let computed = find_day(1, month, year.value()).index();
                if computed != carried {
                    error!(%month, %year, carried, computed, "Carried offset drifted");
                    return Err(DomainError::OffsetMismatch {
                        month: month.name(),
                        year: year.value(),
                        carried,
                        computed,
                    });
                }
            }

            let grid = MonthGrid::new(month, year, carried)?;
            trace!(
                %month,
                days = grid.days(),
                leading = carried,
                trailing = grid.trailing_column(),
                "Month laid out"
            );
            carried = grid.trailing_column();
            months.push(grid);
        }

        Ok(YearCalendar { year, months })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Weekday;

    #[test]
    fn months_are_in_calendar_order() {
        let cal = YearCalendar::for_year(Year::new(2023)).unwrap();
        let order: Vec<Month> = cal.months().iter().map(MonthGrid::month).collect();
        assert_eq!(order, Month::ALL.to_vec());
    }

    #[test]
    fn january_2023_has_no_leading_blanks() {
        let cal = YearCalendar::for_year(Year::new(2023)).unwrap();
        assert_eq!(cal.month(Month::January).leading_blanks(), 0);
    }

    #[test]
    fn february_2000_starts_where_january_stopped() {
        let cal = YearCalendar::for_year(Year::new(2000)).unwrap();
        let jan = cal.month(Month::January);
        let feb = cal.month(Month::February);
        assert_eq!(feb.leading_blanks(), jan.trailing_column());
        assert_eq!(feb.first_weekday(), Weekday::Tuesday);
        assert_eq!(feb.days(), 29);
    }

    #[test]
    fn carried_offsets_agree_with_formula_across_years() {
        for y in (-800..=3200).step_by(7) {
            assert!(
                YearCalendar::for_year(Year::new(y)).is_ok(),
                "offset drift in {y}"
            );
        }
    }

    #[test]
    fn total_days_match_leap_rule() {
        assert_eq!(YearCalendar::for_year(Year::new(1900)).unwrap().total_days(), 365);
        assert_eq!(YearCalendar::for_year(Year::new(2024)).unwrap().total_days(), 366);
    }

    #[test]
    fn unverified_build_produces_same_layout() {
        let year = Year::new(1987);
        let verified = YearCalendar::for_year(year).unwrap();
        let carried = YearCalendar::builder(year).verify_offsets(false).build().unwrap();
        assert_eq!(verified, carried);
    }
}
