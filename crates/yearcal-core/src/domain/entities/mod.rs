pub mod month_grid;
pub mod year_calendar;

pub use month_grid::MonthGrid;
pub use year_calendar::{YearCalendar, YearCalendarBuilder};
