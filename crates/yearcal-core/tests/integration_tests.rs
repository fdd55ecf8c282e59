//! Integration tests for yearcal-core, wired to the real adapters.

use std::io::Cursor;

use chrono::{Datelike, NaiveDate};
use yearcal_adapters::{FixedYearSource, MemorySink, ReaderYearSource};
use yearcal_core::{
    application::{ApplicationError, CalendarOptions, CalendarService, PROMPT},
    domain::DomainError,
    error::CalendarError,
    prelude::*,
};

const HEADER_ROW: &str = "Sun  Mon  Tue  Wed  Thu  Fri  Sat";

fn run_with_input(input: &str) -> (Result<Year, CalendarError>, String) {
    let sink = MemorySink::new();
    let source = ReaderYearSource::new(Cursor::new(input.as_bytes().to_vec()));
    let service = CalendarService::new(Box::new(source), Box::new(sink.clone()));
    let result = service.run();
    (result, sink.contents())
}

/// Lines of the grid rows for `month`, without header lines.
fn month_rows(output: &str, month: Month) -> Vec<String> {
    let banner = format!("---------- {} ----------", month.name());
    let lines: Vec<&str> = output.lines().collect();
    let start = lines
        .iter()
        .position(|l| *l == banner)
        .expect("banner present");
    assert_eq!(lines[start + 1], HEADER_ROW);
    lines[start + 2..]
        .iter()
        .take_while(|l| !l.is_empty())
        .map(|l| (*l).to_owned())
        .collect()
}

#[test]
fn full_run_starts_with_prompt_and_year_label() {
    let (result, out) = run_with_input("2023\n");
    assert_eq!(result.unwrap(), Year::new(2023));
    assert!(out.starts_with(&format!("{PROMPT}Year: 2023\n\n\n---------- January ----------\n")));
    assert!(out.ends_with(" 31  \n\n"));
}

#[test]
fn all_twelve_banners_appear_once_in_order() {
    let (_, out) = run_with_input("2024");
    let banners: Vec<&str> = out.lines().filter(|l| l.starts_with("----------")).collect();
    let expected: Vec<String> = Month::ALL
        .iter()
        .map(|m| format!("---------- {} ----------", m.name()))
        .collect();
    assert_eq!(banners, expected);
}

#[test]
fn january_2023_has_no_leading_blanks() {
    let (_, out) = run_with_input("2023");
    let rows = month_rows(&out, Month::January);
    assert_eq!(rows[0], "  1    2    3    4    5    6    7  ");
    assert_eq!(rows.last().unwrap(), " 29   30   31  ");
}

#[test]
fn february_2000_has_29_days_after_carried_offset() {
    let (_, out) = run_with_input("2000");
    let jan = month_rows(&out, Month::January);
    let feb = month_rows(&out, Month::February);

    // January 2000 starts on Saturday and ends on a two-cell row.
    let last_jan = jan.last().unwrap();
    let carried = last_jan.len() / 5;
    assert_eq!(carried, 2);

    assert!(feb[0].starts_with(&" ".repeat(5 * carried)));
    assert_eq!(feb[0], "            1    2    3    4    5  ");
    assert!(feb.last().unwrap().contains(" 29  "));
}

#[test]
fn exact_fit_month_adds_no_blank_line() {
    // February 2015 starts on Sunday and fills exactly four rows.
    let (_, out) = run_with_input("2015");
    let feb = month_rows(&out, Month::February);
    assert_eq!(feb.len(), 4);
    assert!(out.contains(" 28  \n\n---------- March ----------\n"));
    assert!(!out.contains(" 28  \n\n\n"));
}

#[test]
fn every_grid_row_has_at_most_seven_cells() {
    let (_, out) = run_with_input("1987");
    for month in Month::ALL {
        for row in month_rows(&out, month) {
            assert!(row.len() <= 35 && row.len() % 5 == 0, "{month}: {row:?}");
        }
    }
}

#[test]
fn same_year_renders_identically() {
    let (_, first) = run_with_input("1999\n");
    let (_, second) = run_with_input("1999\n");
    assert_eq!(first, second);
}

#[test]
fn malformed_input_prints_only_the_prompt() {
    let (result, out) = run_with_input("nineteen\n");
    assert!(matches!(
        result,
        Err(CalendarError::Domain(DomainError::InvalidYear { .. }))
    ));
    assert_eq!(out, PROMPT);
}

#[test]
fn end_of_input_is_missing_year() {
    let (result, _) = run_with_input("");
    assert_eq!(
        result,
        Err(CalendarError::Application(ApplicationError::MissingYear))
    );
}

#[test]
fn fixed_source_without_prompt_matches_prompted_output() {
    let sink = MemorySink::new();
    let service = CalendarService::new(
        Box::new(FixedYearSource::new(Year::new(2023))),
        Box::new(sink.clone()),
    )
    .with_options(CalendarOptions {
        prompt: false,
        verify_offsets: true,
    });
    service.run().unwrap();

    let (_, prompted) = run_with_input("2023");
    assert_eq!(format!("{PROMPT}{}", sink.contents()), prompted);
}

#[test]
fn negative_and_zero_years_render() {
    for input in ["0", "-1", "-400", "-2147483648", "2147483647"] {
        let (result, out) = run_with_input(input);
        assert!(result.is_ok(), "{input}");
        assert!(out.contains(&format!("Year: {input}\n")));
    }
}

// ── cross-checks against chrono ──────────────────────────────────────────────

#[test]
fn find_day_matches_chrono_for_every_day() {
    for year in [1600, 1900, 1999, 2000, 2023, 2024, 2100] {
        for month in Month::ALL {
            for day in 1..=number_of_days(month, year) {
                let date = NaiveDate::from_ymd_opt(year, month.number(), day).unwrap();
                let expected = date.weekday().num_days_from_sunday() as u8;
                assert_eq!(
                    find_day(day, month, year).index(),
                    expected,
                    "{year}-{}-{day}",
                    month.number()
                );
            }
        }
    }
}

#[test]
fn find_day_matches_chrono_for_proleptic_years() {
    for year in [-1000, -401, -100, -4, -1, 0, 1, 4] {
        for month in Month::ALL {
            let date = NaiveDate::from_ymd_opt(year, month.number(), 1).unwrap();
            assert_eq!(
                find_day(1, month, year).index(),
                date.weekday().num_days_from_sunday() as u8,
                "{year}-{}",
                month.number()
            );
        }
    }
}

#[test]
fn day_counts_match_chrono() {
    for year in [1900, 2000, 2023, 2024] {
        for month in Month::ALL {
            let first = NaiveDate::from_ymd_opt(year, month.number(), 1).unwrap();
            let next = if month == Month::December {
                NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
            } else {
                NaiveDate::from_ymd_opt(year, month.number() + 1, 1).unwrap()
            };
            assert_eq!(
                number_of_days(month, year) as i64,
                (next - first).num_days(),
                "{year}-{}",
                month.number()
            );
        }
    }
}

#[test]
fn calendar_serializes_to_json() {
    let calendar = YearCalendar::for_year(Year::new(2000)).unwrap();
    let json = serde_json::to_value(&calendar).unwrap();
    assert_eq!(json["year"], 2000);
    assert_eq!(json["months"][1]["month"], "February");
    assert_eq!(json["months"][1]["days"], 29);
    assert_eq!(json["months"][1]["leading_blanks"], 2);
}
