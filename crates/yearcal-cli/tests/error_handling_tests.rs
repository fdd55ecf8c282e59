//! Tests for error messages, suggestions and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PROMPT: &str = "Enter the year you wish to see the calendar of: ";

fn yearcal() -> Command {
    let mut cmd = Command::cargo_bin("yearcal").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_non_numeric_year_on_stdin() {
    yearcal()
        .write_stdin("abc\n")
        .assert()
        .code(2)
        .stdout(PROMPT)
        .stderr(predicate::str::contains("Invalid year 'abc'"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_year_out_of_range_on_stdin() {
    yearcal()
        .write_stdin("2147483648\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid year"));
}

#[test]
fn test_empty_stdin_is_missing_year() {
    yearcal()
        .write_stdin("")
        .assert()
        .code(2)
        .stdout(PROMPT)
        .stderr(predicate::str::contains("No year given"))
        .stderr(predicate::str::contains("yearcal show 2024"));
}

#[test]
fn test_non_numeric_year_argument() {
    yearcal()
        .args(["show", "soon"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("soon"));
}

#[test]
fn test_day_outside_month() {
    yearcal()
        .args(["weekday", "30", "2", "2023"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid day 30 for February"))
        .stderr(predicate::str::contains("February has days 1 to 28"));
}

#[test]
fn test_unknown_month_name() {
    yearcal()
        .args(["weekday", "1", "smarch", "2023"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("smarch"));
}

#[test]
fn test_missing_explicit_config_file() {
    let dir = TempDir::new().unwrap();
    yearcal()
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .args(["show", "2023"])
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("nope.toml"));
}

#[test]
fn test_bad_output_format_in_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("yearcal.toml");
    fs::write(&path, "[output]\nformat = \"fancy\"\n").unwrap();

    yearcal()
        .arg("-c")
        .arg(&path)
        .args(["leap", "2000"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown output.format 'fancy'"));
}

#[test]
fn test_unknown_config_key() {
    yearcal()
        .args(["config", "get", "calendar.colour"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"))
        .stderr(predicate::str::contains("calendar.verify_offsets"));
}

#[test]
fn test_verbose_error_drops_hint() {
    yearcal()
        .args(["-v", "weekday", "0", "1", "2000"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid day 0"))
        .stderr(predicate::str::contains("Re-run with -v").not());
}
