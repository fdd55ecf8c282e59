//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No calendar logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};
use yearcal_core::domain::{Month, Year};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "yearcal",
    bin_name = "yearcal",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Print a plain-text calendar for any year",
    long_about = "yearcal prints the twelve month grids of a Gregorian year. \
                  Without arguments it asks for the year on standard input.",
    after_help = "EXAMPLES:\n\
        \x20 yearcal                      # prompt for the year\n\
        \x20 echo 2024 | yearcal          # read the year from a pipe\n\
        \x20 yearcal show 1999\n\
        \x20 yearcal weekday 25 dec 2023\n\
        \x20 yearcal leap 1900\n\
        \x20 yearcal completions bash > /usr/share/bash-completion/completions/yearcal",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; `show` with a prompted year when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Split into global flags and the command to run, defaulting to an
    /// interactive `show`.
    pub fn into_parts(self) -> (GlobalArgs, Commands) {
        let command = self
            .command
            .unwrap_or(Commands::Show(ShowArgs {
                year: None,
                no_verify: false,
            }));
        (self.global, command)
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the calendar for a year.
    #[command(
        visible_alias = "s",
        about = "Print the calendar for a year",
        after_help = "EXAMPLES:\n\
            \x20 yearcal show 2024\n\
            \x20 yearcal show -- -44\n\
            \x20 yearcal --output-format json show 2000"
    )]
    Show(ShowArgs),

    /// Day of the week for a single date.
    #[command(
        visible_alias = "w",
        about = "Print the day of the week of a date",
        after_help = "EXAMPLES:\n\
            \x20 yearcal weekday 1 1 2000\n\
            \x20 yearcal weekday 25 december 2023"
    )]
    Weekday(WeekdayArgs),

    /// Leap-year check.
    #[command(
        about = "Tell whether a year is a leap year",
        after_help = "EXAMPLES:\n\
            \x20 yearcal leap 2000\n\
            \x20 yearcal leap 1900"
    )]
    Leap(LeapArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 yearcal completions bash > ~/.local/share/bash-completion/completions/yearcal\n\
            \x20 yearcal completions zsh  > ~/.zfunc/_yearcal\n\
            \x20 yearcal completions fish > ~/.config/fish/completions/yearcal.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 yearcal config get calendar.verify_offsets\n\
            \x20 yearcal config list\n\
            \x20 yearcal config path"
    )]
    Config(ConfigCommands),
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `yearcal show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Year to print.  Read from standard input after a prompt when omitted.
    #[arg(
        value_name = "YEAR",
        allow_negative_numbers = true,
        help = "Year to print (prompted for when omitted)"
    )]
    pub year: Option<Year>,

    /// Skip the per-month weekday cross-check.
    #[arg(long = "no-verify", help = "Do not cross-check month offsets")]
    pub no_verify: bool,
}

// ── weekday ───────────────────────────────────────────────────────────────────

/// Arguments for `yearcal weekday`.
#[derive(Debug, Args)]
pub struct WeekdayArgs {
    /// Day of the month.
    #[arg(value_name = "DAY")]
    pub day: u32,

    /// Month as 1-12, full name, or three-letter abbreviation.
    #[arg(value_name = "MONTH")]
    pub month: Month,

    /// Year.
    #[arg(value_name = "YEAR", allow_negative_numbers = true)]
    pub year: Year,
}

// ── leap ──────────────────────────────────────────────────────────────────────

/// Arguments for `yearcal leap`.
#[derive(Debug, Args)]
pub struct LeapArgs {
    /// Year to check.
    #[arg(value_name = "YEAR", allow_negative_numbers = true)]
    pub year: Year,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `yearcal completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `yearcal config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `calendar.verify_offsets`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path of the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
