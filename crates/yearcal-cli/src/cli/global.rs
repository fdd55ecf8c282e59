//! Flags accepted by every yearcal command.
//!
//! Flattened into [`super::Cli`] with `global = true`, so `yearcal -v show`
//! and `yearcal show 2024 -v` mean the same thing.

use clap::Args;
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log verbosity on stderr.
    ///
    /// `-v` INFO, `-vv` DEBUG, `-vvv` TRACE. Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity on stderr:
    (none)  - Warnings and errors
    -v      - Info level (year read, calendar printed)
    -vv     - Debug level (seed offsets, tokens)
    -vvv    - Trace level (every month laid out)"
    )]
    pub verbose: u8,

    /// Only log errors and drop status lines.
    ///
    /// The calendar itself is still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Also set by `NO_COLOR` (see <https://no-color.org>). Any value other
    /// than an empty one or a falsey word such as `0`/`false`/`no` counts.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML configuration file.
    ///
    /// Must exist when given. Without it the platform config directory is
    /// tried and a missing file is fine.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Output format.
    ///
    /// `json` replaces the text grid with structured data.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Coloured status lines.
    Human,
    /// No escape codes at all.
    Plain,
    /// Machine-readable JSON on stdout.
    Json,
}
