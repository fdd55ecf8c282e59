//! Output management and formatting.
//!
//! Command results go to stdout; status lines go to stderr so that piped
//! output stays clean.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    out: Term,
    status: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--output-format` wins over `output.format`; `auto` from either
    /// resolves to human on a terminal and plain otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> CliResult<Self> {
        let requested = match args.output_format {
            OutputFormat::Auto => parse_format(&config.output.format)?,
            explicit => explicit,
        };

        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Ok(Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            out: Term::stdout(),
            status: Term::stderr(),
        })
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Command result on stdout.  Written even in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.out.write_line(msg)
    }

    /// Pretty-printed JSON document on stdout.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        let rendered = serde_json::to_string_pretty(value)?;
        self.out.write_line(&rendered)?;
        Ok(())
    }

    /// Warning indicator on stderr: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.status.write_line(&line)
    }

    /// Bold cyan header line on stdout, dropped in quiet mode.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.out.write_line(&line)
    }

    /// Bold green rendering of `text` when colour is on.
    pub fn emphasis(&self, text: &str) -> String {
        if self.no_color {
            text.to_owned()
        } else {
            text.green().bold().to_string()
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` when results should be emitted as JSON.
    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

fn parse_format(value: &str) -> CliResult<OutputFormat> {
    OutputFormat::from_str(value, true).map_err(|_| CliError::ConfigError {
        message: format!("Unknown output.format '{value}': expected auto, human, plain or json"),
        source: None,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
