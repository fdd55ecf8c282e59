//! Shell completion generation.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::CliResult;

const BIN_NAME: &str = "yearcal";

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    let mut stdout = io::stdout();

    match args.shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, BIN_NAME, &mut stdout),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, BIN_NAME, &mut stdout),
        Shell::Fish => generate(shells::Fish, &mut cmd, BIN_NAME, &mut stdout),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, BIN_NAME, &mut stdout),
        Shell::Elvish => generate(shells::Elvish, &mut cmd, BIN_NAME, &mut stdout),
    };

    Ok(())
}
