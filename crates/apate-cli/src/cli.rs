use clap::{Parser, Subcommand};
use dialoguer::Confirm;

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Reveal(reveal::RevealArgs),
    Inspect(inspect::InspectArgs),
}

/// Asks a yes/no question on the terminal, answering with enter means no
pub fn ask_for_confirmation(prompt: &str) -> CliResult<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .wait_for_newline(true)
        .interact()?)
}
