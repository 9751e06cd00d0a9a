use clap::Parser;

mod cli;
mod commands;
mod error;

use cli::{CliArgs, Commands};
pub use error::{CliError, CliResult};

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command {
        Commands::Reveal(args) => args.run(),
        Commands::Inspect(args) => args.run(),
    }
}
