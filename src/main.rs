use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            path,
            exclude,
            format,
            output,
            quiet,
            verbose,
            exit_zero,
        } => commands::check::handle_check(path, exclude, format, output, quiet, verbose, exit_zero),
        Commands::Init { preset } => commands::init::handle_init(preset),
        Commands::Config { show, validate } => commands::config::handle_config(show, validate),
    }
}
