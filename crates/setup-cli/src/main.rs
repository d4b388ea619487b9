//! setup-php CLI
//!
//! Writes the generated setup script to stdout. Diagnostics and errors go
//! to stderr.

mod cli;
mod commands;
mod error;
mod logging;

use std::io::Write;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let output = execute_command(cli.command, cli.config.as_deref())?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn execute_command(cmd: Commands, config: Option<&std::path::Path>) -> Result<String> {
    match cmd {
        Commands::Extensions { target, list } => {
            Ok(commands::run_extensions(config, &target, &list)?.render())
        }
        Commands::Coverage { target, driver } => {
            Ok(commands::run_coverage(config, &target, &driver)?.render())
        }
        Commands::Script {
            target,
            extensions,
            coverage,
        } => Ok(commands::run_script(
            config,
            &target,
            extensions.as_deref(),
            coverage.as_deref(),
        )?
        .render()),
        Commands::ListExtensions { os } => commands::run_list_extensions(config, os.as_deref()),
    }
}
