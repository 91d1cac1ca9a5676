//! Main entry point for the provpath CLI.
//!
//! This is the command-line interface for the provpath library.
//! It provides commands for working with provider paths:
//! - `transform`: Resolve paths and print them in a canonical form
//! - `providers`: List providers, drives and current locations
//! - `show-location`: Show the current location
//! - `validate`: Validate configuration
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Install logging based on verbosity
    provpath::init_logger(cli.verbose, cli.quiet).install();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        location: cli.location,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Transform(cmd) => cmd.execute(&global),
        cli::Command::Providers(cmd) => cmd.execute(&global),
        cli::Command::ShowLocation(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
