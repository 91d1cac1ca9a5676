//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, ProvidersCommand, ShowLocationCommand, TransformCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving and re-formatting provider paths.
#[derive(Parser)]
#[command(name = "provpath")]
#[command(version, about = "Resolve and re-format provider paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load this configuration file above discovered ones
    #[arg(long, value_name = "PATH", global = true, env = "PROVPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the current location
    #[arg(long, value_name = "DRIVE:PATH", global = true)]
    pub location: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve paths and print them in a canonical form
    Transform(TransformCommand),

    /// List providers, drives and current locations
    Providers(ProvidersCommand),

    /// Show the current location
    ShowLocation(ShowLocationCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
