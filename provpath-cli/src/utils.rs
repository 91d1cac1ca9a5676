//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, namespace construction, reading paths
//! from standard input and output formatting.

use crate::error::CliError;
use clap::ValueEnum;
use provpath::config::LocationConfig;
use provpath::{Config, ConfigBuilder, Namespace};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // verbose is consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Configuration file loaded above discovered files.
    pub config: Option<PathBuf>,

    /// Current location override, as `DRIVE:PATH`.
    pub location: Option<String>,
}

/// Output format shared by commands that print results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One item per line
    #[default]
    Human,
    /// JSON document
    Json,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. `--location` (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. Discovered configuration files
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        log::debug!("using configuration file {}", path.display());
        builder = builder.with_file(path);
    }

    if let Some(ref location) = global.location {
        let location = LocationConfig::parse(location)
            .map_err(|e| CliError::InvalidArguments(format!("--location: {e}")))?;
        builder = builder.with_config(Config {
            location: Some(location),
            ..Default::default()
        });
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build the namespace paths are resolved against.
///
/// A location that names a drive the namespace does not have is reported
/// as a configuration error.
pub fn open_namespace(config: &Config) -> Result<Namespace, CliError> {
    Namespace::from_config(config).map_err(|e| {
        if e.is_not_found() {
            CliError::Config(e.to_string())
        } else {
            CliError::from(e)
        }
    })
}

/// Read one path per line, skipping blank lines.
///
/// Trailing whitespace (including `\r`) is removed; leading whitespace is
/// kept since it may be part of a path.
pub fn read_paths(reader: impl BufRead) -> Result<Vec<String>, CliError> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let path = line.trim_end();
        if !path.is_empty() {
            paths.push(path.to_string());
        }
    }
    Ok(paths)
}

/// Write `value` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, value: &impl serde::Serialize) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    writeln!(out)?;
    Ok(())
}
