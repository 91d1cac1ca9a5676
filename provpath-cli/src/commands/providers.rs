//! Providers command implementation.
//!
//! This module implements the `providers` command, which lists the
//! registered providers with their drives and current locations.

use crate::error::CliError;
use crate::utils::{load_configuration, open_namespace, write_json, GlobalOptions, OutputFormat};
use clap::Args;
use provpath::namespace::ItemSource;
use provpath::{Namespace, Provider};
use serde::Serialize;
use std::io::{self, Write};

/// Column headers for human output.
const COLUMN_HEADERS: [&str; 4] = ["provider", "drive", "root", "location"];

/// List providers, drives and current locations.
#[derive(Args)]
pub struct ProvidersCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct ProviderView<'a> {
    name: &'a str,
    separator: char,
    source: &'static str,
    current: bool,
    location: Option<&'a str>,
    #[serde(skip)]
    location_drive: Option<&'a str>,
    drives: Vec<DriveView<'a>>,
}

#[derive(Debug, Serialize)]
struct DriveView<'a> {
    name: &'a str,
    root: &'a str,
}

impl<'a> ProviderView<'a> {
    fn new(provider: &'a Provider, current: bool) -> Self {
        Self {
            name: provider.name(),
            separator: provider.separator(),
            source: match provider.source() {
                ItemSource::Listed(_) => "listed",
                ItemSource::Disk => "disk",
            },
            current,
            location: provider.location_drive().map(|_| provider.current_location()),
            location_drive: provider.location_drive().map(|d| d.name()),
            drives: provider
                .drives()
                .iter()
                .map(|d| DriveView {
                    name: d.name(),
                    root: d.root(),
                })
                .collect(),
        }
    }
}

impl ProvidersCommand {
    /// Execute the providers command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let namespace = open_namespace(&config)?;

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        match self.format {
            OutputFormat::Human => write_table(&mut handle, &namespace),
            OutputFormat::Json => write_json(&mut handle, &views(&namespace)),
        }
    }
}

fn views(namespace: &Namespace) -> Vec<ProviderView<'_>> {
    let current = namespace.current_provider().map(Provider::name);
    namespace
        .providers()
        .iter()
        .map(|p| ProviderView::new(p, current == Some(p.name())))
        .collect()
}

/// One row per drive; driveless providers get a single row. The current
/// provider is marked with `*`.
fn write_table<W: Write>(out: &mut W, namespace: &Namespace) -> Result<(), CliError> {
    let header = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header}")?;

    for view in views(namespace) {
        let marker = if view.current { "*" } else { "" };
        if view.drives.is_empty() {
            writeln!(out, "{}{marker}\t-\t-\t-", view.name)?;
            continue;
        }
        for drive in &view.drives {
            let location = match view.location {
                Some(location) if view.location_drive == Some(drive.name) => location,
                _ => "-",
            };
            writeln!(
                out,
                "{}{marker}\t{}\t{}\t{location}",
                view.name, drive.name, drive.root
            )?;
        }
    }

    Ok(())
}
