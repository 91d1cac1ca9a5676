//! Transform command implementation.
//!
//! This module implements the `transform` command, which resolves path
//! arguments (literals or wildcard patterns) and prints them in the
//! requested kind.

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_namespace, read_paths, write_json, GlobalOptions, OutputFormat,
};
use clap::Args;
use provpath::{PathInput, PathItem, PathKind, PathTransformer};
use std::io::{self, Write};

/// Resolve paths and print them in a canonical form.
#[derive(Args)]
pub struct TransformCommand {
    /// Paths or wildcard patterns to transform
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Form of the printed paths (default: configured kind, then simple)
    #[arg(long, short, value_enum, ignore_case = true)]
    pub kind: Option<PathKind>,

    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: OutputFormat,

    /// Also read paths from standard input, one per line
    #[arg(long)]
    pub stdin: bool,
}

impl TransformCommand {
    /// Execute the transform command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration and build the namespace
        let config = load_configuration(global)?;
        let namespace = open_namespace(&config)?;
        let kind = self.kind.or(config.default_kind).unwrap_or_default();

        // 2. Collect raw paths, arguments first
        let mut paths = self.paths;
        if self.stdin {
            paths.extend(read_paths(io::stdin().lock())?);
        }
        let input = (!paths.is_empty())
            .then(|| paths.into_iter().map(PathItem::from).collect::<PathInput>());

        // 3. Transform
        let results = PathTransformer::new(kind).transform(input.as_ref(), &namespace)?;
        log::debug!("{} result(s) as {kind}", results.len());

        // 4. Output
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        match self.format {
            OutputFormat::Human => {
                for result in &results {
                    writeln!(handle, "{result}")?;
                }
            }
            OutputFormat::Json => write_json(&mut handle, &results)?,
        }

        Ok(())
    }
}
