//! Build script for provpath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("provpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve and re-format provider paths")
        .long_about(
            "Command-line tool for resolving path arguments and wildcard patterns against \
             providers and drives, and printing them in a canonical form",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load this configuration file above discovered ones")
                .value_name("PATH")
                .global(true)
                .env("PROVPATH_CONFIG"),
        )
        .arg(
            Arg::new("location")
                .long("location")
                .help("Override the current location")
                .value_name("DRIVE:PATH")
                .global(true),
        )
        .subcommands(vec![
            Command::new("transform")
                .about("Resolve paths and print them in a canonical form")
                .long_about(
                    "Resolve literal paths and wildcard patterns and print them as simple, \
                     provider-qualified, drive-qualified or relative paths",
                ),
            Command::new("providers")
                .about("List providers, drives and current locations")
                .long_about("Display every registered provider with its drives"),
            Command::new("show-location")
                .about("Show the current location")
                .long_about("Display the current location of a provider"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a provpath configuration file, or the merged configuration"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("provpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
