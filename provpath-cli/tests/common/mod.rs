//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers with an isolated environment
//! - A fixture configuration with listed providers

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Project configuration written by [`TestEnv::new`].
///
/// Two listed providers, located at `Root:/work`.
#[allow(dead_code)]
pub const FIXTURE_CONFIG: &str = r"
providers:
  - name: FileSystem
    drives:
      - name: Root
        root: /
    items:
      - /work/logs/app.log
      - /work/logs/db.log
      - /work/src/main.rs
  - name: Registry
    separator: '\'
    drives:
      - name: HKLM
        root: 'HKEY_LOCAL_MACHINE\'
    items:
      - 'HKEY_LOCAL_MACHINE\Software\Alpha'
      - 'HKEY_LOCAL_MACHINE\Software\Beta'
location:
  drive: Root
  path: /work
";

/// Environment variables the CLI reads, cleared for every command.
const PROVPATH_VARS: [&str; 4] = [
    "PROVPATH_CONFIG",
    "PROVPATH_KIND",
    "PROVPATH_LOCATION",
    "PROVPATH_LOG_MODE",
];

/// Test environment with an isolated project directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary project directory holding `provpath.yaml`
/// - A separate home directory so no user configuration is picked up
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the project directory
    pub project: PathBuf,
    /// Path to the isolated home directory
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with the fixture configuration.
    pub fn new() -> Self {
        let env = Self::empty();
        env.write_file("provpath.yaml", FIXTURE_CONFIG);
        env
    }

    /// Create a test environment without any configuration file.
    pub fn empty() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let project = temp_dir.path().join("project");
        let home = temp_dir.path().join("home");
        std::fs::create_dir_all(&project).expect("Failed to create project dir");
        std::fs::create_dir_all(&home).expect("Failed to create home dir");

        Self {
            temp_dir,
            project,
            home,
        }
    }

    /// Get a command builder running in the project directory.
    ///
    /// `PROVPATH_*` variables are cleared and `HOME` points at the isolated
    /// home directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("provpath").expect("Failed to find provpath binary");
        cmd.current_dir(&self.project).env("HOME", &self.home);
        for var in PROVPATH_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Run `provpath transform` with the given arguments.
    pub fn transform(&self, args: &[&str]) -> Command {
        let mut cmd = self.command();
        cmd.arg("transform").args(args);
        cmd
    }

    /// Get the project path.
    pub fn path(&self) -> &Path {
        &self.project
    }

    /// Write a file relative to the project directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.project.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Run a command and return its stdout lines.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn stdout_lines(mut cmd: Command) -> Vec<String> {
        let output = cmd.output().expect("Failed to run command");
        assert!(
            output.status.success(),
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .lines()
            .map(str::to_string)
            .collect()
    }
}
