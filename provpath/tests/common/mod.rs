//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the provpath library.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use provpath::{Namespace, Provider};

/// Items listed by the fixture `FileSystem` provider.
#[allow(dead_code)]
pub const FS_ITEMS: &[&str] = &[
    "/work/logs/app.log",
    "/work/logs/db.log",
    "/work/logs/notes.txt",
    "/work/src/lib.rs",
    "/work/src/main.rs",
    "/other/readme.md",
];

/// Items listed by the fixture `Registry` provider.
#[allow(dead_code)]
pub const REGISTRY_ITEMS: &[&str] = &[
    "HKEY_LOCAL_MACHINE\\Software\\Alpha",
    "HKEY_LOCAL_MACHINE\\Software\\Beta",
    "HKEY_LOCAL_MACHINE\\System",
];

/// Builder for fixture namespaces with sensible defaults.
///
/// The default namespace has a listed `FileSystem` provider (drive `Root`
/// at `/`, located at `/work`) and a listed `Registry` provider (drive
/// `HKLM`, separator `\`).
#[allow(dead_code)]
pub struct NamespaceFixture {
    location: Option<(String, String)>,
    extra: Vec<Provider>,
}

#[allow(dead_code)]
impl NamespaceFixture {
    /// Creates a new fixture builder with default values.
    pub fn new() -> Self {
        Self {
            location: Some(("Root".to_string(), "/work".to_string())),
            extra: Vec::new(),
        }
    }

    /// Sets the current location.
    pub fn at(mut self, drive: &str, path: &str) -> Self {
        self.location = Some((drive.to_string(), path.to_string()));
        self
    }

    /// Leaves the current location at its default.
    pub fn without_location(mut self) -> Self {
        self.location = None;
        self
    }

    /// Registers an additional provider after the defaults.
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.extra.push(provider);
        self
    }

    /// Builds the namespace.
    pub fn build(self) -> Namespace {
        let mut providers = vec![
            Provider::listed("FileSystem")
                .with_drive("Root", "/")
                .with_items(FS_ITEMS.iter().copied()),
            Provider::listed("Registry")
                .with_separator('\\')
                .with_drive("HKLM", "HKEY_LOCAL_MACHINE\\")
                .with_items(REGISTRY_ITEMS.iter().copied()),
        ];
        providers.extend(self.extra);

        let ns = Namespace::new(providers).unwrap();
        match self.location {
            Some((drive, path)) => ns.with_location(&drive, &path).unwrap(),
            None => ns,
        }
    }
}

impl Default for NamespaceFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// The default fixture namespace.
#[allow(dead_code)]
pub fn namespace() -> Namespace {
    NamespaceFixture::new().build()
}

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

/// Writes `content` to `dir/filename` and returns the path.
#[allow(dead_code)]
pub fn write_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using this guard must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Sets `key` to `value` until the guard is dropped.
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Removes `key` until the guard is dropped.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}
