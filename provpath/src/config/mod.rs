//! Configuration system for provpath.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of provider and drive definitions
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PROVPATH_*`)
//! 3. An explicit file (via `ConfigBuilder::with_file`)
//! 4. Private project config (`provpath.local.yaml`)
//! 5. Project config (`provpath.yaml`)
//! 6. User config (`~/.provpath/config.yaml`)
//! 7. Built-in defaults
//!
//! # File Format
//!
//! ```yaml
//! default_kind: relative
//! providers:
//!   - name: FileSystem
//!     source: disk
//!     drives:
//!       - name: Root
//!         root: /
//!   - name: Registry
//!     separator: '\'
//!     drives:
//!       - name: HKLM
//!         root: 'HKEY_LOCAL_MACHINE\'
//!     items:
//!       - 'HKEY_LOCAL_MACHINE\Software'
//! location:
//!   drive: Root
//!   path: /work
//! ```
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use provpath::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use provpath::config::{Config, ConfigBuilder, LocationConfig};
//!
//! let custom = Config {
//!     location: Some(LocationConfig::parse("C:\\work").unwrap()),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.location.unwrap().drive, "C");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_data_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, DriveConfig, LocationConfig, ProviderConfig, SourceKind};
pub use validator::ConfigValidator;
