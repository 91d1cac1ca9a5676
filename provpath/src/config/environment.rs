//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PROVPATH_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, LocationConfig};
use crate::error::{Error, Result};
use crate::path::PathKind;
use std::env;

/// Overrides the default output kind.
pub const KIND_VAR: &str = "PROVPATH_KIND";

/// Overrides the starting location, as `DRIVE:PATH`.
pub const LOCATION_VAR: &str = "PROVPATH_LOCATION";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use provpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty variables are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid kind or location.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(kind) = Self::var(KIND_VAR) {
            config.default_kind = Some(Self::parse_kind(&kind)?);
        }

        if let Some(location) = Self::var(LOCATION_VAR) {
            config.location = Some(LocationConfig::parse(&location).map_err(|e| {
                Error::Validation {
                    field: LOCATION_VAR.into(),
                    message: e.to_string(),
                }
            })?);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.trim().is_empty())
    }

    fn parse_kind(s: &str) -> Result<PathKind> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: KIND_VAR.into(),
            message: format!("Invalid path kind: '{s}' (expected simple/provider/drive/relative)"),
        })
    }
}
