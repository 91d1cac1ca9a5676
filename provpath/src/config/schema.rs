//! Configuration schema definitions.
//!
//! This module defines the configuration structure for provpath: the
//! default output kind, the provider registry, and the starting location.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::PathKind;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use provpath::config::Config;
/// use provpath::path::PathKind;
///
/// let config: Config = serde_yaml::from_str("default_kind: relative\n").unwrap();
/// assert_eq!(config.default_kind, Some(PathKind::Relative));
/// assert!(config.providers.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Kind produced when a caller does not request one.
    pub default_kind: Option<PathKind>,

    /// Registered providers. Without any, the host filesystem is used.
    pub providers: Option<Vec<ProviderConfig>>,

    /// Starting location.
    pub location: Option<LocationConfig>,
}

/// Where a provider's wildcard matches come from.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// The `items` listed in configuration.
    #[default]
    Listed,
    /// The host filesystem.
    Disk,
}

/// A provider definition.
///
/// # Examples
///
/// ```
/// use provpath::config::ProviderConfig;
///
/// let yaml = r#"
/// name: Registry
/// separator: '\'
/// drives:
///   - name: HKLM
///     root: 'HKEY_LOCAL_MACHINE\'
/// items:
///   - 'HKEY_LOCAL_MACHINE\Software'
/// "#;
/// let provider: ProviderConfig = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(provider.separator, Some('\\'));
/// assert_eq!(provider.drives[0].name, "HKLM");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Provider name, used in `<name>::` qualifiers.
    pub name: String,

    /// Separator for resolved paths (`/` when omitted).
    pub separator: Option<char>,

    /// Item source (`listed` when omitted).
    pub source: Option<SourceKind>,

    /// Drives owned by this provider.
    #[serde(default)]
    pub drives: Vec<DriveConfig>,

    /// Existing items, for listed providers.
    #[serde(default)]
    pub items: Vec<String>,
}

/// A drive definition.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DriveConfig {
    /// Drive name, used in `<name>:` paths.
    pub name: String,

    /// Provider path of the drive root.
    pub root: String,
}

/// A location: a drive and a path below its root.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LocationConfig {
    /// Drive name.
    pub drive: String,

    /// Path below the drive root; the root itself when omitted.
    pub path: Option<String>,
}

impl LocationConfig {
    /// Parse `drive:path` (or a bare `drive`).
    ///
    /// # Errors
    ///
    /// Returns a validation error if the drive name is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use provpath::config::LocationConfig;
    ///
    /// let location = LocationConfig::parse("Root:/work").unwrap();
    /// assert_eq!(location.drive, "Root");
    /// assert_eq!(location.path.as_deref(), Some("/work"));
    ///
    /// let bare = LocationConfig::parse("HKLM").unwrap();
    /// assert!(bare.path.is_none());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let (drive, path) = match s.split_once(':') {
            Some((drive, path)) => (drive, Some(path)),
            None => (s, None),
        };

        if drive.trim().is_empty() {
            return Err(Error::Validation {
                field: "location".into(),
                message: format!("expected DRIVE:PATH, got '{s}'"),
            });
        }

        Ok(Self {
            drive: drive.trim().to_string(),
            path: path.filter(|p| !p.is_empty()).map(str::to_string),
        })
    }
}
