//! Core types for path handling.
//!
//! This module defines the output kinds a transform can produce and the
//! handles the resolution context tags resolved provider paths with.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Canonical representation a transform produces.
///
/// A kind is fixed per declared parameter and never changes while a value
/// is being resolved.
///
/// # Examples
///
/// ```
/// use provpath::path::PathKind;
///
/// let kind: PathKind = "drive".parse().unwrap();
/// assert_eq!(kind, PathKind::DriveQualified);
/// assert_eq!(kind.to_string(), "drive");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum PathKind {
    /// Plain provider path with any provider qualifier removed.
    #[default]
    #[serde(rename = "simple")]
    #[value(name = "simple")]
    Simple,

    /// Provider path prefixed with `<provider>::`.
    #[serde(rename = "provider")]
    #[value(name = "provider")]
    ProviderQualified,

    /// Path anchored to a drive, as in `<drive>:\rest`.
    #[serde(rename = "drive")]
    #[value(name = "drive")]
    DriveQualified,

    /// Path relative to the provider's current location.
    #[serde(rename = "relative")]
    #[value(name = "relative")]
    Relative,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::ProviderQualified => write!(f, "provider"),
            Self::DriveQualified => write!(f, "drive"),
            Self::Relative => write!(f, "relative"),
        }
    }
}

impl FromStr for PathKind {
    type Err = Error;

    /// Parses a kind name (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "provider" => Ok(Self::ProviderQualified),
            "drive" => Ok(Self::DriveQualified),
            "relative" => Ok(Self::Relative),
            _ => Err(Error::Validation {
                field: "kind".into(),
                message: format!(
                    "invalid path kind '{s}' (expected simple/provider/drive/relative)"
                ),
            }),
        }
    }
}

/// Identifies the namespace a path belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderHandle {
    name: String,
}

impl ProviderHandle {
    /// Create a handle for the named provider.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Get the provider name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the qualification prefix for this provider.
    ///
    /// # Examples
    ///
    /// ```
    /// use provpath::path::ProviderHandle;
    ///
    /// let provider = ProviderHandle::new("FileSystem");
    /// assert_eq!(provider.qualifier(), "FileSystem::");
    /// ```
    #[must_use]
    pub fn qualifier(&self) -> String {
        format!("{}::", self.name)
    }
}

impl fmt::Display for ProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A named root location within a provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DriveHandle {
    name: String,
    root: String,
}

impl DriveHandle {
    /// Create a drive handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use provpath::path::DriveHandle;
    ///
    /// let drive = DriveHandle::new("HKLM", "HKEY_LOCAL_MACHINE\\");
    /// assert_eq!(drive.name(), "HKLM");
    /// assert_eq!(drive.root(), "HKEY_LOCAL_MACHINE\\");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, root: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    /// Get the drive name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the provider path of the drive's root.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }
}

/// A provider path produced by the resolution step.
///
/// Carries the provider that resolved it and, for literal resolutions on a
/// drive, the drive it was resolved against.
///
/// # Examples
///
/// ```
/// use provpath::path::{DriveHandle, ProviderHandle, ResolvedPath};
///
/// let resolved = ResolvedPath::new("/work/a.txt", ProviderHandle::new("FileSystem"))
///     .with_drive(DriveHandle::new("Root", "/"));
/// assert_eq!(resolved.provider_path(), "/work/a.txt");
/// assert_eq!(resolved.drive().unwrap().name(), "Root");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath {
    provider_path: String,
    provider: ProviderHandle,
    drive: Option<DriveHandle>,
}

impl ResolvedPath {
    /// Create a resolved path without a drive.
    #[must_use]
    pub fn new(provider_path: impl Into<String>, provider: ProviderHandle) -> Self {
        Self {
            provider_path: provider_path.into(),
            provider,
            drive: None,
        }
    }

    /// Attach the drive the path was resolved against.
    #[must_use]
    pub fn with_drive(mut self, drive: DriveHandle) -> Self {
        self.drive = Some(drive);
        self
    }

    /// Get the provider path.
    #[must_use]
    pub fn provider_path(&self) -> &str {
        &self.provider_path
    }

    /// Get the resolving provider.
    #[must_use]
    pub fn provider(&self) -> &ProviderHandle {
        &self.provider
    }

    /// Get the drive captured during resolution, if any.
    #[must_use]
    pub fn drive(&self) -> Option<&DriveHandle> {
        self.drive.as_ref()
    }
}
