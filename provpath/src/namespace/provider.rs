//! Providers: named path namespaces with drives and an item source.

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::path::normalize::{eq_ignore_case, is_separator};
use crate::path::{DriveHandle, ProviderHandle};

/// Where a provider finds the items a wildcard can match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSource {
    /// A fixed set of existing provider paths.
    Listed(BTreeSet<String>),
    /// The host filesystem.
    Disk,
}

/// A named namespace that owns a path syntax.
///
/// # Examples
///
/// ```
/// use provpath::namespace::Provider;
///
/// let registry = Provider::listed("Registry")
///     .with_separator('\\')
///     .with_drive("HKLM", "HKEY_LOCAL_MACHINE\\")
///     .with_items(["HKEY_LOCAL_MACHINE\\Software"]);
/// assert_eq!(registry.name(), "Registry");
/// assert_eq!(registry.drives().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    handle: ProviderHandle,
    separator: char,
    source: ItemSource,
    drives: Vec<DriveHandle>,
    location: Option<Location>,
}

/// A current location: a drive of the provider and a path below its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Location {
    pub(crate) drive: usize,
    pub(crate) path: String,
}

impl Provider {
    /// Create a provider with a fixed item set and `/` separators.
    #[must_use]
    pub fn listed(name: impl Into<String>) -> Self {
        Self::new(name, ItemSource::Listed(BTreeSet::new()), '/')
    }

    /// Create a provider backed by the host filesystem.
    #[must_use]
    pub fn disk(name: impl Into<String>) -> Self {
        Self::new(name, ItemSource::Disk, std::path::MAIN_SEPARATOR)
    }

    fn new(name: impl Into<String>, source: ItemSource, separator: char) -> Self {
        Self {
            handle: ProviderHandle::new(name),
            separator,
            source,
            drives: Vec::new(),
            location: None,
        }
    }

    /// Set the separator used when rendering resolved paths.
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Add a drive rooted at `root`.
    #[must_use]
    pub fn with_drive(mut self, name: impl Into<String>, root: impl Into<String>) -> Self {
        self.drives.push(DriveHandle::new(name, root));
        self
    }

    /// Add existing items. Ignored for disk-backed providers.
    #[must_use]
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let ItemSource::Listed(set) = &mut self.source {
            set.extend(items.into_iter().map(Into::into));
        }
        self
    }

    /// The provider name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.handle.name()
    }

    /// The provider handle.
    #[must_use]
    pub fn handle(&self) -> &ProviderHandle {
        &self.handle
    }

    /// The separator used when rendering resolved paths.
    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// The item source.
    #[must_use]
    pub fn source(&self) -> &ItemSource {
        &self.source
    }

    /// The provider's drives.
    #[must_use]
    pub fn drives(&self) -> &[DriveHandle] {
        &self.drives
    }

    /// The drive the current location is on, if a location is set.
    #[must_use]
    pub fn location_drive(&self) -> Option<&DriveHandle> {
        self.location
            .as_ref()
            .and_then(|loc| self.drives.get(loc.drive))
    }

    /// The current location.
    ///
    /// Falls back to the first drive's root, or the empty string for a
    /// driveless provider.
    #[must_use]
    pub fn current_location(&self) -> &str {
        match (&self.location, self.drives.first()) {
            (Some(loc), _) => &loc.path,
            (None, Some(drive)) => drive.root(),
            (None, None) => "",
        }
    }

    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = Some(location);
    }

    pub(crate) fn drive_index(&self, name: &str) -> Option<usize> {
        self.drives
            .iter()
            .position(|d| eq_ignore_case(d.name(), name))
    }

    pub(crate) fn validate(&self) -> Result<()> {
        check_name("provider", self.name())?;
        check_separator(self.separator)?;
        for drive in &self.drives {
            check_name("drive", drive.name())?;
            if drive.root().is_empty() {
                return Err(Error::Validation {
                    field: format!("drive '{}'", drive.name()),
                    message: "drive root cannot be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Check a provider or drive name.
///
/// Names must be non-empty and must not contain `:` or a separator, since
/// either would make qualified and drive paths ambiguous.
pub(crate) fn check_name(field: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            field: field.to_string(),
            message: format!("{field} name cannot be empty"),
        });
    }
    if name.contains(':') || name.contains(is_separator) {
        return Err(Error::Validation {
            field: field.to_string(),
            message: format!("{field} name '{name}' cannot contain ':', '/' or '\\'"),
        });
    }
    Ok(())
}

/// Check a provider separator.
pub(crate) fn check_separator(separator: char) -> Result<()> {
    if is_separator(separator) {
        Ok(())
    } else {
        Err(Error::Validation {
            field: "separator".to_string(),
            message: format!("separator must be '/' or '\\', got '{separator}'"),
        })
    }
}
