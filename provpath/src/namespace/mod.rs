//! A concrete, in-process resolution context.
//!
//! A [`Namespace`] is a registry of [`Provider`]s, each owning drives and a
//! source of existing items, plus a current location. It implements
//! [`PathResolutionContext`] with the following path syntax:
//!
//! - `Provider::rest` names a provider explicitly
//! - `drive:rest` is anchored at a registered drive's root
//! - a path starting with a separator is anchored at the current drive's root
//! - anything else is relative to the current location
//!
//! A namespace is immutable once built; changing the location produces a
//! new namespace. It is therefore safe to share between threads.
//!
//! # Examples
//!
//! ```
//! use provpath::namespace::{Namespace, Provider};
//! use provpath::path::PathResolutionContext;
//!
//! let ns = Namespace::new(vec![
//!     Provider::listed("Registry")
//!         .with_separator('\\')
//!         .with_drive("HKLM", "HKEY_LOCAL_MACHINE\\"),
//! ])
//! .unwrap();
//!
//! let resolved = ns.resolve_literal("HKLM:\\Software\\Vendor").unwrap();
//! assert_eq!(resolved.provider_path(), "HKEY_LOCAL_MACHINE\\Software\\Vendor");
//! assert_eq!(resolved.drive().unwrap().name(), "HKLM");
//! ```

mod provider;
mod wildcard;

use std::collections::HashSet;
use std::path::{Component, Prefix, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

use crate::config::{Config, ProviderConfig, SourceKind};
use crate::error::{Error, Result};
use crate::path::normalize::{
    eq_ignore_case, expand_tilde, is_separator, join, join_within, relative_walk,
    resolve_components,
};
use crate::path::{DriveHandle, PathResolutionContext, ProviderHandle, ResolvedPath};

pub(crate) use provider::{check_name, check_separator};
pub use provider::{ItemSource, Provider};
pub use wildcard::contains_wildcard;

use provider::Location;

/// A registry of providers with a current location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    providers: Vec<Provider>,
    current: Option<usize>,
}

impl Namespace {
    /// Build a namespace from providers.
    ///
    /// The first provider with a drive becomes current, located at that
    /// drive's root.
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty or malformed names, a bad
    /// separator, an empty drive root, or a provider or drive name used
    /// twice (compared case-insensitively).
    pub fn new(providers: Vec<Provider>) -> Result<Self> {
        let mut provider_names = HashSet::new();
        let mut drive_names = HashSet::new();

        for provider in &providers {
            provider.validate()?;
            if !provider_names.insert(provider.name().to_lowercase()) {
                return Err(Error::Validation {
                    field: "provider".to_string(),
                    message: format!("duplicate provider name '{}'", provider.name()),
                });
            }
            for drive in provider.drives() {
                if !drive_names.insert(drive.name().to_lowercase()) {
                    return Err(Error::Validation {
                        field: "drive".to_string(),
                        message: format!("duplicate drive name '{}'", drive.name()),
                    });
                }
            }
        }

        let current = providers.iter().position(|p| !p.drives().is_empty());
        Ok(Self { providers, current })
    }

    /// Build a namespace from configuration.
    ///
    /// Without configured providers, a disk-backed `FileSystem` provider is
    /// installed with one drive at the host root and the process working
    /// directory as its location.
    ///
    /// # Errors
    ///
    /// Returns an error if the providers are invalid, the configured
    /// location names an unknown drive, or the working directory cannot be
    /// read.
    pub fn from_config(config: &Config) -> Result<Self> {
        let configured = config.providers.as_deref().unwrap_or_default();

        let namespace = if configured.is_empty() {
            Self::host()?
        } else {
            Self::new(configured.iter().map(Provider::from).collect())?
        };

        match &config.location {
            Some(location) => {
                namespace.with_location(&location.drive, location.path.as_deref().unwrap_or(""))
            }
            None => Ok(namespace),
        }
    }

    /// A namespace over the host filesystem, located at the working directory.
    fn host() -> Result<Self> {
        let cwd = std::env::current_dir()?;

        let mut drive = None;
        let mut below_root = Vec::new();
        for component in cwd.components() {
            match component {
                Component::Prefix(prefix) => {
                    drive = Some(match prefix.kind() {
                        Prefix::Disk(letter) | Prefix::VerbatimDisk(letter) => {
                            let name = char::from(letter).to_string();
                            let root = format!("{name}:{MAIN_SEPARATOR}");
                            (name, root)
                        }
                        _ => (
                            "Root".to_string(),
                            format!("{}{MAIN_SEPARATOR}", prefix.as_os_str().to_string_lossy()),
                        ),
                    });
                }
                Component::Normal(part) => below_root.push(part.to_string_lossy().into_owned()),
                _ => {}
            }
        }
        let (name, root) =
            drive.unwrap_or_else(|| ("Root".to_string(), MAIN_SEPARATOR_STR.to_string()));
        log::debug!("using host filesystem drive '{name}' rooted at '{root}'");

        Self::new(vec![Provider::disk("FileSystem").with_drive(&name, root)])?
            .with_location(&name, &below_root.join(MAIN_SEPARATOR_STR))
    }

    /// Return a namespace whose current location is `path` on `drive`.
    ///
    /// `path` is taken relative to the drive root; `.` and `..` are
    /// resolved. The drive's provider becomes the current provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the drive is unknown or `path` escapes its root.
    ///
    /// # Examples
    ///
    /// ```
    /// use provpath::namespace::{Namespace, Provider};
    ///
    /// let ns = Namespace::new(vec![Provider::listed("FileSystem").with_drive("Root", "/")])
    ///     .unwrap()
    ///     .with_location("root", "work/./sub/..")
    ///     .unwrap();
    /// assert_eq!(ns.current_provider().unwrap().current_location(), "/work");
    /// ```
    pub fn with_location(mut self, drive: &str, path: &str) -> Result<Self> {
        let (provider_index, drive_index) = self.find_drive(drive).ok_or_else(|| {
            Error::UnknownDrive {
                name: drive.to_string(),
            }
        })?;

        let provider = &mut self.providers[provider_index];
        let root = provider.drives()[drive_index].root().to_string();
        let path = join_within(&root, path, provider.separator())?;
        log::trace!("current location of '{}' is now '{path}'", provider.name());

        provider.set_location(Location {
            drive: drive_index,
            path,
        });
        self.current = Some(provider_index);
        Ok(self)
    }

    /// All registered providers in registration order.
    #[must_use]
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Look up a provider by name (case-insensitive).
    #[must_use]
    pub fn provider(&self, name: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| eq_ignore_case(p.name(), name))
    }

    /// The provider relative paths resolve against.
    #[must_use]
    pub fn current_provider(&self) -> Option<&Provider> {
        self.current.and_then(|i| self.providers.get(i))
    }

    fn find_drive(&self, name: &str) -> Option<(usize, usize)> {
        self.providers
            .iter()
            .enumerate()
            .find_map(|(p, provider)| provider.drive_index(name).map(|d| (p, d)))
    }

    fn drive(&self, name: &str) -> Option<(&Provider, &DriveHandle)> {
        let (p, d) = self.find_drive(name)?;
        let provider = &self.providers[p];
        Some((provider, &provider.drives()[d]))
    }

    fn provider_for(&self, handle: &ProviderHandle) -> Result<&Provider> {
        self.provider(handle.name())
            .ok_or_else(|| Error::UnknownProvider {
                name: handle.name().to_string(),
            })
    }

    fn resolve_unqualified(&self, path: &str) -> Result<ResolvedPath> {
        if let Some((name, rest)) = split_drive(path) {
            let (provider, drive) = self.drive(name).ok_or_else(|| Error::UnknownDrive {
                name: name.to_string(),
            })?;
            let resolved = join_within(drive.root(), rest, provider.separator())?;
            return Ok(ResolvedPath::new(resolved, provider.handle().clone())
                .with_drive(drive.clone()));
        }

        let provider = self.current_provider().ok_or_else(|| Error::LiteralResolution {
            path: path.to_string(),
            reason: "no current location is set".to_string(),
        })?;

        if matches!(provider.source(), ItemSource::Disk) {
            let expanded = expand_tilde(path)?;
            if expanded != path {
                return self.resolve_unqualified(&expanded);
            }
        }

        let drive = provider
            .location_drive()
            .or_else(|| provider.drives().first())
            .ok_or_else(|| Error::LiteralResolution {
                path: path.to_string(),
                reason: format!("provider '{}' has no drives", provider.name()),
            })?;
        let base = if path.starts_with(is_separator) {
            drive.root()
        } else {
            provider.current_location()
        };
        let resolved = join(base, path, provider.separator())?;
        Ok(ResolvedPath::new(resolved, provider.handle().clone()).with_drive(drive.clone()))
    }
}

/// Split `Provider::rest` into its provider name and rest.
fn split_qualifier(path: &str) -> Option<(&str, &str)> {
    let (name, rest) = path.split_once("::")?;
    let valid = !name.is_empty() && !name.contains(':') && !name.contains(is_separator);
    valid.then_some((name, rest))
}

/// Split `drive:rest` into its drive name and rest.
fn split_drive(path: &str) -> Option<(&str, &str)> {
    if split_qualifier(path).is_some() {
        return None;
    }
    let (name, rest) = path.split_once(':')?;
    let valid = !name.is_empty() && !name.contains(is_separator);
    valid.then_some((name, rest))
}

impl PathResolutionContext for Namespace {
    fn contains_wildcard(&self, path: &str) -> bool {
        wildcard::contains_wildcard(path)
    }

    fn expand_wildcard(&self, pattern: &str) -> Result<Vec<ResolvedPath>> {
        let anchored = self.resolve_literal(pattern)?;
        let provider = self.provider_for(anchored.provider())?;
        log::trace!(
            "expanding '{}' in provider '{}'",
            anchored.provider_path(),
            provider.name()
        );

        let matches = match provider.source() {
            ItemSource::Listed(items) => wildcard::match_listed(anchored.provider_path(), items)?,
            ItemSource::Disk => wildcard::match_disk(anchored.provider_path())?,
        };

        // Matches live under the pattern's anchor, so they share its drive
        Ok(matches
            .into_iter()
            .map(|m| {
                let resolved = ResolvedPath::new(m, provider.handle().clone());
                match anchored.drive() {
                    Some(drive) => resolved.with_drive(drive.clone()),
                    None => resolved,
                }
            })
            .collect())
    }

    fn resolve_literal(&self, path: &str) -> Result<ResolvedPath> {
        let Some((name, rest)) = split_qualifier(path) else {
            return self.resolve_unqualified(path);
        };

        let provider = self.provider(name).ok_or_else(|| Error::UnknownProvider {
            name: name.to_string(),
        })?;
        let resolved = if rest.is_empty() {
            String::new()
        } else {
            resolve_components(rest, provider.separator())?
        };
        Ok(ResolvedPath::new(resolved, provider.handle().clone()))
    }

    fn is_provider_qualified(&self, path: &str) -> bool {
        split_qualifier(path).is_some()
    }

    fn absolute_drive(&self, path: &str) -> Option<DriveHandle> {
        let (name, _) = split_drive(path)?;
        self.drive(name).map(|(_, drive)| drive.clone())
    }

    fn normalize_relative(&self, path: &str, root: &str) -> Result<String> {
        relative_walk(path, root)
    }

    fn current_location(&self, provider: &ProviderHandle) -> Result<String> {
        Ok(self.provider_for(provider)?.current_location().to_string())
    }
}

impl From<&ProviderConfig> for Provider {
    fn from(config: &ProviderConfig) -> Self {
        let provider = match config.source.unwrap_or_default() {
            SourceKind::Listed => {
                Provider::listed(&config.name).with_items(config.items.iter().cloned())
            }
            SourceKind::Disk => Provider::disk(&config.name),
        };
        let provider = match config.separator {
            Some(separator) => provider.with_separator(separator),
            None => provider,
        };
        config
            .drives
            .iter()
            .fold(provider, |p, drive| p.with_drive(&drive.name, &drive.root))
    }
}
