//! The capability the transformer resolves paths through.

use crate::error::Result;
use crate::path::types::{DriveHandle, ProviderHandle, ResolvedPath};

/// Provider and drive resolution capability.
///
/// The transformer never inspects path syntax itself; every question about
/// wildcards, qualification, drives and locations goes through this trait.
/// [`crate::namespace::Namespace`] is the bundled implementation.
#[cfg_attr(test, mockall::automock)]
pub trait PathResolutionContext {
    /// Whether `path` contains wildcard syntax.
    fn contains_wildcard(&self, path: &str) -> bool;

    /// Expand a wildcard pattern into the existing provider paths it matches.
    ///
    /// Matches are tagged with their provider, and with a drive when the
    /// pattern was anchored on one. No matches is an empty vector, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is malformed or its namespace cannot
    /// be enumerated.
    fn expand_wildcard(&self, pattern: &str) -> Result<Vec<ResolvedPath>>;

    /// Resolve a literal path, which need not exist, to one provider path.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider or drive is unknown or the syntax
    /// is malformed.
    fn resolve_literal(&self, path: &str) -> Result<ResolvedPath>;

    /// Whether `path` starts with a `<provider>::` qualifier.
    fn is_provider_qualified(&self, path: &str) -> bool;

    /// The drive `path` is anchored to, if it is drive-absolute.
    fn absolute_drive(&self, path: &str) -> Option<DriveHandle>;

    /// Express `path` relative to `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if no relative expression exists.
    fn normalize_relative(&self, path: &str, root: &str) -> Result<String>;

    /// The current location for `provider`.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider is unknown.
    fn current_location(&self, provider: &ProviderHandle) -> Result<String>;
}
