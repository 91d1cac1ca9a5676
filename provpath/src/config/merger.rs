//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources.
//! Providers merge by name so a project file can redefine one provider
//! without restating the rest.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, ProviderConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use provpath::config::{Config, ConfigMerger};
/// use provpath::path::PathKind;
///
/// let low = Config { default_kind: Some(PathKind::Simple), ..Default::default() };
/// let high = Config { default_kind: Some(PathKind::Relative), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.default_kind, Some(PathKind::Relative));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Location: atomic replacement
    /// - Providers: a source provider replaces the target provider of the
    ///   same name (case-insensitive), new providers are appended
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.default_kind.is_some() {
            target.default_kind = source.default_kind;
        }

        if source.location.is_some() {
            target.location.clone_from(&source.location);
        }

        if let Some(ref source_providers) = source.providers {
            match &mut target.providers {
                Some(target_providers) => {
                    Self::merge_providers(target_providers, source_providers);
                }
                None => target.providers.clone_from(&source.providers),
            }
        }
    }

    fn merge_providers(target: &mut Vec<ProviderConfig>, source: &[ProviderConfig]) {
        for provider in source {
            match target
                .iter_mut()
                .find(|p| p.name.eq_ignore_ascii_case(&provider.name))
            {
                Some(existing) => existing.clone_from(provider),
                None => target.push(provider.clone()),
            }
        }
    }
}
