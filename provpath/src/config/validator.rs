//! Configuration validation.
//!
//! This module checks that provider and drive definitions are well-formed
//! and consistent before a namespace is built from them.

use crate::config::schema::{Config, LocationConfig, ProviderConfig};
use crate::error::{Error, Result};
use crate::namespace::{check_name, check_separator};
use std::collections::HashSet;

/// Validates configuration.
///
/// # Examples
///
/// ```
/// use provpath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns validation errors for invalid configurations.
    pub fn validate(config: &Config) -> Result<()> {
        let providers = config.providers.as_deref().unwrap_or_default();
        Self::validate_providers(providers)?;

        if let Some(ref location) = config.location {
            Self::validate_location(location, providers)?;
        }

        Ok(())
    }

    fn validate_providers(providers: &[ProviderConfig]) -> Result<()> {
        let mut provider_names = HashSet::new();
        let mut drive_names = HashSet::new();

        for (index, provider) in providers.iter().enumerate() {
            let field = format!("providers[{index}]");
            Self::in_field(&field, check_name("provider", &provider.name))?;

            if !provider_names.insert(provider.name.to_lowercase()) {
                return Err(Error::Validation {
                    field,
                    message: format!("Duplicate provider name '{}'", provider.name),
                });
            }

            if let Some(separator) = provider.separator {
                Self::in_field(&format!("{field}.separator"), check_separator(separator))?;
            }

            for (d, drive) in provider.drives.iter().enumerate() {
                let drive_field = format!("{field}.drives[{d}]");
                Self::in_field(&drive_field, check_name("drive", &drive.name))?;

                if drive.root.trim().is_empty() {
                    return Err(Error::Validation {
                        field: format!("{drive_field}.root"),
                        message: "Drive root cannot be empty".into(),
                    });
                }

                if !drive_names.insert(drive.name.to_lowercase()) {
                    return Err(Error::Validation {
                        field: drive_field,
                        message: format!("Duplicate drive name '{}'", drive.name),
                    });
                }
            }
        }

        Ok(())
    }

    /// The location drive must be a configured drive. Without configured
    /// providers the host drive is only known at runtime, so the check is
    /// left to namespace construction.
    fn validate_location(location: &LocationConfig, providers: &[ProviderConfig]) -> Result<()> {
        if location.drive.trim().is_empty() {
            return Err(Error::Validation {
                field: "location.drive".into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if providers.is_empty() {
            return Ok(());
        }

        let known = providers
            .iter()
            .flat_map(|p| &p.drives)
            .any(|d| d.name.eq_ignore_ascii_case(&location.drive));
        if !known {
            return Err(Error::Validation {
                field: "location.drive".into(),
                message: format!("Unknown drive '{}'", location.drive),
            });
        }

        Ok(())
    }

    /// Re-label a validation error with the config field it came from.
    fn in_field(field: &str, result: Result<()>) -> Result<()> {
        result.map_err(|e| match e {
            Error::Validation { message, .. } => Error::Validation {
                field: field.to_string(),
                message,
            },
            other => other,
        })
    }
}
