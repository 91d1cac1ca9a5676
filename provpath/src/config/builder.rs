//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Precedence of a file named explicitly with [`ConfigBuilder::with_file`].
const EXPLICIT_FILE_PRECEDENCE: u8 = 4;

/// Builds a [`Config`] from files, environment and programmatic overrides.
///
/// # Examples
///
/// ```
/// use provpath::config::{Config, ConfigBuilder};
/// use provpath::path::PathKind;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         default_kind: Some(PathKind::Relative),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.default_kind, Some(PathKind::Relative));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    explicit_file: Option<PathBuf>,
    overrides: Vec<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder that loads every layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory project files are discovered from (default: the process
    /// working directory).
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Directory holding the user `config.yaml` (default: `~/.provpath`).
    #[must_use]
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.data_dir = Some(dir.to_path_buf());
        self
    }

    /// Load `path` above all discovered files.
    ///
    /// Unlike discovered files, an explicit file must exist.
    #[must_use]
    pub fn with_file(mut self, path: &Path) -> Self {
        self.explicit_file = Some(path.to_path_buf());
        self
    }

    /// Skip user and project files. An explicit file is still loaded.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skip `PROVPATH_*` environment overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` above every other layer. May be called repeatedly;
    /// later calls win.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Merge all layers and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is invalid, or the merged configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut sources = if self.skip_files {
            Vec::new()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            ConfigLoader::load_all(&working_dir, self.data_dir.as_deref())?
        };

        if let Some(path) = self.explicit_file {
            log::debug!("loading explicit config from {}", path.display());
            let config = ConfigLoader::load_file(&path)?;
            sources.push(ConfigSource {
                path,
                precedence: EXPLICIT_FILE_PRECEDENCE,
                config,
            });
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for layer in &self.overrides {
            ConfigMerger::merge_into(&mut config, layer);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
