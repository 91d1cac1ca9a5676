//! Command to validate a provpath configuration file.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use provpath::config::{Config, ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate a configuration file, or the merged configuration.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate (default: the merged configuration)
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,

    /// Print the validated configuration as YAML
    #[arg(long)]
    pub show: bool,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let Some(ref path) = self.config_path else {
            let config = load_configuration(global)?;
            return self.report(&config);
        };

        // 1. Check file exists
        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                path.display()
            )));
        }

        // 2. Parse and validate the file on its own
        let config =
            ConfigLoader::load_file(path).map_err(|e| CliError::Config(e.to_string()))?;
        ConfigValidator::validate(&config).map_err(|e| CliError::Config(e.to_string()))?;

        self.report(&config)
    }

    fn report(&self, config: &Config) -> Result<(), CliError> {
        if self.show {
            let yaml = serde_yaml::to_string(config)
                .map_err(|e| CliError::Config(format!("Failed to serialize config: {e}")))?;
            print!("{yaml}");
        } else {
            println!("Configuration is valid");
        }
        Ok(())
    }
}
