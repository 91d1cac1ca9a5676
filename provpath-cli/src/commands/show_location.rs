//! Command to show the current location.

use crate::error::CliError;
use crate::utils::{load_configuration, open_namespace, GlobalOptions};
use clap::Args;
use provpath::path::format_path;
use provpath::{PathKind, ResolvedPath};

/// Show the current location of a provider.
#[derive(Args)]
pub struct ShowLocationCommand {
    /// Provider to show (default: the current provider)
    #[arg(long, value_name = "NAME")]
    pub provider: Option<String>,

    /// Form of the printed location
    #[arg(long, short, value_enum, default_value = "drive", ignore_case = true)]
    pub kind: PathKind,
}

impl ShowLocationCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let namespace = open_namespace(&config)?;

        let provider = match self.provider {
            Some(ref name) => namespace.provider(name).ok_or_else(|| {
                CliError::from(provpath::Error::UnknownProvider { name: name.clone() })
            })?,
            None => namespace.current_provider().ok_or_else(|| {
                CliError::Config("no provider has a current location".to_string())
            })?,
        };

        let drive = provider
            .location_drive()
            .or_else(|| provider.drives().first())
            .ok_or_else(|| {
                CliError::InvalidArguments(format!(
                    "provider '{}' has no drives and therefore no location",
                    provider.name()
                ))
            })?;
        let location = ResolvedPath::new(provider.current_location(), provider.handle().clone())
            .with_drive(drive.clone());

        println!("{}", format_path(&location, self.kind, &namespace)?);
        Ok(())
    }
}
