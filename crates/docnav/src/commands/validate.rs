//! `docnav validate` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;
use crate::project::load_projects;

/// Arguments for the validate command.
#[derive(Args)]
pub(crate) struct ValidateArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Validate projects one at a time.
    #[arg(long)]
    sequential: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ValidateArgs {
    /// Execute the validate command.
    ///
    /// # Errors
    ///
    /// Returns the first configuration or project error.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            parallel: self.sequential.then_some(false),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let projects = load_projects(&config, &output)?;

        output.success(&format!("All {} projects are valid", projects.len()));
        Ok(())
    }
}
