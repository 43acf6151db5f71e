//! `docnav build` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_site::{SiteRenderer, SiteSettings};

use crate::error::CliError;
use crate::output::Output;
use crate::project::load_projects;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for the manifest (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Validate projects one at a time.
    #[arg(long)]
    sequential: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// Nothing is written unless every project validates.
    ///
    /// # Errors
    ///
    /// Returns the first configuration or project error, or a write error.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output_dir: self.output_dir,
            parallel: self.sequential.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let output_dir = &config.build_resolved.output_dir;

        output.heading(&config.site.title);
        output.info(&format!("Output: {}", output_dir.display()));

        let written = build_site(&config, &output)?;

        output.success(&format!(
            "Wrote {} files to {}",
            written.len(),
            output_dir.display()
        ));
        Ok(())
    }
}

/// Validate every project, then render and write the manifest.
///
/// Returns the paths written. The output directory is not touched unless
/// every project validates.
fn build_site(config: &Config, output: &Output) -> Result<Vec<PathBuf>, CliError> {
    let output_dir: &Path = &config.build_resolved.output_dir;
    tracing::info!(
        output_dir = %output_dir.display(),
        projects = config.projects_resolved.len(),
        "Building site"
    );

    let projects = load_projects(config, output)?;

    let renderer = SiteRenderer::new(SiteSettings::from_config(config));
    let manifest = renderer.render(&projects);
    let written = manifest.write_to(output_dir)?;

    tracing::info!(files = written.len(), "Build complete");
    Ok(written)
}
