//! `docnav pages` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_config::Config;
use docnav_corpus::FsCorpus;
use docnav_site::{SiteRenderer, SiteSettings};

use crate::error::CliError;
use crate::output::Output;
use crate::project::load_project;

/// Arguments for the pages command.
#[derive(Args)]
pub(crate) struct PagesArgs {
    /// Project id.
    project: String,

    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print pages as JSON.
    #[arg(long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl PagesArgs {
    /// Execute the pages command.
    ///
    /// # Errors
    ///
    /// Returns an error if the project is unknown or fails validation.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        let project_config = config
            .project(&self.project)
            .ok_or_else(|| CliError::UnknownProject(self.project.clone()))?;

        let corpus = FsCorpus::new(project_config.content_root.clone());
        let loaded = load_project(
            project_config,
            &corpus,
            config.build_resolved.max_depth_warning,
        )
        .map_err(|source| CliError::Project {
            project: self.project.clone(),
            source,
        })?;

        let renderer = SiteRenderer::new(SiteSettings::from_config(&config));
        let pages = renderer.render_project(&loaded.project).pages;

        if self.json {
            output.result(&serde_json::to_string_pretty(&pages)?);
            return Ok(());
        }

        output.heading(&format!("{} ({} pages)", self.project, pages.len()));
        for page in &pages {
            let neighbors = format!(
                "prev: {}, next: {}",
                page.previous.as_ref().map_or("-", |p| p.id.as_str()),
                page.next.as_ref().map_or("-", |p| p.id.as_str()),
            );
            output.result_with_details(&page.permalink, &neighbors);
        }
        Ok(())
    }
}
