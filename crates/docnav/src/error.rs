//! CLI error types.

use docnav_config::ConfigError;
use docnav_corpus::CorpusError;
use docnav_site::SiteError;
use docnav_tree::{SidebarError, ValidationError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Project '{project}': {source}")]
    Project {
        project: String,
        #[source]
        source: ProjectError,
    },

    #[error("Unknown project '{0}'")]
    UnknownProject(String),
}

/// Failure loading or validating one project.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ProjectError {
    #[error("{0}")]
    Sidebar(#[from] SidebarError),

    #[error("{0}")]
    Corpus(#[from] CorpusError),

    #[error("{0}")]
    Invalid(#[from] ValidationError),
}
