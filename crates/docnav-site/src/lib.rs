//! Site manifest rendering for docnav.
//!
//! This crate provides:
//! - [`SiteSettings`]: immutable site-wide settings snapshot
//! - [`SiteRenderer`]: renders validated projects into a [`SiteManifest`]
//! - [`SiteManifest::write_to`]: writes `site.json` and per-project sidebars
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use docnav_config::Config;
//! use docnav_site::{SiteRenderer, SiteSettings};
//! use docnav_tree::{NavNode, Project};
//!
//! let config = Config::load(None, None)?;
//! let project = Project::new("zkllvm", "zkllvm")
//!     .with_nav_tree(vec![NavNode::doc("overview/what-is-zkllvm")]);
//!
//! let renderer = SiteRenderer::new(SiteSettings::from_config(&config));
//! let manifest = renderer.render(&[project]);
//! manifest.write_to(Path::new("build"))?;
//! # Ok(())
//! # }
//! ```

mod manifest;
mod renderer;
mod settings;

pub use manifest::{
    MANIFEST_FILENAME, PageEntry, PageNeighbor, ProjectManifest, SIDEBARS_DIR, SiteError,
    SiteManifest,
};
pub use renderer::SiteRenderer;
pub use settings::SiteSettings;
