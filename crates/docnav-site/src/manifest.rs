//! Site manifest: everything the external renderer needs, as JSON.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use docnav_tree::SidebarItem;
use serde::Serialize;

use crate::settings::SiteSettings;

/// Manifest file name inside the output directory.
pub const MANIFEST_FILENAME: &str = "site.json";
/// Directory holding one sidebar file per project.
pub const SIDEBARS_DIR: &str = "sidebars";

/// Error writing a manifest to disk.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// I/O error on an output path.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// Path being written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Serialization error.
    #[error("Failed to serialize manifest: {0}")]
    Json(#[from] serde_json::Error),
    /// Project id cannot be used as a file name.
    #[error("Project id '{0}' is not a valid file name")]
    InvalidProjectId(String),
}

/// Neighbouring page in the reading order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageNeighbor {
    /// Document id.
    pub id: String,
    /// Absolute URL path.
    pub permalink: String,
}

/// One page in a project's reading order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageEntry {
    /// Document id.
    pub id: String,
    /// Absolute URL path.
    pub permalink: String,
    /// "Previous page" link.
    pub previous: Option<PageNeighbor>,
    /// "Next page" link.
    pub next: Option<PageNeighbor>,
}

/// Rendered project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectManifest {
    /// Project id.
    pub id: String,
    /// URL prefix without surrounding slashes.
    pub route_base_path: String,
    /// Sidebars keyed by name, in the external sidebar shape.
    pub sidebars: BTreeMap<String, Vec<SidebarItem>>,
    /// Pages in reading order.
    pub pages: Vec<PageEntry>,
}

/// Rendered site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteManifest {
    /// Site-wide settings, copied through.
    pub site: SiteSettings,
    /// Projects in configuration order.
    pub projects: Vec<ProjectManifest>,
}

impl SiteManifest {
    /// Write `site.json` and `sidebars/<project>.json` under `dir`.
    ///
    /// Everything is serialized before the first write. Sidebars are written
    /// first and `site.json` last; if any write fails the files already
    /// written are removed, so a failed call never leaves a manifest behind.
    /// Returns the paths written, manifest first.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError`] if a project id is not a plain file name, or a
    /// directory or file cannot be written.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
        let sidebars_dir = dir.join(SIDEBARS_DIR);

        let mut sidebars = Vec::with_capacity(self.projects.len());
        for project in &self.projects {
            let file_name = format!("{}.json", project.id);
            if Path::new(&file_name).file_name() != Some(OsStr::new(&file_name)) {
                return Err(SiteError::InvalidProjectId(project.id.clone()));
            }
            sidebars.push((sidebars_dir.join(file_name), to_json(&project.sidebars)?));
        }
        let manifest_path = dir.join(MANIFEST_FILENAME);
        let manifest = to_json(self)?;

        fs::create_dir_all(&sidebars_dir).map_err(|source| SiteError::Io {
            path: sidebars_dir.clone(),
            source,
        })?;

        let mut written = Vec::with_capacity(sidebars.len() + 1);
        for (path, json) in sidebars.into_iter().chain([(manifest_path, manifest)]) {
            if let Err(err) = write_file(&path, &json) {
                for done in &written {
                    let _ = fs::remove_file(done);
                }
                return Err(err);
            }
            written.push(path);
        }
        written.rotate_right(1);

        tracing::info!(dir = %dir.display(), files = written.len(), "Wrote site manifest");
        Ok(written)
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, SiteError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

fn write_file(path: &Path, json: &str) -> Result<(), SiteError> {
    fs::write(path, json).map_err(|source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    })
}
