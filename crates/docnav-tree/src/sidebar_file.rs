//! Sidebar file loading.
//!
//! A sidebar file maps sidebar names to item lists in the external
//! [`SidebarItem`] shape:
//!
//! ```json
//! { "proofmarket": [ { "type": "doc", "id": "intro" } ] }
//! ```
//!
//! JSON, YAML and TOML are accepted; the format is picked by extension.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::node::NavNode;
use crate::sidebar::{SidebarItem, parse};

/// Error loading a sidebar file.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// I/O error reading the file.
    #[error("Failed to read sidebar file {}: {source}", path.display())]
    Io {
        /// Sidebar file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Malformed JSON.
    #[error("Invalid JSON sidebar: {0}")]
    Json(#[from] serde_json::Error),
    /// Malformed YAML.
    #[error("Invalid YAML sidebar: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Malformed TOML.
    #[error("Invalid TOML sidebar: {0}")]
    Toml(#[from] toml::de::Error),
    /// Extension is not one of json, yaml, yml, toml.
    #[error("Unsupported sidebar format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Requested sidebar is missing from the file.
    #[error("Sidebar '{0}' not found")]
    NotFound(String),
    /// No sidebar name given and the file holds several.
    #[error("Sidebar file defines several sidebars ({}), pick one by name", .0.join(", "))]
    Ambiguous(Vec<String>),
}

/// Serialization format of a sidebar file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarFormat {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
}

impl SidebarFormat {
    /// Detect the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Parsed sidebar file: named sidebars in the external shape.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarFile {
    sidebars: BTreeMap<String, Vec<SidebarItem>>,
}

impl SidebarFile {
    /// Load and parse a sidebar file.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError`] if the file can't be read, has an unknown
    /// extension, or doesn't parse.
    pub fn load(path: &Path) -> Result<Self, SidebarError> {
        let format = SidebarFormat::from_path(path)
            .ok_or_else(|| SidebarError::UnsupportedFormat(path.to_path_buf()))?;
        let content = std::fs::read_to_string(path).map_err(|source| SidebarError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::from_content(&content, format)?;
        tracing::debug!(path = %path.display(), sidebars = file.sidebars.len(), "Loaded sidebar file");
        Ok(file)
    }

    /// Parse sidebar file content in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError`] if the content doesn't parse.
    pub fn from_content(content: &str, format: SidebarFormat) -> Result<Self, SidebarError> {
        let sidebars = match format {
            SidebarFormat::Json => serde_json::from_str(content)?,
            SidebarFormat::Yaml => serde_yaml::from_str(content)?,
            SidebarFormat::Toml => toml::from_str(content)?,
        };
        Ok(Self { sidebars })
    }

    /// Names of the sidebars in the file, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sidebars.keys().map(String::as_str)
    }

    /// Take one sidebar as a navigation tree.
    ///
    /// With a name, returns that sidebar. Without one, the file must hold
    /// exactly one sidebar, which is returned with its name.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::NotFound`] or [`SidebarError::Ambiguous`].
    pub fn select(mut self, name: Option<&str>) -> Result<(String, Vec<NavNode>), SidebarError> {
        let name = match name {
            Some(name) => name.to_owned(),
            None => {
                let only = if self.sidebars.len() == 1 {
                    self.sidebars.keys().next().cloned()
                } else {
                    None
                };
                only.ok_or_else(|| {
                    SidebarError::Ambiguous(self.sidebars.keys().cloned().collect())
                })?
            }
        };
        let items = self
            .sidebars
            .remove(&name)
            .ok_or_else(|| SidebarError::NotFound(name.clone()))?;
        Ok((name, parse(items)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Category;
    use pretty_assertions::assert_eq;
    use std::fs;

    const JSON: &str = r#"{
        "proofmarket": [
            { "type": "doc", "label": "=nil; Proof Market", "id": "intro" },
            {
                "type": "category",
                "label": "Proof Market overview",
                "collapsible": true,
                "collapsed": false,
                "items": [
                    { "type": "doc", "label": "Market economics", "id": "market/economics" }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            SidebarFormat::from_path(Path::new("sidebar.json")),
            Some(SidebarFormat::Json)
        );
        assert_eq!(
            SidebarFormat::from_path(Path::new("a/sidebar.yml")),
            Some(SidebarFormat::Yaml)
        );
        assert_eq!(
            SidebarFormat::from_path(Path::new("sidebar.yaml")),
            Some(SidebarFormat::Yaml)
        );
        assert_eq!(
            SidebarFormat::from_path(Path::new("sidebar.toml")),
            Some(SidebarFormat::Toml)
        );
        assert_eq!(SidebarFormat::from_path(Path::new("sidebar.js")), None);
        assert_eq!(SidebarFormat::from_path(Path::new("sidebar")), None);
    }

    #[test]
    fn test_parse_json() {
        let file = SidebarFile::from_content(JSON, SidebarFormat::Json).unwrap();

        let (name, tree) = file.select(None).unwrap();

        assert_eq!(name, "proofmarket");
        assert_eq!(tree.len(), 2);
        let NavNode::Category(category) = &tree[1] else {
            panic!("expected category, got {:?}", tree[1]);
        };
        assert_eq!(category.label, "Proof Market overview");
        assert!(!category.collapsed_by_default);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = "
guide:
  - type: doc
    id: intro
  - type: category
    label: Setup
    items:
      - type: doc
        id: install
";
        let file = SidebarFile::from_content(yaml, SidebarFormat::Yaml).unwrap();

        let (name, tree) = file.select(Some("guide")).unwrap();

        assert_eq!(name, "guide");
        assert_eq!(
            tree,
            vec![
                NavNode::doc("intro"),
                NavNode::Category(Category::new("Setup", vec![NavNode::doc("install")])),
            ]
        );
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[[guide]]
type = "doc"
id = "intro"

[[guide]]
type = "category"
label = "Setup"
collapsed = false
items = [{ type = "doc", id = "install" }]
"#;
        let file = SidebarFile::from_content(toml, SidebarFormat::Toml).unwrap();

        let (_, tree) = file.select(None).unwrap();

        assert_eq!(
            tree,
            vec![
                NavNode::doc("intro"),
                NavNode::Category(
                    Category::new("Setup", vec![NavNode::doc("install")]).collapsed(false)
                ),
            ]
        );
    }

    #[test]
    fn test_select_requires_name_with_several_sidebars() {
        let json = r#"{ "b": [], "a": [] }"#;
        let file = SidebarFile::from_content(json, SidebarFormat::Json).unwrap();
        assert_eq!(file.names().collect::<Vec<_>>(), vec!["a", "b"]);

        let err = file.select(None).unwrap_err();

        assert!(
            matches!(&err, SidebarError::Ambiguous(names) if names == &["a", "b"]),
            "Expected Ambiguous, got {err:?}"
        );
    }

    #[test]
    fn test_select_empty_file_is_ambiguous() {
        let file = SidebarFile::from_content("{}", SidebarFormat::Json).unwrap();

        assert!(matches!(
            file.select(None),
            Err(SidebarError::Ambiguous(names)) if names.is_empty()
        ));
    }

    #[test]
    fn test_select_missing_name() {
        let file = SidebarFile::from_content(JSON, SidebarFormat::Json).unwrap();

        let err = file.select(Some("zkllvm")).unwrap_err();

        assert!(matches!(err, SidebarError::NotFound(ref name) if name == "zkllvm"));
        assert_eq!(err.to_string(), "Sidebar 'zkllvm' not found");
    }

    #[test]
    fn test_invalid_json() {
        let result = SidebarFile::from_content("{ not json", SidebarFormat::Json);

        assert!(matches!(result, Err(SidebarError::Json(_))));
    }

    #[test]
    fn test_load_from_disk() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("sidebar-proof-market.json");
        fs::write(&path, JSON).unwrap();

        let file = SidebarFile::load(&path).unwrap();

        assert_eq!(file.names().collect::<Vec<_>>(), vec!["proofmarket"]);
    }

    #[test]
    fn test_load_unsupported_extension() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("sidebars.js");
        fs::write(&path, "export default {}").unwrap();

        let result = SidebarFile::load(&path);

        assert!(matches!(result, Err(SidebarError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = SidebarFile::load(Path::new("/nonexistent/sidebar.json"));

        let err = result.unwrap_err();
        assert!(matches!(err, SidebarError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/sidebar.json"));
    }
}
