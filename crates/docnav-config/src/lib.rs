//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.url`
//! - `search.app_id`
//! - `search.api_key`
//! - `search.index_name`

mod expand;
mod site;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

pub use site::{
    BrokenLinkPolicy, ColorMode, FooterConfig, FooterLink, FooterLinkGroup, NavbarConfig,
    NavbarItem, NavbarPosition, SearchConfig, SiteConfig, ThemeConfig,
};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "docnav.toml";

const DEFAULT_OUTPUT_DIR: &str = "build";
const DEFAULT_MAX_DEPTH_WARNING: usize = 4;

/// Project ids name output files, so they must be plain slugs.
static PROJECT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").unwrap());

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override manifest output directory.
    pub output_dir: Option<PathBuf>,
    /// Override parallel project validation.
    pub parallel: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site branding and deployment settings.
    pub site: SiteConfig,
    /// Documentation projects (paths are relative strings from TOML).
    projects: Vec<ProjectConfigRaw>,
    /// Search integration (optional section).
    pub search: Option<SearchConfig>,
    /// Theme settings.
    pub theme: ThemeConfig,
    /// Navbar links.
    pub navbar: NavbarConfig,
    /// Footer links.
    pub footer: FooterConfig,
    /// Build settings (paths are relative strings from TOML).
    build: BuildConfigRaw,

    /// Resolved projects in declaration order (set after loading).
    #[serde(skip)]
    pub projects_resolved: Vec<ProjectConfig>,
    /// Resolved build configuration (set after loading).
    #[serde(skip)]
    pub build_resolved: BuildConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw project entry as parsed from TOML.
#[derive(Debug, Deserialize)]
struct ProjectConfigRaw {
    id: String,
    path: Option<String>,
    route_base_path: Option<String>,
    sidebar: String,
    sidebar_name: Option<String>,
}

/// Resolved project entry with absolute paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Project id.
    pub id: String,
    /// Directory holding the project's documents.
    pub content_root: PathBuf,
    /// URL prefix without surrounding slashes.
    pub route_base_path: String,
    /// Sidebar file.
    pub sidebar_path: PathBuf,
    /// Sidebar to select when the file defines several.
    pub sidebar_name: Option<String>,
}

impl ProjectConfig {
    fn resolve(raw: &ProjectConfigRaw, config_dir: &Path) -> Self {
        let route = raw.route_base_path.as_deref().unwrap_or(&raw.id);
        Self {
            id: raw.id.clone(),
            content_root: config_dir.join(raw.path.as_deref().unwrap_or(&raw.id)),
            route_base_path: route.trim_matches('/').to_owned(),
            sidebar_path: config_dir.join(&raw.sidebar),
            sidebar_name: raw.sidebar_name.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    output_dir: Option<String>,
    max_depth_warning: Option<usize>,
    parallel: Option<bool>,
}

/// Resolved build configuration.
#[derive(Debug)]
pub struct BuildConfig {
    /// Directory the site manifest is written to.
    pub output_dir: PathBuf,
    /// Sidebar depth above which a warning is logged.
    pub max_depth_warning: usize,
    /// Validate projects in parallel.
    pub parallel: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_depth_warning: DEFAULT_MAX_DEPTH_WARNING,
            parallel: true,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`search.api_key`").
        field: String,
        /// Error message (e.g., "${`ALGOLIA_API_KEY`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_project_id(id: &str) -> Result<(), ConfigError> {
    require_non_empty(id, "projects.id")?;
    if !PROJECT_ID_RE.is_match(id) || id.contains("..") {
        return Err(ConfigError::Validation(format!(
            "project id '{id}' may only contain letters, digits, '.', '_' and '-'"
        )));
    }
    Ok(())
}

fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    /// A site without projects is meaningless, so there is no fallback to
    /// defaults when nothing is found.
    ///
    /// # Errors
    ///
    /// Returns error if no config file is found, or parsing, expansion or
    /// validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => path.to_path_buf(),
            None => {
                let cwd = std::env::current_dir()?;
                Self::discover_from(&cwd)
                    .ok_or_else(|| ConfigError::NotFound(PathBuf::from(CONFIG_FILENAME)))?
            }
        };

        let mut config = Self::load_from_file(&path)?;
        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        Ok(config)
    }

    /// Look up a resolved project by id.
    #[must_use]
    pub fn project(&self, id: &str) -> Option<&ProjectConfig> {
        self.projects_resolved.iter().find(|p| p.id == id)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(output_dir) = &settings.output_dir {
            self.build_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(parallel) = settings.parallel {
            self.build_resolved.parallel = parallel;
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            projects: Vec::new(),
            search: None,
            theme: ThemeConfig::default(),
            navbar: NavbarConfig::default(),
            footer: FooterConfig::default(),
            build: BuildConfigRaw::default(),
            projects_resolved: Vec::new(),
            build_resolved: BuildConfig {
                output_dir: base.join(DEFAULT_OUTPUT_DIR),
                ..BuildConfig::default()
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            projects = config.projects_resolved.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_projects()?;
        if let Some(search) = &self.search {
            require_non_empty(&search.app_id, "search.app_id")?;
            require_non_empty(&search.api_key, "search.api_key")?;
            require_non_empty(&search.index_name, "search.index_name")?;
        }
        if self.build_resolved.max_depth_warning == 0 {
            return Err(ConfigError::Validation(
                "build.max_depth_warning must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.site.url, "site.url")?;
        require_http_url(&self.site.url, "site.url")?;

        let base_url = &self.site.base_url;
        if !base_url.starts_with('/') || !base_url.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "site.base_url must start and end with '/', got '{base_url}'"
            )));
        }
        Ok(())
    }

    fn validate_projects(&self) -> Result<(), ConfigError> {
        if self.projects_resolved.is_empty() {
            return Err(ConfigError::Validation(
                "at least one [[projects]] entry is required".to_owned(),
            ));
        }

        let mut ids = HashSet::new();
        let mut routes = HashSet::new();
        for project in &self.projects_resolved {
            require_project_id(&project.id)?;
            if !ids.insert(project.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate project id '{}'",
                    project.id
                )));
            }
            if !routes.insert(project.route_base_path.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "projects '{}' and another project share route_base_path '{}'",
                    project.id, project.route_base_path
                )));
            }
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_in_place(&mut self.site.url, "site.url")?;

        if let Some(ref mut search) = self.search {
            expand::expand_in_place(&mut search.app_id, "search.app_id")?;
            expand::expand_in_place(&mut search.api_key, "search.api_key")?;
            expand::expand_in_place(&mut search.index_name, "search.index_name")?;
        }

        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.projects_resolved = self
            .projects
            .iter()
            .map(|raw| ProjectConfig::resolve(raw, config_dir))
            .collect();

        self.build_resolved = BuildConfig {
            output_dir: config_dir.join(
                self.build
                    .output_dir
                    .as_deref()
                    .unwrap_or(DEFAULT_OUTPUT_DIR),
            ),
            max_depth_warning: self
                .build
                .max_depth_warning
                .unwrap_or(DEFAULT_MAX_DEPTH_WARNING),
            parallel: self.build.parallel.unwrap_or(true),
        };
    }
}
