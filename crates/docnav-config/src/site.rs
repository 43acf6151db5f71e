//! Site-wide settings.
//!
//! These sections are passed through to the site renderer untouched apart
//! from validation, so they serialize with the renderer's camelCase names
//! while `docnav.toml` keeps snake_case.

use serde::{Deserialize, Serialize};

/// `[site]` section: branding and deployment.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct SiteConfig {
    /// Site title shown in the navbar and page titles.
    pub title: String,
    /// Tagline under the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Favicon path relative to the static directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    /// Production URL (e.g., `https://docs.example.org`).
    pub url: String,
    /// Path the site is served under, with leading and trailing slash.
    pub base_url: String,
    /// Owning organization name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Repository or deployment project name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    /// Default locale.
    pub default_locale: String,
    /// All locales; defaults to the default locale only.
    pub locales: Vec<String>,
    /// What the renderer does with broken links.
    pub on_broken_links: BrokenLinkPolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: None,
            favicon: None,
            url: String::new(),
            base_url: "/".to_owned(),
            organization: None,
            project_name: None,
            default_locale: "en".to_owned(),
            locales: Vec::new(),
            on_broken_links: BrokenLinkPolicy::default(),
        }
    }
}

impl SiteConfig {
    /// Locales with the default locale guaranteed first.
    #[must_use]
    pub fn effective_locales(&self) -> Vec<String> {
        let mut locales = vec![self.default_locale.clone()];
        locales.extend(
            self.locales
                .iter()
                .filter(|l| **l != self.default_locale)
                .cloned(),
        );
        locales
    }
}

/// Renderer behaviour on broken links.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    /// Fail the build.
    #[default]
    Throw,
    /// Log and continue.
    Warn,
    /// Ignore silently.
    Ignore,
}

/// `[search]` section: Algolia `DocSearch` settings.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SearchConfig {
    /// Algolia application id.
    pub app_id: String,
    /// Public search-only API key.
    pub api_key: String,
    /// Index to query.
    pub index_name: String,
    /// Restrict results to the current locale and version.
    #[serde(default = "default_true")]
    pub contextual_search: bool,
    /// Path of the full search page.
    #[serde(default = "default_search_page_path")]
    pub search_page_path: String,
    /// Send click analytics to Algolia.
    #[serde(default)]
    pub insights: bool,
}

fn default_true() -> bool {
    true
}

fn default_search_page_path() -> String {
    "search".to_owned()
}

/// Light or dark color scheme.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Light scheme.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

/// `[theme]` section.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct ThemeConfig {
    /// Initial color scheme.
    pub color_mode: ColorMode,
    /// Hide the light/dark switch.
    pub disable_switch: bool,
    /// Extra stylesheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
    /// Render mermaid code blocks as diagrams.
    pub mermaid: bool,
    /// Code highlighting theme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prism_theme: Option<String>,
    /// Code highlighting theme in dark mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prism_dark_theme: Option<String>,
    /// Language assumed for unlabelled code blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prism_language: Option<String>,
}

/// Side of the navbar an item sits on.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    /// Left side.
    #[default]
    Left,
    /// Right side.
    Right,
}

/// Navbar link.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NavbarItem {
    /// Link text.
    pub label: String,
    /// Target path or absolute URL.
    pub to: String,
    /// Side of the navbar.
    #[serde(default)]
    pub position: NavbarPosition,
}

/// `[navbar]` section.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct NavbarConfig {
    /// Title next to the logo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Logo image path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Links in display order.
    pub items: Vec<NavbarItem>,
}

/// Footer link.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FooterLink {
    /// Link text.
    pub label: String,
    /// Target path or absolute URL.
    pub to: String,
}

/// Titled column of footer links.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FooterLinkGroup {
    /// Column title.
    pub title: String,
    /// Links in display order.
    #[serde(default)]
    pub items: Vec<FooterLink>,
}

/// `[footer]` section.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct FooterConfig {
    /// Footer style (`dark` or `light`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Link columns.
    pub links: Vec<FooterLinkGroup>,
    /// Copyright line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}
