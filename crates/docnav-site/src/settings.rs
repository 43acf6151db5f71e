//! Immutable site-wide settings.

use docnav_config::{
    BrokenLinkPolicy, Config, FooterConfig, NavbarConfig, SearchConfig, ThemeConfig,
};
use docnav_tree::Project;
use serde::Serialize;

/// Site-wide settings handed to the renderer.
///
/// Built once from [`Config`] and never mutated; the renderer receives it
/// explicitly instead of reading any global state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    /// Site title.
    pub title: String,
    /// Tagline under the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Favicon path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    /// Production URL.
    pub url: String,
    /// Path the site is served under, with leading and trailing slash.
    pub base_url: String,
    /// Owning organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Deployment project name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    /// Default locale first, then the others.
    pub locales: Vec<String>,
    /// Broken link handling.
    pub on_broken_links: BrokenLinkPolicy,
    /// Search integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,
    /// Theme.
    pub theme: ThemeConfig,
    /// Navbar.
    pub navbar: NavbarConfig,
    /// Footer.
    pub footer: FooterConfig,
}

impl SiteSettings {
    /// Snapshot the site-wide sections of a loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let site = &config.site;
        Self {
            title: site.title.clone(),
            tagline: site.tagline.clone(),
            favicon: site.favicon.clone(),
            url: site.url.clone(),
            base_url: site.base_url.clone(),
            organization: site.organization.clone(),
            project_name: site.project_name.clone(),
            locales: site.effective_locales(),
            on_broken_links: site.on_broken_links,
            search: config.search.clone(),
            theme: config.theme.clone(),
            navbar: config.navbar.clone(),
            footer: config.footer.clone(),
        }
    }

    /// Absolute URL path of a document (e.g., `/proof-market/market/economics`).
    #[must_use]
    pub fn permalink(&self, project: &Project, doc_id: &str) -> String {
        format!("{}{}", self.base_url, project.doc_route(doc_id))
    }
}
