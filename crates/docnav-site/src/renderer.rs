//! Project rendering.

use std::collections::BTreeMap;

use docnav_tree::{PageLink, Project, paginate, render};

use crate::manifest::{PageEntry, PageNeighbor, ProjectManifest, SiteManifest};
use crate::settings::SiteSettings;

/// Renders validated projects into a [`SiteManifest`].
///
/// Rendering is a pure function of the settings and the projects; it does
/// not re-validate trees, so callers validate first.
///
/// # Example
///
/// ```ignore
/// use docnav_site::{SiteRenderer, SiteSettings};
///
/// let renderer = SiteRenderer::new(SiteSettings::from_config(&config));
/// let manifest = renderer.render(&projects);
/// manifest.write_to(&config.build_resolved.output_dir)?;
/// ```
#[derive(Clone, Debug)]
pub struct SiteRenderer {
    settings: SiteSettings,
}

impl SiteRenderer {
    /// Create a renderer for the given site settings.
    #[must_use]
    pub fn new(settings: SiteSettings) -> Self {
        Self { settings }
    }

    /// Render every project, keeping their order.
    #[must_use]
    pub fn render(&self, projects: &[Project]) -> SiteManifest {
        SiteManifest {
            site: self.settings.clone(),
            projects: projects.iter().map(|p| self.render_project(p)).collect(),
        }
    }

    /// Render a single project.
    #[must_use]
    pub fn render_project(&self, project: &Project) -> ProjectManifest {
        let mut sidebars = BTreeMap::new();
        sidebars.insert(project.sidebar_name.clone(), render(&project.nav_tree));

        let pages: Vec<PageEntry> = paginate(&project.nav_tree)
            .into_iter()
            .map(|link| self.page_entry(project, &link))
            .collect();

        tracing::debug!(
            project = %project.id,
            pages = pages.len(),
            "Rendered project"
        );

        ProjectManifest {
            id: project.id.clone(),
            route_base_path: project.route_base_path.clone(),
            sidebars,
            pages,
        }
    }

    fn page_entry(&self, project: &Project, link: &PageLink<'_>) -> PageEntry {
        let neighbor = |id: &str| PageNeighbor {
            id: id.to_owned(),
            permalink: self.settings.permalink(project, id),
        };
        PageEntry {
            id: link.current.id.clone(),
            permalink: self.settings.permalink(project, &link.current.id),
            previous: link.previous.map(|doc| neighbor(&doc.id)),
            next: link.next.map(|doc| neighbor(&doc.id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use docnav_config::Config;
    use docnav_tree::{Category, DocRef, NavNode, SidebarItem};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::manifest::{MANIFEST_FILENAME, SIDEBARS_DIR};

    static_assertions::assert_impl_all!(super::SiteRenderer: Send, Sync);
    static_assertions::assert_impl_all!(crate::SiteManifest: Send, Sync);

    fn settings() -> SiteSettings {
        let mut config = Config::default();
        config.site.title = "=nil; Foundation".to_owned();
        config.site.url = "https://docs.nil.foundation".to_owned();
        SiteSettings::from_config(&config)
    }

    fn proof_market() -> Project {
        Project::new("proof-market", "/site/proof-market")
            .with_sidebar_name("market")
            .with_nav_tree(vec![
                NavNode::doc("intro"),
                Category::new(
                    "Market",
                    vec![NavNode::doc("market/economics"), NavNode::doc("market/orders")],
                )
                .collapsed(false)
                .into(),
            ])
    }

    fn zkllvm() -> Project {
        Project::new("zkllvm", "/site/zkllvm").with_nav_tree(vec![NavNode::Doc(
            DocRef::new("overview/what-is-zkllvm").with_label("What is zkLLVM?"),
        )])
    }

    #[test]
    fn test_render_project_sidebar() {
        let renderer = SiteRenderer::new(settings());

        let manifest = renderer.render_project(&proof_market());

        assert_eq!(manifest.id, "proof-market");
        assert_eq!(manifest.route_base_path, "proof-market");
        assert_eq!(manifest.sidebars.len(), 1);
        assert_eq!(
            manifest.sidebars["market"],
            render(&proof_market().nav_tree)
        );
    }

    #[test]
    fn test_render_project_pages() {
        let renderer = SiteRenderer::new(settings());

        let pages = renderer.render_project(&proof_market()).pages;

        let ids: Vec<&str> = pages.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["intro", "market/economics", "market/orders"]);
        assert_eq!(pages[1].permalink, "/proof-market/market/economics");
        assert_eq!(pages[0].previous, None);
        assert_eq!(
            pages[0].next,
            Some(PageNeighbor {
                id: "market/economics".to_owned(),
                permalink: "/proof-market/market/economics".to_owned(),
            })
        );
        assert_eq!(pages[2].previous.as_ref().unwrap().id, "market/economics");
        assert_eq!(pages[2].next, None);
    }

    #[test]
    fn test_render_keeps_project_order() {
        let renderer = SiteRenderer::new(settings());

        let manifest = renderer.render(&[zkllvm(), proof_market()]);

        let ids: Vec<&str> = manifest.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["zkllvm", "proof-market"]);
        assert_eq!(manifest.site, settings());
    }

    #[test]
    fn test_render_empty_tree() {
        let renderer = SiteRenderer::new(settings());

        let manifest = renderer.render_project(&Project::new("empty", "/site/empty"));

        assert!(manifest.pages.is_empty());
        assert_eq!(manifest.sidebars["empty"], Vec::<SidebarItem>::new());
    }

    #[test]
    fn test_manifest_json_shape() {
        let manifest = SiteRenderer::new(settings()).render(&[zkllvm()]);

        let json = serde_json::to_value(&manifest).unwrap();

        assert_eq!(json["site"]["title"], "=nil; Foundation");
        let project = &json["projects"][0];
        assert_eq!(project["routeBasePath"], "zkllvm");
        assert_eq!(
            project["sidebars"]["zkllvm"],
            serde_json::json!([
                {"type": "doc", "id": "overview/what-is-zkllvm", "label": "What is zkLLVM?"}
            ])
        );
        assert_eq!(
            project["pages"][0],
            serde_json::json!({
                "id": "overview/what-is-zkllvm",
                "permalink": "/zkllvm/overview/what-is-zkllvm",
                "previous": null,
                "next": null
            })
        );
    }

    #[test]
    fn test_write_to() {
        let temp_dir = tempfile::tempdir().unwrap();
        let out = temp_dir.path().join("build");
        let manifest = SiteRenderer::new(settings()).render(&[zkllvm(), proof_market()]);

        let written = manifest.write_to(&out).unwrap();

        assert_eq!(
            written,
            vec![
                out.join(MANIFEST_FILENAME),
                out.join(SIDEBARS_DIR).join("zkllvm.json"),
                out.join(SIDEBARS_DIR).join("proof-market.json"),
            ]
        );
        let sidebar: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&written[2]).unwrap()).unwrap();
        assert_eq!(sidebar["market"][1]["type"], "category");
        assert_eq!(sidebar["market"][1]["collapsed"], false);

        let parsed: BTreeMap<String, Vec<SidebarItem>> =
            serde_json::from_str(&fs::read_to_string(&written[1]).unwrap()).unwrap();
        assert_eq!(parsed["zkllvm"], render(&zkllvm().nav_tree));
    }

    #[test]
    fn test_write_to_unwritable_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, "not a directory").unwrap();
        let manifest = SiteRenderer::new(settings()).render(&[zkllvm()]);

        let err = manifest.write_to(&blocker).unwrap_err();

        assert!(matches!(err, crate::SiteError::Io { .. }));
    }

    #[test]
    fn test_write_to_rejects_path_like_project_id() {
        let temp_dir = tempfile::tempdir().unwrap();
        let out = temp_dir.path().join("build");
        let escaped = Project::new("../../escaped", "/site/escaped");
        let manifest = SiteRenderer::new(settings()).render(&[zkllvm(), escaped]);

        let err = manifest.write_to(&out).unwrap_err();

        assert!(
            matches!(&err, crate::SiteError::InvalidProjectId(id) if id == "../../escaped"),
            "Expected InvalidProjectId, got {err:?}"
        );
        assert!(!out.exists());
        assert!(!temp_dir.path().join("escaped.json").exists());
    }

    #[test]
    fn test_write_to_failure_leaves_no_manifest() {
        let temp_dir = tempfile::tempdir().unwrap();
        let out = temp_dir.path().join("build");
        fs::create_dir_all(out.join(SIDEBARS_DIR).join("proof-market.json")).unwrap();
        let manifest = SiteRenderer::new(settings()).render(&[zkllvm(), proof_market()]);

        let err = manifest.write_to(&out).unwrap_err();

        assert!(matches!(err, crate::SiteError::Io { .. }));
        assert!(!out.join(MANIFEST_FILENAME).exists());
        assert!(!out.join(SIDEBARS_DIR).join("zkllvm.json").exists());
    }
}
