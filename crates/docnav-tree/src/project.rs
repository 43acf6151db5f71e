//! Documentation projects.

use std::path::PathBuf;

use crate::node::NavNode;

/// One independently-routed documentation set.
///
/// Projects never reference each other: the same document id may appear in
/// two projects and denote two different documents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    /// Unique project identifier (e.g., `"proof-market"`).
    pub id: String,
    /// Filesystem root holding the project's documents.
    pub content_root: PathBuf,
    /// URL prefix the project's pages are served under, without slashes.
    pub route_base_path: String,
    /// Key the tree is emitted under in the sidebar file.
    pub sidebar_name: String,
    /// Navigation tree in display order.
    pub nav_tree: Vec<NavNode>,
}

impl Project {
    /// Create a project whose routes and sidebar are named after its id.
    #[must_use]
    pub fn new(id: impl Into<String>, content_root: impl Into<PathBuf>) -> Self {
        let id = id.into();
        Self {
            route_base_path: id.clone(),
            sidebar_name: id.clone(),
            id,
            content_root: content_root.into(),
            nav_tree: Vec::new(),
        }
    }

    /// Set the URL prefix. Leading and trailing slashes are dropped.
    #[must_use]
    pub fn with_route_base_path(mut self, route_base_path: &str) -> Self {
        route_base_path
            .trim_matches('/')
            .clone_into(&mut self.route_base_path);
        self
    }

    /// Set the sidebar key.
    #[must_use]
    pub fn with_sidebar_name(mut self, sidebar_name: impl Into<String>) -> Self {
        self.sidebar_name = sidebar_name.into();
        self
    }

    /// Set the navigation tree.
    #[must_use]
    pub fn with_nav_tree(mut self, nav_tree: Vec<NavNode>) -> Self {
        self.nav_tree = nav_tree;
        self
    }

    /// URL path of a document in this project, relative to the site base.
    ///
    /// `route_base_path = "proof-market"`, `id = "market/mechanics"` gives
    /// `"proof-market/market/mechanics"`. An empty route base serves the
    /// project at the site root.
    #[must_use]
    pub fn doc_route(&self, id: &str) -> String {
        if self.route_base_path.is_empty() {
            id.to_owned()
        } else {
            format!("{}/{id}", self.route_base_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_id() {
        let project = Project::new("zkllvm", "/docs/zkllvm");

        assert_eq!(project.route_base_path, "zkllvm");
        assert_eq!(project.sidebar_name, "zkllvm");
        assert_eq!(project.content_root, PathBuf::from("/docs/zkllvm"));
        assert!(project.nav_tree.is_empty());
    }

    #[test]
    fn test_route_base_path_trims_slashes() {
        let project = Project::new("crypto3", "crypto3").with_route_base_path("/crypto3/");

        assert_eq!(project.route_base_path, "crypto3");
    }

    #[test]
    fn test_doc_route() {
        let project = Project::new("proof-market", "proof-market");

        assert_eq!(
            project.doc_route("market/mechanics"),
            "proof-market/market/mechanics"
        );
    }

    #[test]
    fn test_doc_route_at_site_root() {
        let project = Project::new("main", "docs").with_route_base_path("/");

        assert_eq!(project.doc_route("intro"), "intro");
    }
}
