//! Navigation tree nodes.
//!
//! A navigation tree is an ordered forest of [`NavNode`] values. Leaves are
//! [`DocRef`]s pointing at a single document; internal nodes are
//! [`Category`]s that own their children. Order is display order.

use serde::Serialize;

/// Reference to a single document by its project-unique id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DocRef {
    /// Document id (e.g., `"market/economics"`).
    pub id: String,
    /// Optional display label overriding the document title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DocRef {
    /// Create a document reference without a label.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }

    /// Attach a display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Labelled group of child nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    /// Display label.
    pub label: String,
    /// Whether the renderer lets the reader fold this category.
    pub collapsible: bool,
    /// Whether the category starts folded.
    pub collapsed_by_default: bool,
    /// Child nodes in display order.
    pub items: Vec<NavNode>,
}

impl Category {
    /// Create a collapsible category that starts folded.
    ///
    /// These are the defaults the external renderer applies when the
    /// sidebar file leaves the flags out.
    #[must_use]
    pub fn new(label: impl Into<String>, items: Vec<NavNode>) -> Self {
        Self {
            label: label.into(),
            collapsible: true,
            collapsed_by_default: true,
            items,
        }
    }

    /// Set whether the category can be folded.
    #[must_use]
    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    /// Set whether the category starts folded.
    #[must_use]
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed_by_default = collapsed;
        self
    }
}

/// Node in a navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavNode {
    /// Leaf pointing at one document.
    Doc(DocRef),
    /// Internal node grouping children under a label.
    Category(Category),
}

impl NavNode {
    /// Shorthand for an unlabelled document leaf.
    #[must_use]
    pub fn doc(id: impl Into<String>) -> Self {
        Self::Doc(DocRef::new(id))
    }

    /// Shorthand for a category with default flags.
    #[must_use]
    pub fn category(label: impl Into<String>, items: Vec<NavNode>) -> Self {
        Self::Category(Category::new(label, items))
    }

    /// Total number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Doc(_) => 1,
            Self::Category(category) => 1 + count_nodes(&category.items),
        }
    }
}

impl From<DocRef> for NavNode {
    fn from(doc: DocRef) -> Self {
        Self::Doc(doc)
    }
}

impl From<Category> for NavNode {
    fn from(category: Category) -> Self {
        Self::Category(category)
    }
}

/// Total number of nodes in a forest.
#[must_use]
pub fn count_nodes(tree: &[NavNode]) -> usize {
    tree.iter().map(NavNode::node_count).sum()
}

/// Nesting depth of a forest.
///
/// An empty forest has depth 0 and a flat list of documents depth 1. An empty
/// category still counts as one level.
#[must_use]
pub fn max_depth(tree: &[NavNode]) -> usize {
    tree.iter()
        .map(|node| match node {
            NavNode::Doc(_) => 1,
            NavNode::Category(category) => 1 + max_depth(&category.items),
        })
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_defaults_match_renderer() {
        let category = Category::new("Guide", vec![NavNode::doc("intro")]);

        assert!(category.collapsible);
        assert!(category.collapsed_by_default);
    }

    #[test]
    fn test_category_builder_flags() {
        let category = Category::new("Guide", Vec::new())
            .collapsible(false)
            .collapsed(false);

        assert!(!category.collapsible);
        assert!(!category.collapsed_by_default);
    }

    #[test]
    fn test_doc_ref_label() {
        let doc = DocRef::new("intro").with_label("Introduction");

        assert_eq!(doc.id, "intro");
        assert_eq!(doc.label.as_deref(), Some("Introduction"));
    }

    #[test]
    fn test_count_nodes() {
        let tree = vec![
            NavNode::doc("intro"),
            NavNode::category(
                "Setup",
                vec![
                    NavNode::doc("install"),
                    NavNode::category("Advanced", vec![NavNode::doc("tuning")]),
                ],
            ),
        ];

        assert_eq!(count_nodes(&tree), 5);
        assert_eq!(count_nodes(&[]), 0);
    }

    #[test]
    fn test_max_depth() {
        assert_eq!(max_depth(&[]), 0);
        assert_eq!(max_depth(&[NavNode::doc("a"), NavNode::doc("b")]), 1);

        let tree = vec![
            NavNode::doc("intro"),
            NavNode::category(
                "A",
                vec![NavNode::category("B", vec![NavNode::doc("deep")])],
            ),
        ];
        assert_eq!(max_depth(&tree), 3);
    }

    #[test]
    fn test_max_depth_counts_empty_category() {
        let tree = vec![NavNode::category("Empty", Vec::new())];

        assert_eq!(max_depth(&tree), 1);
    }
}
