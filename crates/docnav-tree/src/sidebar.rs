//! External sidebar representation.
//!
//! The site renderer consumes sidebars as nested lists of
//! `{ "type": "doc", "id" }` and
//! `{ "type": "category", "label", "collapsible", "collapsed", "items" }`
//! objects. Those field names are a compatibility contract, so
//! [`SidebarItem`] mirrors them exactly and stays separate from the
//! internal [`NavNode`] model.

use serde::{Deserialize, Serialize};

use crate::node::{Category, DocRef, NavNode};

/// One entry of a sidebar as the site renderer expects it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SidebarItem {
    /// Document link.
    Doc {
        /// Document id.
        id: String,
        /// Display label override.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    /// Group of items.
    Category {
        /// Display label.
        label: String,
        /// Whether the reader can fold the category.
        #[serde(default = "default_true")]
        collapsible: bool,
        /// Whether the category starts folded.
        #[serde(default = "default_true")]
        collapsed: bool,
        /// Child items.
        #[serde(default)]
        items: Vec<SidebarItem>,
    },
}

fn default_true() -> bool {
    true
}

/// Convert a navigation tree into the renderer's sidebar shape.
#[must_use]
pub fn render(tree: &[NavNode]) -> Vec<SidebarItem> {
    tree.iter().map(render_node).collect()
}

fn render_node(node: &NavNode) -> SidebarItem {
    match node {
        NavNode::Doc(doc) => SidebarItem::Doc {
            id: doc.id.clone(),
            label: doc.label.clone(),
        },
        NavNode::Category(category) => SidebarItem::Category {
            label: category.label.clone(),
            collapsible: category.collapsible,
            collapsed: category.collapsed_by_default,
            items: render(&category.items),
        },
    }
}

/// Convert renderer sidebar items back into a navigation tree.
///
/// Inverse of [`render`]: `parse(render(tree)) == tree`.
#[must_use]
pub fn parse(items: Vec<SidebarItem>) -> Vec<NavNode> {
    items.into_iter().map(parse_item).collect()
}

fn parse_item(item: SidebarItem) -> NavNode {
    match item {
        SidebarItem::Doc { id, label } => NavNode::Doc(DocRef { id, label }),
        SidebarItem::Category {
            label,
            collapsible,
            collapsed,
            items,
        } => NavNode::Category(Category {
            label,
            collapsible,
            collapsed_by_default: collapsed,
            items: parse(items),
        }),
    }
}
