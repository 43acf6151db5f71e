//! Tree linearization.
//!
//! [`flatten`] yields every document of a tree in depth-first pre-order
//! without allocating the full list. [`paginate`] builds the "previous /
//! next page" links on top of it.

use std::iter::FusedIterator;
use std::slice;

use serde::Serialize;

use crate::node::{DocRef, NavNode};

/// Lazy depth-first iterator over the documents of a tree.
///
/// Created by [`flatten`]. Cloning the iterator, or calling [`flatten`]
/// again, restarts the sequence from the first document.
#[derive(Clone, Debug)]
pub struct Flatten<'a> {
    stack: Vec<slice::Iter<'a, NavNode>>,
}

/// Iterate over the documents of a tree in depth-first pre-order.
#[must_use]
pub fn flatten(tree: &[NavNode]) -> Flatten<'_> {
    Flatten {
        stack: vec![tree.iter()],
    }
}

impl<'a> Iterator for Flatten<'a> {
    type Item = &'a DocRef;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(NavNode::Doc(doc)) => return Some(doc),
                Some(NavNode::Category(category)) => self.stack.push(category.items.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl FusedIterator for Flatten<'_> {}

/// Position of a document in the linearized page order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageLink<'a> {
    /// The document itself.
    pub current: &'a DocRef,
    /// Document shown as "previous page", if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<&'a DocRef>,
    /// Document shown as "next page", if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<&'a DocRef>,
}

/// Compute previous/next links for every document in flatten order.
#[must_use]
pub fn paginate(tree: &[NavNode]) -> Vec<PageLink<'_>> {
    let docs: Vec<&DocRef> = flatten(tree).collect();
    docs.iter()
        .enumerate()
        .map(|(i, &current)| PageLink {
            current,
            previous: i.checked_sub(1).map(|p| docs[p]),
            next: docs.get(i + 1).copied(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids<'a>(docs: impl Iterator<Item = &'a DocRef>) -> Vec<&'a str> {
        docs.map(|d| d.id.as_str()).collect()
    }

    fn sample_tree() -> Vec<NavNode> {
        vec![
            NavNode::doc("intro"),
            NavNode::category(
                "Overview",
                vec![
                    NavNode::doc("market/economics"),
                    NavNode::category(
                        "Mechanics",
                        vec![NavNode::doc("market/mechanics"), NavNode::doc("market/web")],
                    ),
                ],
            ),
            NavNode::doc("misc/contact"),
        ]
    }

    #[test]
    fn test_flatten_guide_example() {
        let tree = vec![NavNode::category(
            "Guide",
            vec![
                NavNode::doc("intro"),
                NavNode::category("Setup", vec![NavNode::doc("install")]),
            ],
        )];

        let docs: Vec<&DocRef> = flatten(&tree).collect();

        assert_eq!(docs, vec![&DocRef::new("intro"), &DocRef::new("install")]);
    }

    #[test]
    fn test_flatten_preorder() {
        let tree = sample_tree();

        assert_eq!(
            ids(flatten(&tree)),
            vec![
                "intro",
                "market/economics",
                "market/mechanics",
                "market/web",
                "misc/contact"
            ]
        );
    }

    #[test]
    fn test_flatten_empty_tree() {
        assert_eq!(flatten(&[]).count(), 0);
    }

    #[test]
    fn test_flatten_skips_empty_categories() {
        let tree = vec![
            NavNode::category("Empty", Vec::new()),
            NavNode::doc("a"),
            NavNode::category("Nested", vec![NavNode::category("Empty", Vec::new())]),
            NavNode::doc("b"),
        ];

        assert_eq!(ids(flatten(&tree)), vec!["a", "b"]);
    }

    #[test]
    fn test_flatten_is_restartable() {
        let tree = sample_tree();
        let mut iter = flatten(&tree);
        let snapshot = iter.clone();

        iter.next();
        iter.next();

        assert_eq!(ids(snapshot), ids(flatten(&tree)));
        assert_eq!(iter.count(), 3);
    }

    #[test]
    fn test_flatten_is_lazy() {
        let tree = sample_tree();

        let first = flatten(&tree).next();

        assert_eq!(first.map(|d| d.id.as_str()), Some("intro"));
    }

    #[test]
    fn test_flatten_is_fused() {
        let tree = vec![NavNode::doc("only")];
        let mut iter = flatten(&tree);

        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_paginate_links_neighbours() {
        let tree = sample_tree();

        let pages = paginate(&tree);

        assert_eq!(pages.len(), 5);
        assert!(pages[0].previous.is_none());
        assert_eq!(pages[0].next.map(|d| d.id.as_str()), Some("market/economics"));
        assert_eq!(pages[2].current.id, "market/mechanics");
        assert_eq!(
            pages[2].previous.map(|d| d.id.as_str()),
            Some("market/economics")
        );
        assert_eq!(pages[2].next.map(|d| d.id.as_str()), Some("market/web"));
        assert!(pages[4].next.is_none());
    }

    #[test]
    fn test_paginate_single_page() {
        let tree = vec![NavNode::doc("only")];

        let pages = paginate(&tree);

        assert_eq!(pages.len(), 1);
        assert!(pages[0].previous.is_none());
        assert!(pages[0].next.is_none());
    }

    #[test]
    fn test_page_link_serialization() {
        let tree = vec![
            NavNode::Doc(DocRef::new("intro").with_label("Introduction")),
            NavNode::doc("setup"),
        ];

        let pages = paginate(&tree);
        let json = serde_json::to_value(&pages[0]).unwrap();

        assert_eq!(json["current"]["id"], "intro");
        assert_eq!(json["current"]["label"], "Introduction");
        assert!(json.get("previous").is_none());
        assert_eq!(json["next"]["id"], "setup");
        assert!(json["next"].get("label").is_none());
    }
}
