//! Navigation tree validation.
//!
//! Validation walks the tree depth-first, pre-order: a category is checked
//! before any of its children, and the first failing node ends the walk.
//! The same tree and id set always produce the same error.

use std::collections::HashSet;
use std::hash::BuildHasher;

use crate::node::{NavNode, max_depth};

/// Depth past which sidebars get hard to read.
pub const DEFAULT_MAX_DEPTH_WARNING: usize = 4;

/// Authoring mistake found in a navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A document reference points at an id missing from the corpus.
    #[error("Document '{0}' is referenced in the sidebar but does not exist")]
    DanglingReference(String),
    /// A category has no items.
    #[error("Category '{0}' has no items")]
    EmptyCategory(String),
    /// A document is referenced more than once in the same tree.
    #[error("Document '{0}' is referenced more than once in the sidebar")]
    DuplicateReference(String),
}

/// Validate a navigation tree against the ids available in its project.
///
/// # Errors
///
/// Returns the first [`ValidationError`] met in depth-first pre-order.
pub fn validate<S: BuildHasher>(
    tree: &[NavNode],
    available_doc_ids: &HashSet<String, S>,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    validate_nodes(tree, available_doc_ids, &mut seen)
}

fn validate_nodes<'a, S: BuildHasher>(
    nodes: &'a [NavNode],
    available: &HashSet<String, S>,
    seen: &mut HashSet<&'a str>,
) -> Result<(), ValidationError> {
    for node in nodes {
        match node {
            NavNode::Doc(doc) => {
                if !available.contains(&doc.id) {
                    return Err(ValidationError::DanglingReference(doc.id.clone()));
                }
                if !seen.insert(doc.id.as_str()) {
                    return Err(ValidationError::DuplicateReference(doc.id.clone()));
                }
            }
            NavNode::Category(category) => {
                if category.items.is_empty() {
                    return Err(ValidationError::EmptyCategory(category.label.clone()));
                }
                validate_nodes(&category.items, available, seen)?;
            }
        }
    }
    Ok(())
}

/// Log a warning when a tree nests deeper than `limit`.
///
/// Depth is never an error; this only flags sidebars that render poorly.
/// Returns `true` if the warning fired.
pub fn warn_if_too_deep(project_id: &str, tree: &[NavNode], limit: usize) -> bool {
    let depth = max_depth(tree);
    if depth > limit {
        tracing::warn!(
            project = project_id,
            depth,
            limit,
            "Sidebar nests deeper than recommended"
        );
        return true;
    }
    false
}
