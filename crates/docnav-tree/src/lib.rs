//! Navigation tree model for docnav.
//!
//! This crate provides:
//! - [`NavNode`]: a sidebar tree of document references and categories
//! - [`validate`]: checks a tree against the documents of its [`Project`]
//! - [`flatten`] and [`paginate`]: the linear "previous / next page" order
//! - [`render`] and [`parse`]: conversion to and from the [`SidebarItem`]
//!   shape consumed by the site renderer
//! - [`SidebarFile`]: loading authored sidebar files
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use docnav_tree::{NavNode, flatten, validate};
//!
//! let tree = vec![NavNode::category(
//!     "Guide",
//!     vec![
//!         NavNode::doc("intro"),
//!         NavNode::category("Setup", vec![NavNode::doc("install")]),
//!     ],
//! )];
//! let available: HashSet<String> = ["intro", "install"].map(String::from).into();
//!
//! assert!(validate(&tree, &available).is_ok());
//! let ids: Vec<_> = flatten(&tree).map(|doc| doc.id.as_str()).collect();
//! assert_eq!(ids, ["intro", "install"]);
//! ```

mod flatten;
mod node;
mod project;
mod sidebar;
mod sidebar_file;
mod validate;

pub use flatten::{Flatten, PageLink, flatten, paginate};
pub use node::{Category, DocRef, NavNode, count_nodes, max_depth};
pub use project::Project;
pub use sidebar::{SidebarItem, parse, render};
pub use sidebar_file::{SidebarError, SidebarFile, SidebarFormat};
pub use validate::{DEFAULT_MAX_DEPTH_WARNING, ValidationError, validate, warn_if_too_deep};
