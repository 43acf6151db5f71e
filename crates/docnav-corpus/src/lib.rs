//! Document discovery for docnav projects.
//!
//! A project's sidebar may only reference documents that exist under its
//! content root. This crate answers which ids those are:
//!
//! - [`DocumentCorpus`] trait, the read-only view validation depends on
//! - [`FsCorpus`] scanning a directory of `.md` / `.mdx` files
//! - [`MockCorpus`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use docnav_corpus::{DocumentCorpus, FsCorpus};
//!
//! let corpus = FsCorpus::new(PathBuf::from("proof-market"));
//! let ids = corpus.doc_ids()?;
//! assert!(ids.contains("market/economics"));
//! ```

mod corpus;
mod doc_id;
mod front_matter;
mod fs;
#[cfg(feature = "mock")]
mod mock;
mod scanner;

pub use corpus::{CorpusError, DocumentCorpus};
pub use fs::FsCorpus;
#[cfg(feature = "mock")]
pub use mock::MockCorpus;
