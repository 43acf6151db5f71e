//! Corpus trait and error types.

use std::collections::HashSet;
use std::path::PathBuf;

/// Error returned while discovering documents.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// Content root does not exist or is not a directory.
    #[error("Content root not found: {}", .0.display())]
    RootNotFound(PathBuf),
    /// I/O error while walking the content root.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Document front matter is not valid YAML.
    #[error("Invalid front matter in {}: {source}", path.display())]
    FrontMatter {
        /// Document path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_yaml::Error,
    },
}

/// Source of the document ids a sidebar may reference.
///
/// The corpus is read-only: navigation validation only asks which ids exist.
pub trait DocumentCorpus: Send + Sync {
    /// Return every document id in the corpus.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError`] if the backing store can't be read.
    fn doc_ids(&self) -> Result<HashSet<String>, CorpusError>;
}
