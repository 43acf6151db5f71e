//! Mock corpus implementation for testing.
//!
//! Provides [`MockCorpus`] for unit testing without filesystem access.

use std::collections::HashSet;
use std::sync::RwLock;

use crate::corpus::{CorpusError, DocumentCorpus};

/// In-memory corpus for tests.
///
/// # Example
///
/// ```ignore
/// use docnav_corpus::{DocumentCorpus, MockCorpus};
///
/// let corpus = MockCorpus::new().with_doc("intro").with_doc("install");
/// assert!(corpus.doc_ids()?.contains("intro"));
/// ```
#[derive(Debug, Default)]
pub struct MockCorpus {
    ids: RwLock<HashSet<String>>,
}

impl MockCorpus {
    /// Create an empty mock corpus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document id.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_doc(self, id: impl Into<String>) -> Self {
        self.ids.write().unwrap().insert(id.into());
        self
    }

    /// Add several document ids.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_docs<I, S>(self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids
            .write()
            .unwrap()
            .extend(ids.into_iter().map(Into::into));
        self
    }

    /// Remove a document id, simulating a deleted file.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn remove_doc(&self, id: &str) {
        self.ids.write().unwrap().remove(id);
    }
}

impl DocumentCorpus for MockCorpus {
    fn doc_ids(&self) -> Result<HashSet<String>, CorpusError> {
        Ok(self.ids.read().unwrap().clone())
    }
}
