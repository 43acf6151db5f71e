//! Filesystem corpus.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::corpus::{CorpusError, DocumentCorpus};
use crate::doc_id::doc_id;
use crate::front_matter::parse_front_matter;
use crate::scanner::Scanner;

/// Corpus backed by a directory of markdown documents.
///
/// Every `.md` / `.mdx` file under the content root is a document. Its id is
/// the relative path without extension and without ordering prefixes; a
/// front matter `id` replaces the file-name part.
#[derive(Debug, Clone)]
pub struct FsCorpus {
    content_root: PathBuf,
}

impl FsCorpus {
    /// Create a corpus rooted at `content_root`.
    #[must_use]
    pub fn new(content_root: PathBuf) -> Self {
        Self { content_root }
    }
}

impl DocumentCorpus for FsCorpus {
    fn doc_ids(&self) -> Result<HashSet<String>, CorpusError> {
        let files = Scanner::new(self.content_root.clone()).scan()?;
        let mut ids = HashSet::with_capacity(files.len());

        for file in files {
            let content = fs::read_to_string(&file.path).map_err(|source| CorpusError::Io {
                path: file.path.clone(),
                source,
            })?;
            let front_matter =
                parse_front_matter(&content).map_err(|source| CorpusError::FrontMatter {
                    path: file.path.clone(),
                    source,
                })?;
            let id = doc_id(&file.rel_path, front_matter.id.as_deref());
            if !ids.insert(id.clone()) {
                tracing::warn!(id = %id, path = %file.path.display(), "Duplicate document id");
            }
        }

        tracing::debug!(
            root = %self.content_root.display(),
            documents = ids.len(),
            "Scanned content root"
        );
        Ok(ids)
    }
}
