//! Document discovery by filesystem walking.
//!
//! The scanner only finds candidate files; [`FsCorpus`](crate::FsCorpus)
//! reads them to settle their ids.

use std::fs;
use std::path::{Path, PathBuf};

use crate::corpus::CorpusError;
use crate::doc_id::is_doc_file;

/// Document file found under the content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DocFile {
    /// Absolute path.
    pub path: PathBuf,
    /// Path relative to the content root.
    pub rel_path: PathBuf,
}

/// Walks a content root collecting document files.
pub(crate) struct Scanner {
    root: PathBuf,
}

impl Scanner {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Scan the content root.
    ///
    /// Results are sorted by relative path so scans are reproducible.
    pub fn scan(&self) -> Result<Vec<DocFile>, CorpusError> {
        if !self.root.is_dir() {
            return Err(CorpusError::RootNotFound(self.root.clone()));
        }
        let mut files = Vec::new();
        self.scan_directory(&self.root, &mut files)?;
        files.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
        Ok(files)
    }

    fn scan_directory(&self, dir: &Path, files: &mut Vec<DocFile>) -> Result<(), CorpusError> {
        let io_error = |source| CorpusError::Io {
            path: dir.to_path_buf(),
            source,
        };
        for entry in fs::read_dir(dir).map_err(io_error)? {
            let entry = entry.map_err(io_error)?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            // Hidden entries and `_partials` never become pages
            if name.starts_with('.') || name.starts_with('_') {
                continue;
            }

            let path = entry.path();
            let file_type = entry.file_type().map_err(io_error)?;
            if file_type.is_dir() {
                self.scan_directory(&path, files)?;
            } else if file_type.is_file() && is_doc_file(&path) {
                let Ok(rel_path) = path.strip_prefix(&self.root) else {
                    continue;
                };
                files.push(DocFile {
                    rel_path: rel_path.to_path_buf(),
                    path,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    fn rel_paths(files: &[DocFile]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.rel_path.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_scan_finds_md_and_mdx() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("intro.md"), "# Intro").unwrap();
        let market = temp_dir.path().join("market");
        fs::create_dir(&market).unwrap();
        fs::write(market.join("economics.mdx"), "# Economics").unwrap();
        fs::write(market.join("chart.png"), "png").unwrap();

        let files = Scanner::new(temp_dir.path().to_path_buf()).scan().unwrap();

        assert_eq!(rel_paths(&files), vec!["intro.md", "market/economics.mdx"]);
        assert!(files[0].path.ends_with("intro.md"));
    }

    #[test]
    fn test_scan_skips_hidden_and_partials() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join(".hidden.md"), "# Hidden").unwrap();
        fs::write(temp_dir.path().join("_snippet.md"), "Partial").unwrap();
        fs::write(temp_dir.path().join("visible.md"), "# Visible").unwrap();
        let hidden_dir = temp_dir.path().join(".drafts");
        fs::create_dir(&hidden_dir).unwrap();
        fs::write(hidden_dir.join("draft.md"), "# Draft").unwrap();

        let files = Scanner::new(temp_dir.path().to_path_buf()).scan().unwrap();

        assert_eq!(rel_paths(&files), vec!["visible.md"]);
    }

    #[test]
    fn test_scan_sorted() {
        let temp_dir = create_test_dir();
        for name in ["c.md", "a.md", "b.md"] {
            fs::write(temp_dir.path().join(name), "x").unwrap();
        }

        let files = Scanner::new(temp_dir.path().to_path_buf()).scan().unwrap();

        assert_eq!(rel_paths(&files), vec!["a.md", "b.md", "c.md"]);
    }

    #[test]
    fn test_scan_empty_dir() {
        let temp_dir = create_test_dir();

        let files = Scanner::new(temp_dir.path().to_path_buf()).scan().unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_scan_missing_dir() {
        let result = Scanner::new(PathBuf::from("/nonexistent")).scan();

        assert!(matches!(result, Err(CorpusError::RootNotFound(_))));
    }
}
