//! Document id derivation from file paths.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Ordering prefix authors put in front of file and directory names.
static NUMBER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s*[-_.]+\s*").unwrap());

/// Document file extensions.
pub(crate) const DOC_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Strip an ordering prefix such as `01-`, `2_` or `3.` from a name.
///
/// A name that is nothing but a prefix (`"01-"`) is kept as is.
pub(crate) fn strip_number_prefix(name: &str) -> &str {
    match NUMBER_PREFIX_RE.find(name) {
        Some(m) if m.end() < name.len() => &name[m.end()..],
        _ => name,
    }
}

/// Derive a document id from a path relative to the content root.
///
/// Examples:
/// - `intro.md` -> `"intro"`
/// - `market/economics.mdx` -> `"market/economics"`
/// - `01-guide/02-setup.md` -> `"guide/setup"`
///
/// `id_override` (from front matter) replaces the last segment.
pub(crate) fn doc_id(rel_path: &Path, id_override: Option<&str>) -> String {
    let mut segments: Vec<String> = rel_path
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .map(|c| strip_number_prefix(&c.as_os_str().to_string_lossy()).to_owned())
        .collect();

    let last = match id_override {
        Some(id) => id.to_owned(),
        None => {
            let stem = rel_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            strip_number_prefix(&stem).to_owned()
        }
    };
    segments.push(last);
    segments.join("/")
}

/// Whether a file name has a document extension.
pub(crate) fn is_doc_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| DOC_EXTENSIONS.contains(&e))
}
