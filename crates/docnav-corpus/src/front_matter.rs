//! YAML front matter extraction.
//!
//! Only the fields that affect a document's identity are read; the rest of
//! the front matter belongs to the site renderer.

use serde::Deserialize;

/// Front matter fields used during discovery.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub(crate) struct FrontMatter {
    /// Replaces the file-name part of the document id.
    pub id: Option<String>,
}

/// Return the YAML block between leading `---` fences, if any.
pub(crate) fn front_matter_block(content: &str) -> Option<&str> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}

/// Parse the front matter of a document.
///
/// Documents without front matter get the default (no id override).
///
/// # Errors
///
/// Returns the YAML error if the front matter block is malformed.
pub(crate) fn parse_front_matter(content: &str) -> Result<FrontMatter, serde_yaml::Error> {
    match front_matter_block(content) {
        Some(block) if !block.trim().is_empty() => serde_yaml::from_str(block),
        _ => Ok(FrontMatter::default()),
    }
}
