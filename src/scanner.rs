use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::{DirEntry, WalkDir};

use crate::error::Error;
use crate::types::Reference;

/// Inline link syntax: `[text](target)`. Neither part may be empty, text stops
/// at the first `]`, target stops at the first `)`.
pub const LINK_PATTERN: &str = r"\[([^\]]+)\]\(([^)]+)\)";

/// File name suffix identifying a document.
const DOCUMENT_SUFFIX: &str = ".md";

/// Walk `root` and return every document path, sorted by file name within each directory.
/// Entries the walker cannot list are logged and skipped.
pub fn discover_documents(root: &Path) -> Vec<PathBuf> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable directory entry");
                continue;
            },
            Ok(entry) => entry,
        };
        if !is_document(&entry) {
            continue;
        }
        documents.push(entry.into_path());
    }

    return documents;
}

/// Extract all `[text](target)` references from document content, left to right.
/// Matching runs over the whole text, so a reference may span a line break.
pub fn extract_references(content: &str, pattern: &Regex) -> Vec<Reference> {
    return pattern
        .captures_iter(content)
        .filter_map(|cap| {
            let text = cap.get(1)?.as_str().to_string();
            let target = cap.get(2)?.as_str().to_string();
            return Some(Reference { target, text });
        })
        .collect();
}

/// Whether a walk entry is a regular file (or a link to one) named `*.md`.
fn is_document(entry: &DirEntry) -> bool {
    #[allow(
        clippy::case_sensitive_file_extension_comparisons,
        reason = "only lowercase .md names count as documents"
    )]
    let named_like_document = entry.file_name().to_string_lossy().ends_with(DOCUMENT_SUFFIX);
    return named_like_document && entry.path().is_file();
}

/// Compile the reference pattern.
///
/// # Errors
///
/// Returns `Error::Pattern` if the pattern does not compile.
pub fn link_pattern() -> Result<Regex, Error> {
    return Ok(Regex::new(LINK_PATTERN)?);
}

/// Read one document as UTF-8 and extract its references.
/// The text buffer is dropped before returning.
///
/// # Errors
///
/// Returns `Error::ReadFailed` if the file cannot be read or is not valid UTF-8.
pub fn read_references(document: &Path, pattern: &Regex) -> Result<Vec<Reference>, Error> {
    let content = std::fs::read_to_string(document).map_err(|source| {
        return Error::ReadFailed {
            path: document.to_path_buf(),
            source,
        };
    })?;
    return Ok(extract_references(&content, pattern));
}
