//! Core domain types for doclinks references and findings.
use std::path::PathBuf;

/// A dangling internal link. The resolved `target` did not exist when the
/// check ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    /// Link target exactly as written, including any `#anchor` suffix.
    pub link: String,
    /// Document containing the link.
    pub source: PathBuf,
    /// Normalized path the link resolved to.
    pub target: PathBuf,
}

/// How a link target is treated by the checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    /// Same-document anchor such as `#usage`. Never checked.
    Anchor,
    /// Network or mail link. Never checked.
    External,
    /// Points at another file in the tree.
    Internal {
        /// Target with any `#anchor` suffix removed.
        file_part: String,
    },
}

/// Parsed from `[text](target)` syntax by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Raw target between the parentheses.
    pub target: String,
    /// Display text between the brackets.
    pub text: String,
}
