//! Crate-level error types for doclinks diagnostics.
use std::path::PathBuf;

/// Everything that can stop a check from completing. A broken link is not an
/// error; it is reported as data. Each variant names the file or the reason.
#[allow(clippy::error_impl_error, reason = "crate-internal error type in binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Underlying I/O error not tied to a specific document.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// The reference pattern failed to compile.
    #[error("invalid link pattern: {0}")]
    Pattern(
        /// The wrapped regex error.
        #[from]
        regex::Error,
    ),

    /// A discovered document could not be opened or decoded as UTF-8.
    #[error("cannot read {}: {source}", path.display())]
    ReadFailed {
        /// Document that failed to read.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// The directory to scan does not exist or is not a directory.
    #[error("root not found: {}", path.display())]
    RootNotFound {
        /// Path that was supplied as the scan root.
        path: PathBuf,
    },
}
