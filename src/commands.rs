//! CLI command bodies for doclinks: check and info.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::checker;
use crate::error;
use crate::report;

/// Exit code for a finished check that found broken links in strict mode.
pub const EXIT_BROKEN: u8 = 1;

/// Scan `root`, print the report to stdout, and pick the exit code.
///
/// Broken links only fail the process when `fail_on_broken` is set.
///
/// # Errors
///
/// Returns errors from root resolution or document reads.
pub fn check(root: &Path, fail_on_broken: bool) -> Result<ExitCode, error::Error> {
    let root = absolute_root(root)?;
    eprintln!("Checking links in {}...", root.display());

    let broken = checker::check_links(&root)?;
    print!("{}", report::render(&broken));

    if !broken.is_empty() && fail_on_broken {
        return Ok(ExitCode::from(EXIT_BROKEN));
    }
    return Ok(ExitCode::SUCCESS);
}

/// Output the reference sheet for `root`.
///
/// # Errors
///
/// Returns `Error::Io` if the current directory cannot be determined.
pub fn info(root: &Path) -> Result<(), error::Error> {
    let root = absolute_root(root)?;
    crate::info::run(&root);
    return Ok(());
}

/// Make `root` absolute against the current directory and normalize it lexically.
/// Symlinks are not resolved.
///
/// # Errors
///
/// Returns `Error::Io` if the current directory cannot be determined.
fn absolute_root(root: &Path) -> Result<PathBuf, error::Error> {
    let absolute = std::path::absolute(root)?;
    return Ok(checker::normalize_path(&absolute));
}
