use crate::error::Error;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render an error as valid markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic.
///
/// Each variant produces a block with what happened and, where there is one,
/// how to fix it.
pub fn render_error(e: &Error) -> String {
    match e {
        Error::RootNotFound { path } => format!("\
# Error: Root Not Found

`{}` is not a directory.

## Fix

Pass the directory to scan explicitly:

    doclinks check path/to/docs
", path.display()),

        Error::ReadFailed { path, source } => format!("\
# Error: Unreadable Document

Could not read `{}`: {source}

Documents must be readable UTF-8 text. No results were reported because the
check did not finish.
", path.display()),

        Error::Pattern(e) => format!("\
# Error: Link Pattern

{e}
"),

        Error::Io(e) => format!("\
# Error: I/O

{e}
"),
    }
}
