use std::path::Path;

use crate::scanner;

/// Output the doclinks reference sheet, describing `root` in the state section.
pub fn run(root: &Path) {
    let state = gather_state(root);
    print!("{}", render(&state));
}

// ── State gathering ───────────────────────────────────────────────────

/// What `info` reports about the directory it would scan.
struct CurrentState {
    /// Number of documents that `check` would read, if the root exists.
    documents: Option<usize>,
    /// Root directory described.
    root: String,
}

/// Inspect `root` without failing; a missing root shows up as no document count.
fn gather_state(root: &Path) -> CurrentState {
    let documents = root
        .is_dir()
        .then(|| return scanner::discover_documents(root).len());

    return CurrentState {
        documents,
        root: root.display().to_string(),
    };
}

// ── Markdown output ───────────────────────────────────────────────────

/// Render the full reference sheet.
fn render(state: &CurrentState) -> String {
    let version = env!("CARGO_PKG_VERSION");
    let documents = state
        .documents
        .map_or_else(|| return "root not found".to_string(), |n| return n.to_string());

    return format!(
        "\
# doclinks {version}

Find relative markdown links that point at files which no longer exist.

## Link Syntax

    [text](other.md)              checked
    [text](../dir/other.md#part)  checked, `#part` ignored for existence
    [text](#part)                 skipped (same document)
    [text](https://...)           skipped (anything starting with `http`)
    [text](mailto:...)            skipped

Targets resolve relative to the directory of the document containing them.
Only files whose name ends in `.md` are scanned.

## Usage

    doclinks check [ROOT]               Scan ROOT (default: docs)
    doclinks check --fail-on-broken     Exit 1 when broken links are found
    doclinks check -v                   Log each document to stderr

## Exit Codes

| Code | Meaning                                          |
|------|--------------------------------------------------|
| 0    | Check finished (broken links only fail in strict mode) |
| 1    | Broken links found in strict mode                |
| 2    | Check could not finish                           |

Every `.md` file under ROOT is scanned; the root is the only input.

## Current State

- Root: {}
- Documents: {documents}
",
        state.root
    );
}
