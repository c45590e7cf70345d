use std::fmt::Write as _;

use crate::types::BrokenLink;

/// Line printed after each broken link.
const SEPARATOR: &str = "--------------------";

/// Render the plain-text report printed to stdout.
pub fn render(broken: &[BrokenLink]) -> String {
    if broken.is_empty() {
        return "No broken internal links found.\n".to_string();
    }

    let mut out = format!("Found {} broken links:\n", broken.len());
    for link in broken {
        let _ = writeln!(out, "  Source: {}", link.source.display());
        let _ = writeln!(out, "  Link:   {}", link.link);
        let _ = writeln!(out, "  Target: {}", link.target.display());
        let _ = writeln!(out, "{SEPARATOR}");
    }
    return out;
}
