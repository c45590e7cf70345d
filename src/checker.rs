//! Link classification, path resolution, and broken-link collection.

use std::path::{Component, Path, PathBuf};

use crate::error::Error;
use crate::scanner;
use crate::types::{BrokenLink, LinkKind};

/// Prefixes marking network and mail targets, which are never resolved.
const EXTERNAL_PREFIXES: [&str; 2] = ["http", "mailto:"];

/// Scan every document under `root` and return the internal links whose
/// target file does not exist, in walk order.
///
/// # Errors
///
/// Returns `Error::RootNotFound` if `root` is not a directory, or
/// `Error::ReadFailed` if any document cannot be read. No partial result is
/// returned on failure.
pub fn check_links(root: &Path) -> Result<Vec<BrokenLink>, Error> {
    if !root.is_dir() {
        return Err(Error::RootNotFound { path: root.to_path_buf() });
    }

    let pattern = scanner::link_pattern()?;
    let mut broken = Vec::new();

    for document in scanner::discover_documents(root) {
        let references = scanner::read_references(&document, &pattern)?;
        tracing::debug!(document = %document.display(), references = references.len(), "scanned");

        for reference in references {
            let LinkKind::Internal { file_part } = classify(&reference.target) else {
                continue;
            };
            let target = resolve_target(&document, &file_part);
            if target.exists() {
                continue;
            }
            tracing::debug!(
                text = %reference.text,
                link = %reference.target,
                target = %target.display(),
                "broken"
            );
            broken.push(BrokenLink {
                link: reference.target,
                source: document.clone(),
                target,
            });
        }
    }

    return Ok(broken);
}

/// Decide whether a raw link target is external, a same-document anchor, or
/// a file in the tree.
pub fn classify(target: &str) -> LinkKind {
    if target.starts_with('#') {
        return LinkKind::Anchor;
    }
    if EXTERNAL_PREFIXES.iter().any(|prefix| return target.starts_with(prefix)) {
        return LinkKind::External;
    }

    let file_part = target.split_once('#').map_or(target, |(file, _)| return file);
    if file_part.is_empty() {
        return LinkKind::Anchor;
    }
    return LinkKind::Internal { file_part: file_part.to_string() };
}

/// Collapse `.`, `..`, and repeated separators without touching the filesystem.
/// `..` past the root stays at the root; a leading `..` on a relative path is kept.
/// An empty result becomes `.`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        push_normalized_component(&mut components, component);
    }
    if components.is_empty() {
        return PathBuf::from(".");
    }
    return components.iter().collect();
}

/// Handle a single path component during normalization.
fn push_normalized_component<'a>(components: &mut Vec<Component<'a>>, component: Component<'a>) {
    match component {
        Component::CurDir => {},
        Component::ParentDir => match components.last() {
            Some(Component::Normal(_)) => {
                components.pop();
            },
            Some(Component::RootDir | Component::Prefix(_)) => {},
            Some(Component::CurDir | Component::ParentDir) | None => components.push(component),
        },
        Component::Normal(_) | Component::Prefix(_) | Component::RootDir => {
            components.push(component);
        },
    }
}

/// Join the document's directory with a link's file part and normalize.
pub fn resolve_target(document: &Path, file_part: &str) -> PathBuf {
    let document_dir = document.parent().unwrap_or(Path::new(""));
    return normalize_path(&document_dir.join(file_part));
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, reason = "test helpers unwrap freely")]
mod tests {
    use super::*;

    fn tree(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(path, content).unwrap();
        }
        return dir;
    }

    fn check(dir: &tempfile::TempDir) -> Vec<BrokenLink> {
        return check_links(dir.path()).unwrap();
    }

    #[test]
    fn classifies_targets() {
        assert_eq!(classify("https://example.com"), LinkKind::External, "https");
        assert_eq!(classify("httpfoo.md"), LinkKind::External, "bare `http` prefix");
        assert_eq!(classify("mailto:a@b.c"), LinkKind::External, "mailto");
        assert_eq!(classify("#top"), LinkKind::Anchor, "pure anchor");
        assert_eq!(classify("#guide.md"), LinkKind::Anchor, "leading `#` wins over a file-like name");
        assert_eq!(
            classify("guide.md#setup"),
            LinkKind::Internal { file_part: "guide.md".to_string() },
            "anchor suffix stripped"
        );
        assert_eq!(
            classify("a.md#x#y"),
            LinkKind::Internal { file_part: "a.md".to_string() },
            "split on first `#`"
        );
    }

    #[test]
    fn normalizes_lexically() {
        assert_eq!(normalize_path(Path::new("a/./b/../c.md")), PathBuf::from("a/c.md"), "dots");
        assert_eq!(normalize_path(Path::new("a//b.md")), PathBuf::from("a/b.md"), "separators");
        assert_eq!(normalize_path(Path::new("../x.md")), PathBuf::from("../x.md"), "leading ..");
        assert_eq!(normalize_path(Path::new("a/..")), PathBuf::from("."), "empty becomes dot");
        assert_eq!(normalize_path(Path::new("/../../x.md")), PathBuf::from("/x.md"), "above root");
    }

    #[test]
    fn resolves_relative_to_document_directory() {
        assert_eq!(
            resolve_target(Path::new("/docs/sub/a.md"), "../b.md"),
            PathBuf::from("/docs/b.md"),
            "parent hop"
        );
        assert_eq!(
            resolve_target(Path::new("/docs/a.md"), "/etc/x.md"),
            PathBuf::from("/etc/x.md"),
            "absolute target replaces the base"
        );
    }

    #[test]
    fn missing_target_is_reported() {
        let dir = tree(&[("a.md", "[see](b.md)")]);
        assert_eq!(
            check(&dir),
            vec![BrokenLink {
                link: "b.md".to_string(),
                source: dir.path().join("a.md"),
                target: dir.path().join("b.md"),
            }],
            "one broken link beside a.md"
        );
    }

    #[test]
    fn external_links_are_skipped() {
        let dir = tree(&[("a.md", "[site](https://example.com) [mail](mailto:x@y.z)")]);
        assert!(check(&dir).is_empty(), "external links never checked");
    }

    #[test]
    fn skipped_prefixes_ignore_existing_files() {
        let dir = tree(&[("a.md", "[h](http.md) [t](#top)"), ("http.md", "")]);
        assert!(check(&dir).is_empty(), "prefix decides, not the filesystem");
    }

    #[test]
    fn every_document_under_root_is_checked() {
        let dir = tree(&[
            (".doclinks.toml", "exclude = [\"arch\"]\n"),
            ("archive/old.md", "[gone](nowhere.md)"),
        ]);
        let broken = check(&dir);
        assert_eq!(broken.len(), 1, "no file in the tree narrows discovery: {broken:?}");
        assert_eq!(broken.first().unwrap().source, dir.path().join("archive/old.md"), "archived doc");
    }

    #[test]
    fn pure_anchor_is_skipped() {
        let dir = tree(&[("a.md", "[anchor](#top)")]);
        assert!(check(&dir).is_empty(), "same-document anchor");
    }

    #[test]
    fn parent_directory_link_resolves() {
        let dir = tree(&[("sub/a.md", "[parent](../b.md)"), ("b.md", "# B")]);
        assert!(check(&dir).is_empty(), "../b.md exists at the root");
    }

    #[test]
    fn anchor_suffix_is_kept_in_link_but_not_target() {
        let dir = tree(&[("a.md", "[x](c.md#sec)")]);
        let broken = check(&dir);
        assert_eq!(broken.len(), 1, "one record");
        let record = broken.first().unwrap();
        assert_eq!(record.link, "c.md#sec", "original link text");
        assert_eq!(record.target, dir.path().join("c.md"), "anchor stripped");
    }

    #[test]
    fn existing_file_with_anchor_is_sound() {
        let dir = tree(&[("a.md", "[x](c.md#sec)"), ("c.md", "## sec")]);
        assert!(check(&dir).is_empty(), "anchor ignored for existence");
    }

    #[test]
    fn directory_targets_count_as_existing() {
        let dir = tree(&[("a.md", "[dir](sub/)"), ("sub/b.md", "")]);
        assert!(check(&dir).is_empty(), "existence check accepts directories");
    }

    #[test]
    fn records_follow_walk_order() {
        let dir = tree(&[
            ("a.md", "[1](x.md) [2](y.md)"),
            ("b/c.md", "[3](z.md)"),
        ]);
        let links: Vec<String> = check(&dir).into_iter().map(|b| return b.link).collect();
        assert_eq!(links, vec!["x.md", "y.md", "z.md"], "document then in-document order");
    }

    #[test]
    fn repeated_runs_are_identical() {
        let dir = tree(&[("a.md", "[1](gone.md)"), ("sub/b.md", "[2](../also-gone.md#h)")]);
        assert_eq!(check(&dir), check(&dir), "idempotent");
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = check_links(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::RootNotFound { .. }), "got {err:?}");
    }

    #[test]
    fn unreadable_document_fails_the_whole_check() {
        let dir = tree(&[("a.md", "[x](gone.md)")]);
        std::fs::write(dir.path().join("b.md"), [0xc3_u8, 0x28_u8]).unwrap();
        let err = check_links(dir.path()).unwrap_err();
        assert!(matches!(err, Error::ReadFailed { .. }), "got {err:?}");
    }
}
