//! Post directory scanner
//!
//! Reads every post in the posts directory (non-recursive, sorted by file
//! name), extracts its front matter and classifies the description.

use crate::classifier::Classifier;
use crate::frontmatter::extract_front_matter;
use crate::models::{char_len, PostDescription, UNTITLED};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Default extension of post files
pub const DEFAULT_EXTENSION: &str = "md";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Posts directory not found: {}", path.display())]
    PostsDirMissing { path: PathBuf },
}

/// Build the result for one post from its file content
pub fn describe_post(filename: &str, content: &str, classifier: &Classifier) -> PostDescription {
    let mut front_matter = extract_front_matter(content);

    let title = front_matter
        .remove("title")
        .unwrap_or_else(|| UNTITLED.to_string());
    let description = front_matter.remove("description").unwrap_or_default();
    let classification = classifier.classify(&description);

    PostDescription {
        filename: filename.to_string(),
        title,
        length: char_len(&description),
        description,
        status: classification.status,
        issue: classification.issue,
    }
}

/// List post files directly inside `dir`, in lexicographic file name order
fn collect_post_files(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .max_depth(Some(1))
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let suffix = format!(".{extension}");
    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to list entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();
        if entry.depth() == 0 || !path.is_file() {
            continue;
        }
        // Same as the `*.md` glob: a file named just `.md` counts too
        let name = entry.file_name().to_string_lossy();
        if name.ends_with(&suffix) {
            files.push(path.to_path_buf());
        }
    }
    files
}

/// Scan all posts in `dir`.
///
/// Files that cannot be read as UTF-8 text are logged and skipped.
pub fn scan_posts(
    dir: &Path,
    extension: &str,
    classifier: &Classifier,
) -> Result<Vec<PostDescription>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::PostsDirMissing {
            path: dir.to_path_buf(),
        });
    }

    let files = collect_post_files(dir, extension);
    debug!("Found {} .{} files in {}", files.len(), extension, dir.display());

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match std::fs::read_to_string(&path) {
            Ok(content) => results.push(describe_post(&filename, &content, classifier)),
            Err(e) => warn!("Failed to read {}: {}", filename, e),
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DescriptionStatus, Thresholds};
    use std::fs;

    fn classifier() -> Classifier {
        Classifier::with_thresholds(Thresholds::default())
    }

    fn write_post(dir: &Path, name: &str, front_matter: &str) {
        fs::write(dir.join(name), format!("---\n{front_matter}\n---\n\nBody text.\n")).unwrap();
    }

    #[test]
    fn test_missing_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("_posts");
        let err = scan_posts(&missing, "md", &classifier()).unwrap_err();
        assert!(matches!(err, ScanError::PostsDirMissing { .. }));
        assert!(err.to_string().contains("_posts"));
    }

    #[test]
    fn test_file_instead_of_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        fs::write(&file, "x").unwrap();
        assert!(scan_posts(&file, "md", &classifier()).is_err());
    }

    #[test]
    fn test_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let results = scan_posts(dir.path(), "md", &classifier()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "2024-03-01-c.md", "title: C");
        write_post(dir.path(), "2023-12-31-a.md", "title: A");
        write_post(dir.path(), "2024-01-15-b.md", "title: B");
        fs::write(dir.path().join("notes.txt"), "---\ntitle: no\n---\n").unwrap();
        fs::create_dir(dir.path().join("drafts.md")).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        write_post(&dir.path().join("nested"), "0000-deep.md", "title: Deep");

        let names: Vec<_> = scan_posts(dir.path(), "md", &classifier())
            .unwrap()
            .into_iter()
            .map(|p| p.filename)
            .collect();
        assert_eq!(
            names,
            vec!["2023-12-31-a.md", "2024-01-15-b.md", "2024-03-01-c.md"]
        );
    }

    #[test]
    fn test_scan_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.md", "a.md", "c.md"] {
            write_post(dir.path(), name, "description: x");
        }
        let first = scan_posts(dir.path(), "md", &classifier()).unwrap();
        let second = scan_posts(dir.path(), "md", &classifier()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_post_fields() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "hi.md", "title: \"Greeting\"\ndescription: \"Hi\"");
        write_post(dir.path(), "stub.md", "description: \"章節...\"");

        let results = scan_posts(dir.path(), "md", &classifier()).unwrap();
        let hi = &results[0];
        assert_eq!(hi.filename, "hi.md");
        assert_eq!(hi.title, "Greeting");
        assert_eq!(hi.length, 2);
        assert_eq!(hi.status, DescriptionStatus::TooShort);
        assert_eq!(hi.issue.as_deref(), Some("too short (2 < 80)"));

        let stub = &results[1];
        assert_eq!(stub.title, UNTITLED);
        assert_eq!(stub.status, DescriptionStatus::Placeholder);
    }

    #[test]
    fn test_no_front_matter_is_empty() {
        let post = describe_post("plain.md", "# No metadata\n", &classifier());
        assert_eq!(post.title, UNTITLED);
        assert_eq!(post.description, "");
        assert_eq!(post.length, 0);
        assert_eq!(post.status, DescriptionStatus::Empty);
    }

    #[test]
    fn test_unreadable_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "a.md", "description: ok");
        fs::write(dir.path().join("b.md"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
        write_post(dir.path(), "c.md", "description: ok");

        let names: Vec<_> = scan_posts(dir.path(), "md", &classifier())
            .unwrap()
            .into_iter()
            .map(|p| p.filename)
            .collect();
        assert_eq!(names, vec!["a.md", "c.md"]);
    }

    #[test]
    fn test_bare_extension_file_name_is_scanned() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), ".md", "title: Hidden\ndescription: \"Hi\"");
        write_post(dir.path(), "a.md", "title: A");
        fs::write(dir.path().join("md"), "---\ntitle: no\n---\n").unwrap();

        let results = scan_posts(dir.path(), "md", &classifier()).unwrap();
        let names: Vec<_> = results.iter().map(|p| p.filename.as_str()).collect();
        assert_eq!(names, vec![".md", "a.md"]);
        assert_eq!(results[0].title, "Hidden");
        assert_eq!(results[0].status, DescriptionStatus::TooShort);
    }

    #[test]
    fn test_custom_extension() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "a.md", "title: A");
        write_post(dir.path(), "b.markdown", "title: B");
        let results = scan_posts(dir.path(), "markdown", &classifier()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].filename, "b.markdown");
    }
}
