//! Ignore scanner: ties pattern parsing and the file walk into one report.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::errors::{FsjError, Result};
use crate::core::paths::resolve_absolute_path;
use crate::ignore::patterns::{self, PATTERN_FILE_NAME};
use crate::ignore::walker::walk_files;

/// One ignored file: its absolute path plus the exact pattern text that
/// claimed it. At most one pattern is recorded per file — the first match in
/// pattern-file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgnoredFile {
    /// Absolute path of the ignored file.
    pub path: PathBuf,
    /// Verbatim pattern text responsible for the classification.
    pub pattern: String,
}

/// Scan `project_dir` and report every file its `.gitignore` would ignore.
///
/// A missing project directory is the only fatal precondition. A missing
/// pattern file is an empty report, not an error. Report order follows
/// enumeration order of the walk.
pub fn find_ignored_files(project_dir: &Path) -> Result<Vec<IgnoredFile>> {
    let project_dir = resolve_absolute_path(project_dir);
    if !project_dir.exists() {
        return Err(FsjError::MissingDirectory { path: project_dir });
    }

    let pattern_file = project_dir.join(PATTERN_FILE_NAME);
    if !pattern_file.exists() {
        return Ok(Vec::new());
    }

    let patterns = patterns::parse_pattern_file(&pattern_file)?;
    let mut ignored = Vec::new();

    for file in walk_files(&project_dir)? {
        // The walk stays inside project_dir, so strip_prefix cannot fail.
        let relative = file
            .strip_prefix(&project_dir)
            .unwrap_or(&file)
            .to_string_lossy();

        if let Some(pattern) = patterns::first_match(&patterns, &relative) {
            ignored.push(IgnoredFile {
                path: file.clone(),
                pattern: pattern.raw().to_string(),
            });
        }
    }

    Ok(ignored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    fn pattern_for<'a>(report: &'a [IgnoredFile], suffix: &str) -> Option<&'a str> {
        report
            .iter()
            .find(|f| f.path.to_string_lossy().ends_with(suffix))
            .map(|f| f.pattern.as_str())
    }

    #[test]
    fn no_pattern_file_means_empty_report() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("anything.log"));

        let report = find_ignored_files(dir.path()).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn missing_project_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = find_ignored_files(&dir.path().join("absent")).unwrap_err();
        assert_eq!(err.code(), "FSJ-1001");
    }

    #[test]
    fn exact_pattern_claims_exact_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "secret.txt\n").unwrap();
        touch(&dir.path().join("secret.txt"));
        touch(&dir.path().join("sub/secret.txt"));

        let report = find_ignored_files(dir.path()).unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].pattern, "secret.txt");
        assert!(report[0].path.is_absolute());
        assert!(report[0].path.ends_with("secret.txt"));
        assert!(!report[0].path.to_string_lossy().contains("sub"));
    }

    #[test]
    fn dir_prefix_pattern_claims_subtree_not_siblings() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "build/\n").unwrap();
        touch(&dir.path().join("build/out.o"));
        touch(&dir.path().join("build/deep/lib.a"));
        touch(&dir.path().join("builder.txt"));

        let report = find_ignored_files(dir.path()).unwrap();
        assert_eq!(report.len(), 2);
        assert!(pattern_for(&report, "builder.txt").is_none());
        assert_eq!(pattern_for(&report, "out.o"), Some("build/"));
    }

    #[test]
    fn wildcard_pattern_keeps_substring_quirk() {
        // `app.logtxt` is ignored too: the simplified glob is a substring
        // search, intentionally diverging from real gitignore semantics.
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "*.log\n").unwrap();
        touch(&dir.path().join("app.log"));
        touch(&dir.path().join("app.logtxt"));
        touch(&dir.path().join("readme.md"));

        let report = find_ignored_files(dir.path()).unwrap();
        assert_eq!(pattern_for(&report, "app.log"), Some("*.log"));
        assert_eq!(pattern_for(&report, "app.logtxt"), Some("*.log"));
        assert!(pattern_for(&report, "readme.md").is_none());
    }

    #[test]
    fn git_subtree_is_never_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "*.pack\nconfig\n").unwrap();
        touch(&dir.path().join(".git/config"));
        touch(&dir.path().join(".git/objects/data.pack"));
        touch(&dir.path().join("config"));

        let report = find_ignored_files(dir.path()).unwrap();
        assert_eq!(report.len(), 1);
        assert!(!report[0].path.to_string_lossy().contains(".git"));
    }

    #[test]
    fn first_matching_pattern_gets_attribution() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "*.log\napp.log\n").unwrap();
        touch(&dir.path().join("app.log"));

        let report = find_ignored_files(dir.path()).unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].pattern, "*.log");
    }

    #[test]
    fn unmatched_files_are_omitted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "tmp/\n").unwrap();
        touch(&dir.path().join("src/main.rs"));

        let report = find_ignored_files(dir.path()).unwrap();
        assert!(report.is_empty());
    }
}
