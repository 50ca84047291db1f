//! Recursive file enumeration for the ignore scanner.
//!
//! Single-threaded depth-first walk. Any directory literally named `.git` is
//! pruned, so nothing under a `.git` segment is ever scanned or reported,
//! regardless of pattern file contents. One walk per scan, no caching.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::errors::{FsjError, Result};

/// Directory name pruned from every traversal.
const GIT_DIR_NAME: &str = ".git";

/// Enumerate every regular file under `root`, depth-first.
///
/// `root` must already be resolved to an absolute path; returned paths
/// inherit that. A failure to read `root` itself is fatal; unreadable
/// subdirectories are skipped, matching the reference walk which silently
/// ignores them. Symlinks are not followed.
pub fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = fs::read_dir(root).map_err(|e| FsjError::io(root, e))?;
    collect(entries, &mut files);
    Ok(files)
}

fn collect(entries: fs::ReadDir, files: &mut Vec<PathBuf>) {
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            if entry.file_name() == GIT_DIR_NAME {
                continue;
            }
            if let Ok(sub) = fs::read_dir(entry.path()) {
                collect(sub, files);
            }
        } else if file_type.is_file() {
            files.push(entry.path());
        }
        // Symlinks and special files fall through untouched.
    }
}
