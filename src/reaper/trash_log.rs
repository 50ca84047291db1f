//! Append-only trash log: one timestamped line per event.
//!
//! Each call assembles the full line in memory and writes it with a single
//! `write_all` through a freshly opened append handle (open/append/close per
//! call — no persistent handle to lose on a crash). Fallback chain when the
//! file cannot be written: stderr with an `[FSJ-LOG]` prefix, then silent
//! discard. The daemon must never crash for a logging failure.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Fixed log file name inside the target trash directory.
pub const LOG_FILE_NAME: &str = "clean_trash.log";

/// Timestamp layout for every log line: `[YYYY-MM-DD HH:MM:SS]`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Stateful logger bound to a fixed log path at construction.
#[derive(Debug, Clone)]
pub struct TrashLog {
    path: PathBuf,
}

impl TrashLog {
    /// Create a logger writing to `<trash_dir>/clean_trash.log`.
    #[must_use]
    pub fn new(trash_dir: &Path) -> Self {
        Self {
            path: trash_dir.join(LOG_FILE_NAME),
        }
    }

    /// Path of the log file (the cycle walk excludes it from deletion).
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamped line. Never truncates prior content.
    pub fn append(&self, message: &str) {
        let line = format!("[{}] {message}\n", Local::now().format(TIMESTAMP_FORMAT));

        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()));

        if let Err(e) = result {
            eprintln!("[FSJ-LOG] failed to append to {}: {e}", self.path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn log_lands_in_trash_dir_under_fixed_name() {
        let dir = tempfile::tempdir().unwrap();
        let log = TrashLog::new(dir.path());
        assert_eq!(log.path(), dir.path().join("clean_trash.log"));
    }

    #[test]
    fn append_creates_file_and_writes_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let log = TrashLog::new(dir.path());

        log.append("Removed file: /tmp/x");

        let content = fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("Removed file: /tmp/x"));
    }

    #[test]
    fn append_never_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let log = TrashLog::new(dir.path());

        log.append("first");
        log.append("second");

        let content = fs::read_to_string(log.path()).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("first"));
        assert!(content.contains("second"));
    }

    #[test]
    fn lines_carry_bracketed_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let log = TrashLog::new(dir.path());

        log.append("banner");

        let content = fs::read_to_string(log.path()).unwrap();
        let line = content.lines().next().unwrap();
        // [YYYY-MM-DD HH:MM:SS] is 21 chars followed by a space.
        assert_eq!(line.as_bytes()[0], b'[');
        assert_eq!(line.as_bytes()[20], b']');
        assert_eq!(&line[21..23], " b");
        assert_eq!(&line[5..6], "-");
        assert_eq!(&line[14..15], ":");
    }

    #[test]
    fn append_to_unwritable_path_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let log = TrashLog::new(&dir.path().join("no/such/subdir"));
        log.append("dropped on the floor");
    }
}
