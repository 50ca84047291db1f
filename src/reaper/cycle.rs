//! One cleanup cycle: bottom-up walk, stale-file deletion, empty-dir removal.
//!
//! Children are visited before their parent directory is considered, so a
//! directory whose last stale file is deleted in a cycle is removed within
//! that same cycle. Every deletion is individually committed; per-item
//! failures are logged to the trash log and never abort the cycle.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::reaper::trash_log::TrashLog;

/// Tally of one cleanup cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Stale files deleted.
    pub files_removed: usize,
    /// Empty directories removed.
    pub dirs_removed: usize,
    /// Per-item failures logged and skipped.
    pub errors: usize,
}

impl CycleReport {
    /// Whether the cycle deleted anything.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.files_removed > 0 || self.dirs_removed > 0
    }
}

/// Run one bottom-up cleanup pass over `trash_dir`.
///
/// A file is stale when `now - mtime` is strictly greater than `age_thr`,
/// with `now` captured once at cycle start. The log's own file is explicitly
/// excluded from deletion scanning, so it survives even when old enough to
/// match the age rule. The trash root itself is never removed.
pub fn run_cycle(trash_dir: &Path, age_thr: Duration, log: &TrashLog) -> CycleReport {
    let now = SystemTime::now();
    let mut report = CycleReport::default();
    visit_dir(trash_dir, now, age_thr, log, &mut report);
    report
}

fn visit_dir(
    dir: &Path,
    now: SystemTime,
    age_thr: Duration,
    log: &TrashLog,
    report: &mut CycleReport,
) {
    // Unreadable directories are skipped whole; their contents are simply
    // retried on the next cycle if the condition clears.
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    let mut files: Vec<PathBuf> = Vec::new();
    let mut subdirs: Vec<PathBuf> = Vec::new();
    for entry in entries.flatten() {
        match entry.file_type() {
            Ok(ft) if ft.is_dir() => subdirs.push(entry.path()),
            Ok(ft) if ft.is_file() => files.push(entry.path()),
            // Symlinks and special files are neither followed nor deleted;
            // a vanished entry takes the same silent path.
            _ => {}
        }
    }

    // Children first, so subdirectories can become empty below.
    for sub in &subdirs {
        visit_dir(sub, now, age_thr, log, report);
    }

    for file in &files {
        if file == log.path() {
            continue;
        }
        match remove_if_stale(file, now, age_thr) {
            Ok(true) => {
                log.append(&format!("Removed file: {}", file.display()));
                report.files_removed += 1;
            }
            Ok(false) => {}
            Err(e) => {
                log.append(&format!("Error removing file {}: {e}", file.display()));
                report.errors += 1;
            }
        }
    }

    for sub in &subdirs {
        match remove_if_empty(sub) {
            Ok(true) => {
                log.append(&format!("Removed empty directory: {}", sub.display()));
                report.dirs_removed += 1;
            }
            Ok(false) => {}
            Err(e) => {
                log.append(&format!("Error removing directory {}: {e}", sub.display()));
                report.errors += 1;
            }
        }
    }
}

fn remove_if_stale(path: &Path, now: SystemTime, age_thr: Duration) -> io::Result<bool> {
    let mtime = fs::metadata(path)?.modified()?;
    // A modification time in the future counts as age zero.
    let age = now.duration_since(mtime).unwrap_or(Duration::ZERO);
    if age > age_thr {
        fs::remove_file(path)?;
        return Ok(true);
    }
    Ok(false)
}

fn remove_if_empty(dir: &Path) -> io::Result<bool> {
    if fs::read_dir(dir)?.next().is_none() {
        fs::remove_dir(dir)?;
        return Ok(true);
    }
    Ok(false)
}
