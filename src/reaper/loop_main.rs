//! Reaper daemon loop: one cleanup cycle per second until shutdown.
//!
//! Single-threaded and blocking. The loop body runs a cycle, appends exactly
//! one summary line, then pauses for one second. The pause polls the shutdown
//! flag every 100ms so a signal interrupts promptly; shutdown is a normal
//! return with a final log write, never an exceptional abort.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use crate::core::errors::{FsjError, Result};
use crate::core::paths::resolve_absolute_path;
use crate::reaper::cycle::{CycleReport, run_cycle};
use crate::reaper::signals::SignalHandler;
use crate::reaper::trash_log::TrashLog;

/// Pause between cleanup cycles.
const CYCLE_PAUSE: Duration = Duration::from_secs(1);
/// Granularity at which the pause re-checks the shutdown flag.
const PAUSE_POLL_STEP: Duration = Duration::from_millis(100);

/// The trash reaper daemon.
pub struct Reaper {
    trash_dir: PathBuf,
    age_thr: Duration,
    log: TrashLog,
    signals: SignalHandler,
}

impl Reaper {
    /// Build a reaper for `trash_dir` with an age threshold in whole seconds.
    ///
    /// The directory must exist up front; this is the only fatal precondition
    /// and it is checked before the loop is ever entered.
    pub fn new(trash_dir: &Path, age_thr_secs: u64, signals: SignalHandler) -> Result<Self> {
        let trash_dir = resolve_absolute_path(trash_dir);
        if !trash_dir.is_dir() {
            return Err(FsjError::MissingDirectory { path: trash_dir });
        }

        let log = TrashLog::new(&trash_dir);
        Ok(Self {
            trash_dir,
            age_thr: Duration::from_secs(age_thr_secs),
            log,
            signals,
        })
    }

    /// The trash log this reaper appends to.
    #[must_use]
    pub fn log(&self) -> &TrashLog {
        &self.log
    }

    /// Run until shutdown is requested (signal or programmatic).
    ///
    /// Logs the startup banner, then loops: cycle, summary line, one-second
    /// interruptible pause. On shutdown the closing banner is appended and
    /// the method returns cleanly — every deletion was already committed, so
    /// there is nothing to roll back.
    pub fn run(&self) -> Result<()> {
        self.log.append("=== Starting trash cleaner ===");
        self.log
            .append(&format!("Trash folder: {}", self.trash_dir.display()));
        self.log.append(&format!(
            "Age threshold: {} seconds",
            self.age_thr.as_secs()
        ));

        while !self.signals.should_shutdown() {
            let report = self.run_one_cycle();
            // Exactly one summary line per cycle, however many items moved.
            if report.has_changes() {
                self.log.append("Cleanup cycle completed with changes");
            } else {
                self.log.append("Cleanup cycle completed - no changes");
            }

            self.pause();
        }

        self.log.append("=== Stopping trash cleaner ===");
        Ok(())
    }

    /// Run a single cleanup cycle without the loop machinery.
    pub fn run_one_cycle(&self) -> CycleReport {
        run_cycle(&self.trash_dir, self.age_thr, &self.log)
    }

    /// Sleep for [`CYCLE_PAUSE`], returning early on a shutdown request.
    fn pause(&self) {
        let deadline = Instant::now() + CYCLE_PAUSE;
        while Instant::now() < deadline {
            if self.signals.should_shutdown() {
                return;
            }
            thread::sleep(PAUSE_POLL_STEP);
        }
    }
}
