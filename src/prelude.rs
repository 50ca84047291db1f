//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use fs_janitor::prelude::*;
//! ```

// Core
pub use crate::core::errors::{FsjError, Result};
pub use crate::core::paths::resolve_absolute_path;

// Pattern Matcher
pub use crate::ignore::patterns::{IgnorePattern, parse_pattern_file};
pub use crate::ignore::scan::{IgnoredFile, find_ignored_files};

// Reaper
pub use crate::reaper::cycle::{CycleReport, run_cycle};
#[cfg(feature = "daemon")]
pub use crate::reaper::loop_main::Reaper;
#[cfg(feature = "daemon")]
pub use crate::reaper::signals::SignalHandler;
pub use crate::reaper::trash_log::TrashLog;
