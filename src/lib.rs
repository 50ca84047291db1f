#![forbid(unsafe_code)]

//! fs_janitor (fsj) — two small filesystem hygiene tools sharing one crate.
//!
//! 1. **Pattern Matcher** — walks a project directory and reports which files
//!    a `.gitignore`-style pattern file would ignore. Deliberately simplified
//!    pattern semantics (see [`ignore::patterns`]), not full gitignore.
//! 2. **Age-Based Reaper** — a daemon that scans a trash directory once per
//!    second, deletes files older than an age threshold along with
//!    directories left empty, and records every action in an append-only log
//!    inside the trash directory.
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use fs_janitor::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use fs_janitor::ignore::scan::find_ignored_files;
//! use fs_janitor::reaper::cycle::run_cycle;
//! ```

pub mod prelude;

pub mod core;
pub mod ignore;
pub mod reaper;
