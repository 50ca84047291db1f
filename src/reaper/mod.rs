//! Age-Based Reaper: trash log, cleanup cycle, daemon loop, signal handling.

pub mod cycle;
#[cfg(feature = "daemon")]
pub mod loop_main;
#[cfg(feature = "daemon")]
pub mod signals;
pub mod trash_log;
