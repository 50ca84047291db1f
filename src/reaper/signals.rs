//! Signal handling: SIGTERM/SIGINT graceful shutdown for the reaper loop.
//!
//! Uses the `signal-hook` crate for safe signal registration. The reaper loop
//! polls [`SignalHandler`] between cycles (and during the inter-cycle pause)
//! rather than blocking on signals, so shutdown is a normal return path, not
//! an exceptional abort.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use signal_hook::consts::{SIGINT, SIGTERM};

/// Thread-safe shutdown flag shared between the signal handler and the loop.
///
/// `Ordering::Relaxed` is sufficient: the loop polls the flag every iteration
/// and no ordering with other atomics is required.
#[derive(Debug, Clone)]
pub struct SignalHandler {
    shutdown_flag: Arc<AtomicBool>,
}

impl SignalHandler {
    /// Create a handler and register OS signal hooks.
    ///
    /// SIGTERM and SIGINT both request shutdown. Registration is best-effort;
    /// failures are reported to stderr but not fatal.
    pub fn new() -> Self {
        let handler = Self::detached();

        if let Err(e) = signal_hook::flag::register(SIGTERM, Arc::clone(&handler.shutdown_flag)) {
            eprintln!("[FSJ-SIGNAL] failed to register SIGTERM: {e}");
        }
        if let Err(e) = signal_hook::flag::register(SIGINT, Arc::clone(&handler.shutdown_flag)) {
            eprintln!("[FSJ-SIGNAL] failed to register SIGINT: {e}");
        }

        handler
    }

    /// Create a handler with no OS hooks registered.
    ///
    /// For embedding the reaper loop in a host program (or test) that drives
    /// shutdown through [`SignalHandler::request_shutdown`] itself.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            shutdown_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Check whether a shutdown has been requested.
    #[must_use]
    pub fn should_shutdown(&self) -> bool {
        self.shutdown_flag.load(Ordering::Relaxed)
    }

    /// Programmatically request shutdown.
    pub fn request_shutdown(&self) {
        self.shutdown_flag.store(true, Ordering::Relaxed);
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}
