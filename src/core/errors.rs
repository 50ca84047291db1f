//! FSJ-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, FsjError>;

/// Top-level error type for fs_janitor.
#[derive(Debug, Error)]
pub enum FsjError {
    #[error("[FSJ-1001] directory does not exist: {path}")]
    MissingDirectory { path: PathBuf },

    #[error("[FSJ-1101] invalid ignore pattern `{pattern}`: {details}")]
    Pattern { pattern: String, details: String },

    #[error("[FSJ-2001] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[FSJ-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },
}

impl FsjError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingDirectory { .. } => "FSJ-1001",
            Self::Pattern { .. } => "FSJ-1101",
            Self::Io { .. } => "FSJ-2001",
            Self::Serialization { .. } => "FSJ-2101",
        }
    }

    /// Whether retrying might resolve the failure.
    ///
    /// Only IO failures qualify: a missing directory or a malformed pattern
    /// stays broken until the operator fixes it.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for FsjError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}
