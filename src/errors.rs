//! Error types for orphaned code cleanup
//!
//! File access is the only failure a normal run can hit. Manifest and
//! pattern errors only arise when callers bring their own configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level cleanup error type
#[derive(Debug, Error)]
pub enum CleanupError {
    /// A target file could not be read, written, or replaced
    #[error("cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest file is unreadable or not a valid manifest document
    #[error("invalid manifest {}: {message}", .path.display())]
    Manifest { path: PathBuf, message: String },

    /// Progress lines could not be written
    #[error("failed to write progress output: {0}")]
    Output(#[source] std::io::Error),

    /// A custom rewrite rule carries an invalid regular expression
    #[error("invalid rewrite pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl CleanupError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CleanupError::FileAccess {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CleanupError>;
