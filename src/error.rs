//! Error types for collection and configuration loading
//!
//! Listing failures are absorbed by the caller (an unreadable directory is
//! shown as an empty one), but they are still carried as values so the
//! degradation is visible to tests and to the debug log.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while expanding a pattern into filesystem entries.
#[derive(Debug, Error)]
pub enum LseError {
    /// A directory read or tree walk failed.
    #[error("I/O error for path {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The pattern is not a valid glob.
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl LseError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LseError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// True when the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
