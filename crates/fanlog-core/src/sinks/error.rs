//! Sink error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors a sink write can produce
#[derive(Error, Debug)]
pub enum SinkError {
    /// Appending to a file failed
    #[error("failed to append to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to standard output failed
    #[error("console write failed: {0}")]
    Console(#[source] std::io::Error),
}

impl SinkError {
    /// Create a file append error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Path involved in the failure, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            SinkError::Io { path, .. } => Some(path.as_path()),
            SinkError::Console(_) => None,
        }
    }
}

pub type SinkResult<T> = Result<T, SinkError>;
