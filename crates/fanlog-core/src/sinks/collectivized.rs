//! Collectivized file sink: one path-stable file for every line

use std::path::PathBuf;
use std::sync::Arc;

use crate::fs::FileSystem;

use super::error::{SinkError, SinkResult};
use super::traits::{SinkKind, SinkWriter};

/// Appends every line to a single file
///
/// The target path is resolved once when a configuration is installed and
/// handed to every write unchanged.
#[derive(Clone)]
pub struct CollectivizedFileSink {
    fs: Arc<dyn FileSystem>,
}

impl CollectivizedFileSink {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl std::fmt::Debug for CollectivizedFileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectivizedFileSink").finish_non_exhaustive()
    }
}

impl SinkWriter for CollectivizedFileSink {
    type Target = PathBuf;

    fn kind(&self) -> SinkKind {
        SinkKind::Collectivized
    }

    fn write(&self, path: &PathBuf, text: &str) -> SinkResult<()> {
        self.fs
            .append(path, text)
            .map_err(|e| SinkError::io(path.clone(), e))
    }
}
