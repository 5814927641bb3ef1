//! Custom file sink: an explicit list of paths

use std::path::PathBuf;
use std::sync::Arc;

use crate::fs::FileSystem;

use super::error::{SinkError, SinkResult};
use super::traits::{SinkKind, SinkWriter};

/// Appends each line to every configured path, in order
///
/// A failing path does not stop the remaining ones. The first failure is the
/// one reported.
#[derive(Clone)]
pub struct CustomFileSink {
    fs: Arc<dyn FileSystem>,
}

impl CustomFileSink {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl std::fmt::Debug for CustomFileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomFileSink").finish_non_exhaustive()
    }
}

impl SinkWriter for CustomFileSink {
    type Target = Vec<PathBuf>;

    fn kind(&self) -> SinkKind {
        SinkKind::Custom
    }

    fn write(&self, paths: &Vec<PathBuf>, text: &str) -> SinkResult<()> {
        let mut first_error = None;

        for path in paths {
            if let Err(e) = self.fs.append(path, text) {
                if first_error.is_none() {
                    first_error = Some(SinkError::io(path.clone(), e));
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
