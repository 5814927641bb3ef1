//! Disk-backed file system

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use super::traits::FileSystem;

/// File system that writes to the local disk
///
/// Every append opens the file in append mode and issues a single
/// `write_all`, so realistically sized lines land in one piece.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn append(&self, path: &Path, text: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(text.as_bytes())?;
        file.flush()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
