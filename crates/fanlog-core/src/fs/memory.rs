//! In-memory file system

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use parking_lot::RwLock;

use super::traits::FileSystem;

/// In-memory file system for testing
///
/// Files are plain strings keyed by path. Two knobs exist for exercising the
/// logger's failure and latency behaviour:
/// - `with_latency` sleeps inside every append, simulating slow I/O
/// - `fail_on` makes appends to a path fail with `PermissionDenied`
///
/// # Example
///
/// ```
/// use fanlog_core::fs::{FileSystem, MemoryFileSystem};
/// use std::path::Path;
///
/// let fs = MemoryFileSystem::new();
/// fs.append(Path::new("a.log"), "hello\n").unwrap();
/// assert_eq!(fs.read(Path::new("a.log")), Some("hello\n".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: RwLock<HashMap<PathBuf, String>>,
    directories: RwLock<HashSet<PathBuf>>,
    failing: RwLock<HashSet<PathBuf>>,
    latency: RwLock<Duration>,
}

impl MemoryFileSystem {
    /// Create an empty file system
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a file system whose appends each take at least `latency`
    pub fn with_latency(latency: Duration) -> Self {
        let fs = Self::new();
        fs.set_latency(latency);
        fs
    }

    /// Change the simulated append latency
    pub fn set_latency(&self, latency: Duration) {
        *self.latency.write() = latency;
    }

    /// Make every append to `path` fail
    pub fn fail_on(&self, path: impl Into<PathBuf>) {
        self.failing.write().insert(path.into());
    }

    /// Contents of a file
    pub fn read(&self, path: &Path) -> Option<String> {
        self.files.read().get(path).cloned()
    }

    /// Every file path written so far, sorted
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<_> = self.files.read().keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Number of files
    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    /// Check if no file was written
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FileSystem for MemoryFileSystem {
    fn append(&self, path: &Path, text: &str) -> io::Result<()> {
        let latency = *self.latency.read();
        if !latency.is_zero() {
            std::thread::sleep(latency);
        }

        if self.failing.read().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("write refused: {}", path.display()),
            ));
        }

        self.files
            .write()
            .entry(path.to_path_buf())
            .or_default()
            .push_str(text);
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut directories = self.directories.write();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                directories.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.read().contains_key(path) || self.directories.read().contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_append_accumulates() {
        let fs = MemoryFileSystem::new();
        let path = Path::new("logs/app.log");

        assert!(fs.is_empty());
        fs.append(path, "a").unwrap();
        fs.append(path, "b").unwrap();

        assert_eq!(fs.read(path), Some("ab".to_string()));
        assert_eq!(fs.len(), 1);
        assert!(fs.exists(path));
    }

    #[test]
    fn test_fail_on() {
        let fs = MemoryFileSystem::new();
        fs.fail_on("locked.log");

        let err = fs.append(Path::new("locked.log"), "x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(fs.read(Path::new("locked.log")).is_none());

        // Other paths are unaffected
        fs.append(Path::new("open.log"), "x").unwrap();
    }

    #[test]
    fn test_latency() {
        let fs = MemoryFileSystem::with_latency(Duration::from_millis(30));
        let started = Instant::now();
        fs.append(Path::new("slow.log"), "x").unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_create_dir_all_registers_ancestors() {
        let fs = MemoryFileSystem::new();
        fs.create_dir_all(Path::new("var/log/app")).unwrap();

        assert!(fs.exists(Path::new("var/log/app")));
        assert!(fs.exists(Path::new("var/log")));
        assert!(fs.exists(Path::new("var")));
        assert!(!fs.exists(Path::new("tmp")));
    }
}
