//! File system trait definition

use std::io;
use std::path::Path;

/// Append-only file access used by the file sinks
///
/// Implementations:
/// - `LocalFileSystem`: the real disk
/// - `MemoryFileSystem`: in-memory for testing, with injectable latency and failures
pub trait FileSystem: Send + Sync {
    /// Append `text` to the file at `path`, creating the file if needed
    ///
    /// Never truncates and never creates missing directories.
    fn append(&self, path: &Path, text: &str) -> io::Result<()>;

    /// Create a directory and all of its parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Check whether a path exists
    fn exists(&self, path: &Path) -> bool;
}
