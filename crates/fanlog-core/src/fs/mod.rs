//! File system abstractions used by the file sinks
//!
//! - `FileSystem` trait: append, directory creation and existence checks
//! - `LocalFileSystem`: real disk
//! - `MemoryFileSystem`: in-memory double for tests

mod traits;
mod local;
mod memory;

pub use traits::FileSystem;
pub use local::LocalFileSystem;
pub use memory::MemoryFileSystem;
