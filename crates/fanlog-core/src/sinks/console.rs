//! Console sink

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use super::error::{SinkError, SinkResult};
use super::traits::{SinkKind, SinkWriter};

/// Where console text ends up
pub trait ConsoleOutput: Send + Sync {
    fn write_str(&self, text: &str) -> io::Result<()>;
}

/// The process's standard output
///
/// Each write goes through a single locked `write_all`, so lines from
/// concurrent writers do not interleave below line granularity.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl ConsoleOutput for StdoutConsole {
    fn write_str(&self, text: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(text.as_bytes())?;
        handle.flush()
    }
}

/// Captures console output in memory (for testing)
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    buffer: Arc<Mutex<String>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl ConsoleOutput for MemoryConsole {
    fn write_str(&self, text: &str) -> io::Result<()> {
        self.buffer.lock().push_str(text);
        Ok(())
    }
}

/// Writes text to a console output
#[derive(Clone)]
pub struct ConsoleSink {
    output: Arc<dyn ConsoleOutput>,
}

impl ConsoleSink {
    /// Console sink on standard output
    pub fn stdout() -> Self {
        Self::new(Arc::new(StdoutConsole))
    }

    pub fn new(output: Arc<dyn ConsoleOutput>) -> Self {
        Self { output }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}

impl SinkWriter for ConsoleSink {
    type Target = ();

    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }

    fn write(&self, _target: &(), text: &str) -> SinkResult<()> {
        self.output.write_str(text).map_err(SinkError::Console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_console_captures_exact_text() {
        let console = MemoryConsole::new();
        let sink = ConsoleSink::new(Arc::new(console.clone()));

        sink.write(&(), "raw").unwrap();
        sink.write(&(), " text\n").unwrap();
        assert_eq!(console.contents(), "raw text\n");
        assert_eq!(sink.kind(), SinkKind::Console);

        console.clear();
        assert!(console.contents().is_empty());
    }

    #[test]
    fn test_stdout_console_writes() {
        // Just make sure it doesn't fail
        ConsoleSink::stdout().write(&(), "").unwrap();
    }
}
