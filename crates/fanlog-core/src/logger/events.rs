//! Sink failure events

use std::path::PathBuf;

use crate::sinks::{SinkError, SinkKind};

/// Default number of undelivered failure events kept per subscriber
pub const DEFAULT_FAILURE_CAPACITY: usize = 64;

/// Published whenever a sink write fails
///
/// Fire-and-forget callers never see sink errors; subscribing to these events
/// is how they can still notice dropped lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkFailure {
    pub sink: SinkKind,
    pub path: Option<PathBuf>,
    pub message: String,
}

impl SinkFailure {
    pub fn from_error(sink: SinkKind, error: &SinkError) -> Self {
        Self {
            sink,
            path: error.path().map(|p| p.to_path_buf()),
            message: error.to_string(),
        }
    }
}

impl std::fmt::Display for SinkFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.sink, self.message)
    }
}
