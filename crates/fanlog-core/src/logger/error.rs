//! Logger error types

use thiserror::Error;

use crate::config::ConfigError;
use crate::sinks::{SinkError, SinkKind};

/// Errors surfaced by the awaited/blocking call forms
#[derive(Error, Debug)]
pub enum LogError {
    /// A sink write failed
    #[error("{sink} sink failed: {source}")]
    Sink {
        sink: SinkKind,
        #[source]
        source: SinkError,
    },

    /// The worker ran the job to no result (panic or runner shutdown)
    #[error("{0} sink task ended without reporting")]
    TaskDropped(SinkKind),

    /// The worker pool could not be started
    #[error("failed to start worker pool: {0}")]
    Runtime(#[from] std::io::Error),

    /// Loading a configuration failed
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl LogError {
    /// Create a sink error
    pub fn sink(sink: SinkKind, source: SinkError) -> Self {
        Self::Sink { sink, source }
    }

    /// Sink involved in the failure, if any
    pub fn sink_kind(&self) -> Option<SinkKind> {
        match self {
            LogError::Sink { sink, .. } | LogError::TaskDropped(sink) => Some(*sink),
            LogError::Runtime(_) | LogError::Config(_) => None,
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;
