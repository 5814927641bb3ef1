//! The logging engine
//!
//! - `Logger`: merges per-call overrides with the installed configuration and
//!   fans each call out to the firing sinks through the task runner
//! - `EffectiveFlags`: the pure OR-merge behind every call
//! - `LogHandle`: optional completion tracking for one call
//! - `ExceptionRouter`: writes internal failures to every file sink
//! - `SinkFailure`: event stream of failed writes

mod active;
mod builder;
mod dispatch;
mod engine;
mod error;
mod events;
mod exception;
mod handle;
mod macros;
mod merge;

pub use builder::{LoggerBuilder, DEFAULT_WORKER_THREADS};
pub use engine::Logger;
pub use error::{LogError, LogResult};
pub use events::{SinkFailure, DEFAULT_FAILURE_CAPACITY};
pub use exception::ExceptionRouter;
pub use handle::{LogHandle, SinkOutcome};
pub use merge::{merged_custom_paths, merged_name, resolve, EffectiveFlags, SinkFlags};
