//! Delivery strategies
//!
//! - `ConsoleSink`: standard output
//! - `CollectivizedFileSink`: one file for the configuration's lifetime
//! - `FragmentedFileSink`: one file per time bucket
//! - `CustomFileSink`: an explicit list of files

mod error;
mod traits;
mod console;
mod collectivized;
mod fragmented;
mod custom;

pub use error::{SinkError, SinkResult};
pub use traits::{SinkKind, SinkWriter};
pub use console::{ConsoleOutput, ConsoleSink, MemoryConsole, StdoutConsole};
pub use collectivized::CollectivizedFileSink;
pub use fragmented::{FragmentTarget, FragmentedFileSink};
pub use custom::CustomFileSink;
