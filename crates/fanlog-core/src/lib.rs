//! Fanlog Core
//!
//! A local, best-effort logging engine. One log call becomes up to four
//! independent writes:
//! - the console (standard output)
//! - a collectivized file: one path-stable file for the configuration's lifetime
//! - a fragmented file: `folder/<formatted now>.log`, i.e. rotation by time
//!   bucket without a rotation timer
//! - any number of custom files
//!
//! Writes run on a worker pool; `log` returns as soon as they are queued.
//!
//! ## Line format
//!
//! Formatted sinks receive `[name] [timestamp] [LEVEL]\t<message>\n`, with the
//! `[name] ` part omitted when the name is empty. Unformatted sinks receive the
//! message byte for byte.
//!
//! ```rust,no_run
//! use fanlog_core::{LogConfiguration, LogLevel, Logger, TimeFormat};
//!
//! let logger = Logger::new()?;
//! logger.setup(
//!     LogConfiguration::default()
//!         .with_name("app")
//!         .with_fragmentation(true, true)
//!         .with_fragmentation_file("/var/log/app", TimeFormat::Date),
//! );
//! logger.ensure_directories()?;
//!
//! logger.info("boot ok");
//!
//! // Per-call override: also write this one line to an extra file
//! let overrides = LogConfiguration::none().with_custom_paths(["/tmp/audit.log"]);
//! logger.log_blocking(LogLevel::Critical, "config reloaded", &overrides)?;
//! # Ok::<(), fanlog_core::LogError>(())
//! ```

pub mod types;
pub mod config;
pub mod time;
pub mod fs;
pub mod format;
pub mod sinks;
pub mod runner;
pub mod logger;

// Re-export commonly used types
pub use types::{LogLevel, TimeFormat, TimeZoneKind};

pub use config::{
    ConfigError, ConfigResult, ConfigurationSource, FileConfigurationSource, LogConfiguration,
    MemoryConfigurationSource,
};

pub use time::{ManualTimeFormatter, SystemTimeFormatter, TimeFormatter};

pub use fs::{FileSystem, LocalFileSystem, MemoryFileSystem};

pub use format::FormatComposer;

pub use sinks::{
    CollectivizedFileSink, ConsoleOutput, ConsoleSink, CustomFileSink, FragmentTarget,
    FragmentedFileSink, MemoryConsole, SinkError, SinkKind, SinkResult, SinkWriter, StdoutConsole,
};

pub use runner::{TaskRunner, TokioTaskRunner};

pub use logger::{
    EffectiveFlags, ExceptionRouter, LogError, LogHandle, LogResult, Logger, LoggerBuilder,
    SinkFailure, SinkFlags, SinkOutcome,
};
