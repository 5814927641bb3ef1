//! The logger

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::broadcast;

use crate::config::{ConfigurationSource, LogConfiguration};
use crate::format::compose;
use crate::fs::FileSystem;
use crate::sinks::{SinkError, SinkKind};
use crate::time::{format_instant, TimeFormatter};
use crate::types::LogLevel;

use super::active::ActiveConfiguration;
use super::builder::LoggerBuilder;
use super::dispatch::Dispatcher;
use super::error::{LogError, LogResult};
use super::events::SinkFailure;
use super::exception::ExceptionRouter;
use super::handle::LogHandle;
use super::merge::{merged_custom_paths, merged_name, EffectiveFlags, SinkFlags};

/// Fans one log call out to console, collectivized, fragmented and custom files
///
/// Each call snapshots the installed configuration, merges it with the
/// per-call override, formats the decorated line at most once and submits one
/// independent write per firing sink. The call returns as soon as the writes
/// are queued; the returned `LogHandle` can be dropped (fire-and-forget) or
/// waited on.
///
/// The logger is an ordinary value: share it with `Arc<Logger>`.
///
/// # Example
///
/// ```no_run
/// use fanlog_core::{LogConfiguration, LogLevel, Logger};
///
/// let logger = Logger::new().unwrap();
/// logger.setup(
///     LogConfiguration::default()
///         .with_name("app")
///         .with_collectivization(true, true),
/// );
///
/// // Fire-and-forget
/// logger.info("boot ok");
///
/// // Wait for every sink
/// logger
///     .log_blocking(LogLevel::Warning, "disk low", &LogConfiguration::none())
///     .unwrap();
/// ```
pub struct Logger {
    pub(crate) active: RwLock<Arc<ActiveConfiguration>>,
    pub(crate) clock: Arc<dyn TimeFormatter>,
    pub(crate) fs: Arc<dyn FileSystem>,
    pub(crate) dispatcher: Dispatcher,
}

impl Logger {
    /// Logger with the default configuration and production collaborators
    pub fn new() -> LogResult<Self> {
        LoggerBuilder::new().build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn snapshot(&self) -> Arc<ActiveConfiguration> {
        Arc::clone(&self.active.read())
    }

    /// Replace the configuration wholesale
    ///
    /// Calls already in flight keep the snapshot they started with.
    pub fn setup(&self, configuration: LogConfiguration) {
        let installed = Arc::new(ActiveConfiguration::install(configuration));
        *self.active.write() = installed;
    }

    /// Load a configuration from `source` and install it
    pub async fn reload_from(&self, source: &dyn ConfigurationSource) -> LogResult<()> {
        let configuration = source.load().await?;
        self.setup(configuration);
        Ok(())
    }

    /// Copy of the installed configuration
    pub fn configuration(&self) -> LogConfiguration {
        self.snapshot().configuration.clone()
    }

    /// Collectivized file path of the installed configuration
    pub fn collectivization_file_path(&self) -> PathBuf {
        self.snapshot().collectivization_path().clone()
    }

    /// Fragment a write issued now would go to
    pub fn fragmentation_file_path(&self) -> PathBuf {
        self.snapshot().fragment_target(self.clock.now()).path()
    }

    /// Flags a call with `overrides` would run with
    pub fn effective_flags(&self, overrides: &LogConfiguration) -> EffectiveFlags {
        EffectiveFlags::resolve(overrides, &self.snapshot().configuration)
    }

    /// Subscribe to sink failures
    pub fn subscribe_failures(&self) -> broadcast::Receiver<SinkFailure> {
        self.dispatcher.subscribe()
    }

    /// Block until every write submitted so far has finished
    ///
    /// For shutdown sequencing: call before dropping the logger so queued
    /// writes are not discarded with an owned worker pool. Returns false when
    /// `timeout` elapsed first. Must not be called from inside an async
    /// context.
    pub fn flush(&self, timeout: Duration) -> bool {
        self.dispatcher.drain(timeout)
    }

    /// Log `text`, returning as soon as the sink writes are queued
    pub fn log(&self, level: LogLevel, text: &str, overrides: &LogConfiguration) -> LogHandle {
        let active = self.snapshot();
        let instance = &active.configuration;
        let flags = EffectiveFlags::resolve(overrides, instance);

        let mut handle = LogHandle::new();
        if !flags.enabled {
            return handle;
        }

        // One clock reading per call: the timestamp and the fragment bucket
        // must agree however long the writes wait in the queue.
        let now = self.clock.now();
        let raw: Arc<str> = Arc::from(text);
        let decorated: Option<Arc<str>> = if flags.needs_decoration() {
            let timestamp = format_instant(now, &instance.time_format, instance.time_zone);
            let name = merged_name(overrides, instance);
            Some(compose(text, level, name, &timestamp).into())
        } else {
            None
        };
        let text_for = |sink: SinkFlags| match (&decorated, sink.formatted) {
            (Some(line), true) => Arc::clone(line),
            _ => Arc::clone(&raw),
        };

        if flags.console.enabled {
            self.dispatcher.console(&mut handle, text_for(flags.console));
        }
        if flags.collectivization.enabled {
            self.dispatcher.collectivized(
                &mut handle,
                active.collectivization_path().clone(),
                text_for(flags.collectivization),
            );
        }
        if flags.fragmentation.enabled {
            self.dispatcher.fragment(
                &mut handle,
                active.fragment_target(now),
                text_for(flags.fragmentation),
            );
        }
        if flags.custom.enabled {
            self.dispatcher.custom(
                &mut handle,
                merged_custom_paths(overrides, instance),
                text_for(flags.custom),
            );
        }

        handle
    }

    /// Log and block until every sink finished
    pub fn log_blocking(
        &self,
        level: LogLevel,
        text: &str,
        overrides: &LogConfiguration,
    ) -> LogResult<()> {
        self.log(level, text, overrides).wait_blocking()
    }

    /// Log and await every sink
    pub async fn log_async(
        &self,
        level: LogLevel,
        text: &str,
        overrides: &LogConfiguration,
    ) -> LogResult<()> {
        self.log(level, text, overrides).wait().await
    }

    pub fn all(&self, text: &str) -> LogHandle {
        self.log(LogLevel::All, text, &LogConfiguration::none())
    }

    pub fn info(&self, text: &str) -> LogHandle {
        self.log(LogLevel::Info, text, &LogConfiguration::none())
    }

    pub fn debug(&self, text: &str) -> LogHandle {
        self.log(LogLevel::Debug, text, &LogConfiguration::none())
    }

    pub fn warning(&self, text: &str) -> LogHandle {
        self.log(LogLevel::Warning, text, &LogConfiguration::none())
    }

    pub fn success(&self, text: &str) -> LogHandle {
        self.log(LogLevel::Success, text, &LogConfiguration::none())
    }

    pub fn critical(&self, text: &str) -> LogHandle {
        self.log(LogLevel::Critical, text, &LogConfiguration::none())
    }

    pub fn highlighted_info(&self, text: &str) -> LogHandle {
        self.log(LogLevel::HighlightedInfo, text, &LogConfiguration::none())
    }

    /// Record an internal failure in every file sink
    ///
    /// Deliberately ignores the enable flags of the installed configuration:
    /// custom files, the current fragment and the collectivized file are
    /// always written, the console never is.
    pub fn handle_exception(&self, origin: &str, message: &str) -> LogHandle {
        let active = self.snapshot();
        ExceptionRouter::new().route(&self.dispatcher, self.clock.as_ref(), &active, origin, message)
    }

    /// `handle_exception`, blocking until every file sink finished
    pub fn handle_exception_blocking(&self, origin: &str, message: &str) -> LogResult<()> {
        self.handle_exception(origin, message).wait_blocking()
    }

    /// `handle_exception` for an error value and its source chain
    pub fn handle_error(&self, origin: &str, error: &(dyn Error + 'static)) -> LogHandle {
        self.handle_exception(origin, &ExceptionRouter::describe(error))
    }

    /// Create the folders the installed configuration writes into
    ///
    /// Sinks never create directories themselves; call this once after
    /// `setup` when the folders may be missing.
    pub fn ensure_directories(&self) -> LogResult<()> {
        let active = self.snapshot();
        let configuration = &active.configuration;

        let mut folders: Vec<(SinkKind, PathBuf)> = vec![
            (
                SinkKind::Collectivized,
                configuration.file_collectivization_folder_path.clone(),
            ),
            (
                SinkKind::Fragmented,
                configuration.file_fragmentation_folder_path.clone(),
            ),
        ];
        for path in &configuration.file_custom_output_paths {
            if let Some(parent) = path.parent() {
                folders.push((SinkKind::Custom, parent.to_path_buf()));
            }
        }

        for (sink, folder) in folders {
            if folder.as_os_str().is_empty() || self.fs.exists(&folder) {
                continue;
            }
            self.fs
                .create_dir_all(&folder)
                .map_err(|e| LogError::sink(sink, SinkError::io(folder.clone(), e)))?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("configuration", &self.snapshot().configuration)
            .finish_non_exhaustive()
    }
}
