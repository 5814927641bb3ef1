//! Logger construction

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;

use crate::config::LogConfiguration;
use crate::fs::{FileSystem, LocalFileSystem};
use crate::runner::{TaskRunner, TokioTaskRunner};
use crate::sinks::{
    CollectivizedFileSink, ConsoleOutput, ConsoleSink, CustomFileSink, FragmentedFileSink,
    StdoutConsole,
};
use crate::time::{SystemTimeFormatter, TimeFormatter};

use super::active::ActiveConfiguration;
use super::dispatch::Dispatcher;
use super::engine::Logger;
use super::error::LogResult;
use super::events::DEFAULT_FAILURE_CAPACITY;

/// Default size of an owned worker pool
pub const DEFAULT_WORKER_THREADS: usize = 4;

/// Assembles a `Logger` from its collaborators
///
/// Anything not supplied gets the production default: the wall clock, the
/// local disk, standard output and a tokio worker pool (the caller's runtime
/// when built inside one, a dedicated one otherwise).
///
/// # Example
///
/// ```no_run
/// use fanlog_core::{LogConfiguration, Logger};
///
/// let logger = Logger::builder()
///     .with_configuration(LogConfiguration::default().with_name("app"))
///     .with_worker_threads(2)
///     .build()
///     .unwrap();
/// logger.info("started");
/// ```
pub struct LoggerBuilder {
    configuration: LogConfiguration,
    clock: Option<Arc<dyn TimeFormatter>>,
    fs: Option<Arc<dyn FileSystem>>,
    console: Option<Arc<dyn ConsoleOutput>>,
    runner: Option<Arc<dyn TaskRunner>>,
    worker_threads: usize,
    failure_capacity: usize,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            configuration: LogConfiguration::default(),
            clock: None,
            fs: None,
            console: None,
            runner: None,
            worker_threads: DEFAULT_WORKER_THREADS,
            failure_capacity: DEFAULT_FAILURE_CAPACITY,
        }
    }

    /// Initial instance configuration
    pub fn with_configuration(mut self, configuration: LogConfiguration) -> Self {
        self.configuration = configuration;
        self
    }

    /// Time source for timestamps and fragment names
    pub fn with_time_formatter(mut self, clock: Arc<dyn TimeFormatter>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// File system used by every file sink
    pub fn with_file_system(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = Some(fs);
        self
    }

    /// Destination of the console sink
    pub fn with_console_output(mut self, console: Arc<dyn ConsoleOutput>) -> Self {
        self.console = Some(console);
        self
    }

    /// Runner the sink writes are submitted to
    pub fn with_runner(mut self, runner: Arc<dyn TaskRunner>) -> Self {
        self.runner = Some(runner);
        self
    }

    /// Pool size when a dedicated runtime is started
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads;
        self
    }

    /// Capacity of the failure event stream
    pub fn with_failure_capacity(mut self, capacity: usize) -> Self {
        self.failure_capacity = capacity.max(1);
        self
    }

    pub fn build(self) -> LogResult<Logger> {
        let runner: Arc<dyn TaskRunner> = match self.runner {
            Some(runner) => runner,
            None => match TokioTaskRunner::try_current() {
                Some(runner) => Arc::new(runner),
                None => Arc::new(TokioTaskRunner::new(self.worker_threads)?),
            },
        };
        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemTimeFormatter::new()));
        let fs = self.fs.unwrap_or_else(|| Arc::new(LocalFileSystem::new()));
        let console = self.console.unwrap_or_else(|| Arc::new(StdoutConsole));
        let (failures, _) = broadcast::channel(self.failure_capacity);

        let dispatcher = Dispatcher::new(
            runner,
            failures,
            ConsoleSink::new(console),
            CollectivizedFileSink::new(Arc::clone(&fs)),
            FragmentedFileSink::new(Arc::clone(&fs)),
            CustomFileSink::new(Arc::clone(&fs)),
        );

        Ok(Logger {
            active: RwLock::new(Arc::new(ActiveConfiguration::install(self.configuration))),
            clock,
            fs,
            dispatcher,
        })
    }
}
