//! Task runner backed by tokio's blocking pool

use std::io;

use tokio::runtime::{Builder, Handle, Runtime};

use super::traits::{Job, TaskRunner};

/// Runs jobs with `spawn_blocking`
///
/// Either owns a dedicated multi-thread runtime (`new`) or borrows the
/// application's runtime (`from_handle`). File appends are blocking calls,
/// so jobs always go to the blocking pool rather than the async workers.
///
/// Dropping a runner that owns its runtime shuts the runtime down without
/// waiting, which is safe from inside an async context. Jobs still queued at
/// that point are discarded; `Logger::flush` waits for them first.
pub struct TokioTaskRunner {
    handle: Handle,
    runtime: Option<Runtime>,
}

impl TokioTaskRunner {
    /// Start a dedicated runtime with `worker_threads` blocking threads
    pub fn new(worker_threads: usize) -> io::Result<Self> {
        let threads = worker_threads.max(1);
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .max_blocking_threads(threads)
            .thread_name("fanlog-worker")
            .build()?;

        Ok(Self {
            handle: runtime.handle().clone(),
            runtime: Some(runtime),
        })
    }

    /// Run jobs on an existing runtime
    pub fn from_handle(handle: Handle) -> Self {
        Self {
            handle,
            runtime: None,
        }
    }

    /// Use the runtime the caller is running in, if any
    pub fn try_current() -> Option<Self> {
        Handle::try_current().ok().map(Self::from_handle)
    }

    /// Whether this runner owns its runtime
    pub fn owns_runtime(&self) -> bool {
        self.runtime.is_some()
    }
}

impl std::fmt::Debug for TokioTaskRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioTaskRunner")
            .field("owns_runtime", &self.owns_runtime())
            .finish()
    }
}

impl Drop for TokioTaskRunner {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

impl TaskRunner for TokioTaskRunner {
    fn submit(&self, job: Job) {
        // The JoinHandle is dropped: completion is reported by the job itself.
        drop(self.handle.spawn_blocking(job));
    }
}
