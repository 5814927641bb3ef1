//! Submits sink writes to the task runner

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use tokio::sync::{broadcast, oneshot};

use crate::runner::TaskRunner;
use crate::sinks::{
    CollectivizedFileSink, ConsoleSink, CustomFileSink, FragmentTarget, FragmentedFileSink,
    SinkWriter,
};

use super::events::SinkFailure;
use super::handle::LogHandle;

/// Count of submitted jobs that have not finished yet
#[derive(Debug, Default)]
struct InFlight {
    count: Mutex<usize>,
    idle: Condvar,
}

impl InFlight {
    fn enter(self: &Arc<Self>) -> InFlightGuard {
        *self.count.lock() += 1;
        InFlightGuard(Arc::clone(self))
    }

    fn wait_idle(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut count = self.count.lock();
        while *count > 0 {
            if self.idle.wait_until(&mut count, deadline).timed_out() {
                return *count == 0;
            }
        }
        true
    }
}

/// Leaves on drop, so a job that panics or is discarded unrun still counts as done
struct InFlightGuard(Arc<InFlight>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut count = self.0.count.lock();
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.0.idle.notify_all();
        }
    }
}

/// The four sinks plus the runner they are submitted to
pub(crate) struct Dispatcher {
    runner: Arc<dyn TaskRunner>,
    in_flight: Arc<InFlight>,
    failures: broadcast::Sender<SinkFailure>,
    console: Arc<ConsoleSink>,
    collectivized: Arc<CollectivizedFileSink>,
    fragmented: Arc<FragmentedFileSink>,
    custom: Arc<CustomFileSink>,
}

impl Dispatcher {
    pub(crate) fn new(
        runner: Arc<dyn TaskRunner>,
        failures: broadcast::Sender<SinkFailure>,
        console: ConsoleSink,
        collectivized: CollectivizedFileSink,
        fragmented: FragmentedFileSink,
        custom: CustomFileSink,
    ) -> Self {
        Self {
            runner,
            in_flight: Arc::default(),
            failures,
            console: Arc::new(console),
            collectivized: Arc::new(collectivized),
            fragmented: Arc::new(fragmented),
            custom: Arc::new(custom),
        }
    }

    /// Block until every job submitted so far finished; false on timeout
    pub(crate) fn drain(&self, timeout: Duration) -> bool {
        self.in_flight.wait_idle(timeout)
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<SinkFailure> {
        self.failures.subscribe()
    }

    pub(crate) fn console(&self, handle: &mut LogHandle, text: Arc<str>) {
        self.submit(handle, Arc::clone(&self.console), (), text);
    }

    pub(crate) fn collectivized(&self, handle: &mut LogHandle, path: PathBuf, text: Arc<str>) {
        self.submit(handle, Arc::clone(&self.collectivized), path, text);
    }

    pub(crate) fn fragment(&self, handle: &mut LogHandle, target: FragmentTarget, text: Arc<str>) {
        self.submit(handle, Arc::clone(&self.fragmented), target, text);
    }

    pub(crate) fn custom(&self, handle: &mut LogHandle, paths: Vec<PathBuf>, text: Arc<str>) {
        self.submit(handle, Arc::clone(&self.custom), paths, text);
    }

    /// One independent job per sink; its result goes to the handle and, on
    /// failure, to the failure stream.
    fn submit<S>(&self, handle: &mut LogHandle, sink: Arc<S>, target: S::Target, text: Arc<str>)
    where
        S: SinkWriter + 'static,
    {
        let kind = sink.kind();
        let (tx, rx) = oneshot::channel();
        let failures = self.failures.clone();
        let guard = self.in_flight.enter();

        self.runner.submit(Box::new(move || {
            let _guard = guard;
            let result = sink.write(&target, &text);
            if let Err(err) = &result {
                // No subscriber is fine
                let _ = failures.send(SinkFailure::from_error(kind, err));
            }
            let _ = tx.send(result);
        }));

        handle.push(kind, rx);
    }
}
