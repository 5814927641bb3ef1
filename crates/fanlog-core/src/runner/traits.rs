//! Task runner trait definition

/// A unit of work handed to a runner
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Runs submitted jobs without blocking the submitter
///
/// Implementations:
/// - `TokioTaskRunner`: tokio's blocking thread pool
pub trait TaskRunner: Send + Sync {
    /// Queue `job` and return immediately
    fn submit(&self, job: Job);
}
