//! Worker pool that sink writes are submitted to

mod traits;
mod tokio_runner;

pub use traits::{Job, TaskRunner};
pub use tokio_runner::TokioTaskRunner;
