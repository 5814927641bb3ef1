//! Completion handle for one call

use futures::future::join_all;
use tokio::sync::oneshot;

use crate::sinks::{SinkKind, SinkResult};

use super::error::{LogError, LogResult};

/// Result of one sink write
#[derive(Debug)]
pub struct SinkOutcome {
    pub sink: SinkKind,
    pub result: LogResult<()>,
}

impl SinkOutcome {
    fn settle(sink: SinkKind, received: Result<SinkResult<()>, oneshot::error::RecvError>) -> Self {
        let result = match received {
            Ok(Ok(())) => Ok(()),
            Ok(Err(source)) => Err(LogError::sink(sink, source)),
            Err(_) => Err(LogError::TaskDropped(sink)),
        };
        Self { sink, result }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Tracks the sink writes submitted by one call
///
/// Dropping the handle is the fire-and-forget path: the writes still run and
/// their results are discarded. Waiting on it gives "first error wins" over
/// the call's sinks, in dispatch order.
///
/// `wait_blocking` and `outcomes_blocking` must not be called from inside an
/// async context; use `wait` / `outcomes` there.
#[derive(Debug, Default)]
pub struct LogHandle {
    pending: Vec<(SinkKind, oneshot::Receiver<SinkResult<()>>)>,
}

impl LogHandle {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, sink: SinkKind, receiver: oneshot::Receiver<SinkResult<()>>) {
        self.pending.push((sink, receiver));
    }

    /// Sinks a write was submitted to
    pub fn sinks(&self) -> Vec<SinkKind> {
        self.pending.iter().map(|(sink, _)| *sink).collect()
    }

    /// Number of submitted writes
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True when the call submitted nothing (logging disabled or no sink on)
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Await every write and return each outcome
    pub async fn outcomes(self) -> Vec<SinkOutcome> {
        let (sinks, receivers): (Vec<_>, Vec<_>) = self.pending.into_iter().unzip();
        let results = join_all(receivers).await;
        sinks
            .into_iter()
            .zip(results)
            .map(|(sink, received)| SinkOutcome::settle(sink, received))
            .collect()
    }

    /// Await every write; the first failure is returned
    pub async fn wait(self) -> LogResult<()> {
        first_error(self.outcomes().await)
    }

    /// Block the calling thread until every write finished
    pub fn outcomes_blocking(self) -> Vec<SinkOutcome> {
        self.pending
            .into_iter()
            .map(|(sink, receiver)| SinkOutcome::settle(sink, receiver.blocking_recv()))
            .collect()
    }

    /// Block the calling thread until every write finished; the first failure is returned
    pub fn wait_blocking(self) -> LogResult<()> {
        first_error(self.outcomes_blocking())
    }
}

fn first_error(outcomes: Vec<SinkOutcome>) -> LogResult<()> {
    outcomes
        .into_iter()
        .map(|outcome| outcome.result)
        .find(|result| result.is_err())
        .unwrap_or(Ok(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::SinkError;
    use std::io;

    #[test]
    fn test_empty_handle_succeeds() {
        let handle = LogHandle::new();
        assert!(handle.is_empty());
        assert!(handle.wait_blocking().is_ok());
    }

    #[test]
    fn test_first_error_wins() {
        let mut handle = LogHandle::new();

        let (ok_tx, ok_rx) = oneshot::channel();
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        handle.push(SinkKind::Console, ok_rx);
        handle.push(SinkKind::Fragmented, first_rx);
        handle.push(SinkKind::Custom, second_rx);
        assert_eq!(
            handle.sinks(),
            vec![SinkKind::Console, SinkKind::Fragmented, SinkKind::Custom]
        );

        ok_tx.send(Ok(())).unwrap();
        first_tx
            .send(Err(SinkError::io("frag.log", io::Error::from(io::ErrorKind::NotFound))))
            .unwrap();
        second_tx
            .send(Err(SinkError::io("c.log", io::Error::from(io::ErrorKind::NotFound))))
            .unwrap();

        let err = handle.wait_blocking().unwrap_err();
        assert_eq!(err.sink_kind(), Some(SinkKind::Fragmented));
    }

    #[test]
    fn test_dropped_sender_is_reported() {
        let mut handle = LogHandle::new();
        let (tx, rx) = oneshot::channel();
        handle.push(SinkKind::Collectivized, rx);
        drop(tx);

        let outcomes = handle.outcomes_blocking();
        assert_eq!(outcomes.len(), 1);
        assert!(matches!(
            outcomes[0].result,
            Err(LogError::TaskDropped(SinkKind::Collectivized))
        ));
    }

    #[tokio::test]
    async fn test_async_outcomes() {
        let mut handle = LogHandle::new();
        let (tx, rx) = oneshot::channel();
        handle.push(SinkKind::Console, rx);

        tokio::spawn(async move {
            let _ = tx.send(Ok(()));
        });

        let outcomes = handle.outcomes().await;
        assert!(outcomes.iter().all(SinkOutcome::is_ok));
    }
}
