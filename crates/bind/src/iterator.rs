use crate::{
    error::Error,
    event::{decode_log, Decoded},
    subscription::Subscription,
};
use alloy_rpc_types_eth::Log;
use alloy_sol_types::SolEvent;
use std::{fmt, marker::PhantomData};
use tokio::sync::mpsc::{self, error::TryRecvError};
use tracing::debug;

/// Lifecycle of an [`EventIterator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IteratorState {
    /// Waiting on the backend for more logs
    Active,
    /// The subscription ended; only buffered logs remain
    Drained,
    /// A log failed to decode
    Failed,
    /// Closed by the consumer
    Closed,
}

/// Single-pass sequence of decoded events drawn from a backend log channel.
///
/// Once `next` returns `None` it keeps returning `None`. Check
/// [`EventIterator::error`] to tell exhaustion from failure.
pub struct EventIterator<E> {
    logs: mpsc::Receiver<Log>,
    sub: Subscription,
    state: IteratorState,
    fail: Option<Error>,
    _event: PhantomData<fn() -> E>,
}

impl<E> fmt::Debug for EventIterator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventIterator")
            .field("state", &self.state)
            .field("fail", &self.fail)
            .finish_non_exhaustive()
    }
}

impl<E: SolEvent> EventIterator<E> {
    pub(crate) const fn new(logs: mpsc::Receiver<Log>, sub: Subscription) -> Self {
        Self {
            logs,
            sub,
            state: IteratorState::Active,
            fail: None,
            _event: PhantomData,
        }
    }

    /// Advance to the next event.
    ///
    /// While active this waits for either a log or the end of the
    /// subscription. After the subscription ends the remaining buffered logs
    /// are returned without waiting.
    pub async fn next(&mut self) -> Option<Decoded<E>> {
        loop {
            match self.state {
                IteratorState::Failed | IteratorState::Closed => return None,
                IteratorState::Drained => {
                    return match self.logs.try_recv() {
                        Ok(log) => self.decode(&log),
                        Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
                    };
                }
                IteratorState::Active => {
                    tokio::select! {
                        biased;
                        log = self.logs.recv() => match log {
                            Some(log) => return self.decode(&log),
                            None => {
                                self.state = IteratorState::Drained;
                                if let Some(err) = self.sub.try_error() {
                                    debug!(event = E::SIGNATURE, %err, "Log subscription failed");
                                    self.fail = Some(Error::Subscription(err.to_string()));
                                }
                                return None;
                            }
                        },
                        err = self.sub.done() => {
                            self.state = IteratorState::Drained;
                            if let Some(err) = err {
                                debug!(event = E::SIGNATURE, %err, "Log subscription failed");
                                self.fail = Some(Error::Subscription(err.to_string()));
                            }
                        }
                    }
                }
            }
        }
    }

    /// The error that ended iteration, if any.
    pub const fn error(&self) -> Option<&Error> {
        self.fail.as_ref()
    }

    pub const fn state(&self) -> IteratorState {
        self.state
    }

    /// Stop iterating and unsubscribe from the backend.
    pub fn close(&mut self) {
        self.sub.unsubscribe();
        self.logs.close();
        self.state = IteratorState::Closed;
    }

    /// Drain the remaining events into a vector.
    pub async fn collect(mut self) -> Result<Vec<Decoded<E>>, Error> {
        let mut events = Vec::new();
        while let Some(event) = self.next().await {
            events.push(event);
        }

        match self.fail.take() {
            Some(err) => Err(err),
            None => Ok(events),
        }
    }

    fn decode(&mut self, log: &Log) -> Option<Decoded<E>> {
        match decode_log::<E>(log) {
            Ok(event) => Some(event),
            Err(err) => {
                self.fail = Some(err);
                self.state = IteratorState::Failed;
                None
            }
        }
    }
}

impl<E> Drop for EventIterator<E> {
    fn drop(&mut self) {
        self.sub.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BackendError;
    use alloy_primitives::{Address, Bytes, LogData, B256};
    use alloy_sol_types::sol;
    use tokio::sync::oneshot;
    use tokio_util::sync::CancellationToken;

    sol! {
        #[derive(Debug, PartialEq, Eq)]
        event Vetoed(bytes32 indexed callHash, bytes data);
    }

    fn vetoed(n: u8) -> Log {
        let event = Vetoed {
            callHash: B256::with_last_byte(n),
            data: Bytes::from(vec![n]),
        };
        Log {
            inner: alloy_primitives::Log {
                address: Address::ZERO,
                data: LogData::new_unchecked(
                    vec![Vetoed::SIGNATURE_HASH, event.callHash],
                    event.encode_data().into(),
                ),
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_clean_close_drains_buffer() {
        let (tx, rx) = mpsc::channel(8);
        let (err_tx, err_rx) = oneshot::channel::<BackendError>();
        let mut it = EventIterator::<Vetoed>::new(rx, Subscription::new(err_rx, CancellationToken::new()));

        tx.send(vetoed(1)).await.unwrap();
        tx.send(vetoed(2)).await.unwrap();
        drop(err_tx);

        assert_eq!(it.next().await.unwrap().callHash, B256::with_last_byte(1));
        assert_eq!(it.next().await.unwrap().callHash, B256::with_last_byte(2));
        assert!(it.next().await.is_none());
        assert!(it.next().await.is_none());
        assert!(it.error().is_none());
    }

    #[tokio::test]
    async fn test_subscription_error_keeps_buffered_logs() {
        let (tx, rx) = mpsc::channel(8);
        let (err_tx, err_rx) = oneshot::channel();
        let mut it = EventIterator::<Vetoed>::new(rx, Subscription::new(err_rx, CancellationToken::new()));

        tx.send(vetoed(1)).await.unwrap();
        err_tx.send(BackendError::Closed).unwrap();

        // The log is preferred over the error while both are ready.
        assert!(it.next().await.is_some());
        assert!(it.next().await.is_none());
        assert_eq!(it.state(), IteratorState::Drained);
        assert!(matches!(it.error(), Some(Error::Subscription(_))));
    }

    #[tokio::test]
    async fn test_error_before_log_channel_closes_is_kept() {
        let (tx, rx) = mpsc::channel(8);
        let (err_tx, err_rx) = oneshot::channel();
        let mut it = EventIterator::<Vetoed>::new(rx, Subscription::new(err_rx, CancellationToken::new()));

        err_tx.send(BackendError::Rpc("reset".to_string())).unwrap();
        drop(tx);

        assert!(it.next().await.is_none());
        assert_eq!(it.state(), IteratorState::Drained);
        assert!(matches!(it.error(), Some(Error::Subscription(msg)) if msg.contains("reset")));
        assert!(it.next().await.is_none());
    }

    #[tokio::test]
    async fn test_decode_failure_is_terminal() {
        let (tx, rx) = mpsc::channel(8);
        let mut it = EventIterator::<Vetoed>::new(rx, Subscription::completed());

        let mut bad = vetoed(1);
        bad.inner.data = LogData::new_unchecked(vec![B256::ZERO], Bytes::new());
        tx.send(bad).await.unwrap();
        tx.send(vetoed(2)).await.unwrap();

        assert!(it.next().await.is_none());
        assert_eq!(it.state(), IteratorState::Failed);
        assert!(it.next().await.is_none());
        assert!(matches!(it.error(), Some(Error::Decode { .. })));
    }

    #[tokio::test]
    async fn test_close_unsubscribes() {
        let (_tx, rx) = mpsc::channel(8);
        let (_err_tx, err_rx) = oneshot::channel();
        let token = CancellationToken::new();
        let mut it = EventIterator::<Vetoed>::new(rx, Subscription::new(err_rx, token.clone()));

        it.close();
        assert!(token.is_cancelled());
        assert!(it.next().await.is_none());
        assert_eq!(it.state(), IteratorState::Closed);
    }
}
