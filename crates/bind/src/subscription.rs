use crate::error::BackendError;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio_util::sync::CancellationToken;

/// Handle to a backend log subscription.
///
/// The backend keeps the sending half of the error channel: it reports a
/// failure by sending on it and a clean shutdown by dropping it. Dropping the
/// `Subscription` does not unsubscribe; call [`Subscription::unsubscribe`].
#[derive(Debug)]
pub struct Subscription {
    err: Option<oneshot::Receiver<BackendError>>,
    unsubscribe: CancellationToken,
}

impl Subscription {
    /// Create a subscription from the backend's error channel and the token it
    /// watches for unsubscribe requests.
    pub const fn new(err: oneshot::Receiver<BackendError>, unsubscribe: CancellationToken) -> Self {
        Self {
            err: Some(err),
            unsubscribe,
        }
    }

    /// A subscription whose producer has already finished cleanly.
    pub fn completed() -> Self {
        Self {
            err: None,
            unsubscribe: CancellationToken::new(),
        }
    }

    /// Ask the backend to stop delivering logs.
    pub fn unsubscribe(&self) {
        self.unsubscribe.cancel();
    }

    /// Returns true once [`Subscription::unsubscribe`] has been called.
    pub fn is_unsubscribed(&self) -> bool {
        self.unsubscribe.is_cancelled()
    }

    /// Wait for the subscription to end.
    ///
    /// Resolves to `Some(err)` if the backend reported a failure and `None` on
    /// a clean shutdown. Once resolved, subsequent calls never complete.
    pub async fn done(&mut self) -> Option<BackendError> {
        match self.err.as_mut() {
            Some(rx) => {
                let result = rx.await.ok();
                self.err = None;
                result
            }
            None => std::future::pending().await,
        }
    }

    /// The backend's failure, if it has already reported one.
    ///
    /// Backends report a failure before closing the log channel, so this is
    /// checked once the log channel ends. Does not wait.
    pub fn try_error(&mut self) -> Option<BackendError> {
        let rx = self.err.as_mut()?;
        match rx.try_recv() {
            Ok(err) => {
                self.err = None;
                Some(err)
            }
            Err(TryRecvError::Closed) => {
                self.err = None;
                None
            }
            Err(TryRecvError::Empty) => None,
        }
    }

    /// Returns true if the subscription already ended.
    pub const fn is_done(&self) -> bool {
        self.err.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_error_is_reported_once() {
        let (tx, rx) = oneshot::channel();
        let mut sub = Subscription::new(rx, CancellationToken::new());

        tx.send(BackendError::Closed).unwrap();
        assert_eq!(sub.done().await, Some(BackendError::Closed));
        assert!(sub.is_done());

        let again = tokio::time::timeout(Duration::from_millis(10), sub.done()).await;
        assert!(again.is_err(), "completed subscription must not resolve twice");
    }

    #[tokio::test]
    async fn test_dropped_sender_is_clean_shutdown() {
        let (tx, rx) = oneshot::channel::<BackendError>();
        let mut sub = Subscription::new(rx, CancellationToken::new());
        drop(tx);
        assert_eq!(sub.done().await, None);
    }

    #[test]
    fn test_try_error_does_not_wait() {
        let (tx, rx) = oneshot::channel();
        let mut sub = Subscription::new(rx, CancellationToken::new());

        assert_eq!(sub.try_error(), None);
        assert!(!sub.is_done());

        tx.send(BackendError::Rpc("reset".to_string())).unwrap();
        assert_eq!(sub.try_error(), Some(BackendError::Rpc("reset".to_string())));
        assert!(sub.is_done());
        assert_eq!(sub.try_error(), None);
    }

    #[test]
    fn test_unsubscribe_cancels_token() {
        let token = CancellationToken::new();
        let (_tx, rx) = oneshot::channel();
        let sub = Subscription::new(rx, token.clone());
        sub.unsubscribe();
        assert!(token.is_cancelled());
        assert!(sub.is_unsubscribed());
    }
}
