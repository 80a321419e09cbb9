use crate::{
    error::{Error, Result},
    event::{decode_log, Decoded},
    metrics,
    subscription::Subscription,
};
use alloy_primitives::Address;
use alloy_rpc_types_eth::Log;
use alloy_sol_types::SolEvent;
use tokio::{sync::mpsc, task::JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Channel half a watcher delivers decoded events into.
pub type EventSink<E> = mpsc::Sender<Decoded<E>>;

/// Handle to a running event watcher.
///
/// Dropping the handle detaches the watcher; it keeps running until one of
/// its stop conditions is met. Call [`EventSubscription::unsubscribe`] to stop
/// it explicitly.
#[derive(Debug)]
pub struct EventSubscription {
    stop: CancellationToken,
    handle: JoinHandle<Result<()>>,
}

impl EventSubscription {
    /// Stop the watcher and unsubscribe from the backend.
    pub fn unsubscribe(&self) {
        self.stop.cancel();
    }

    /// Wait for the watcher to finish.
    ///
    /// Resolves to `Ok(())` after cancellation, unsubscribe, sink closure or a
    /// clean backend shutdown, and to the failure otherwise.
    pub async fn wait(self) -> Result<()> {
        self.handle
            .await
            .map_err(|e| Error::Subscription(format!("watcher task failed: {e}")))?
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

pub(crate) fn spawn<E>(
    contract: Address,
    cancel: Option<&CancellationToken>,
    logs: mpsc::Receiver<Log>,
    sub: Subscription,
    sink: EventSink<E>,
) -> EventSubscription
where
    E: SolEvent + Send + 'static,
{
    let stop = cancel.map_or_else(CancellationToken::new, CancellationToken::child_token);

    let handle = tokio::spawn(run(contract, stop.clone(), logs, sub, sink));

    EventSubscription { stop, handle }
}

async fn run<E>(
    contract: Address,
    stop: CancellationToken,
    mut logs: mpsc::Receiver<Log>,
    mut sub: Subscription,
    sink: EventSink<E>,
) -> Result<()>
where
    E: SolEvent + Send + 'static,
{
    info!(%contract, event = E::SIGNATURE, "Event watcher started");
    metrics::watcher_started();

    let result = forward(&stop, &mut logs, &mut sub, &sink).await;

    sub.unsubscribe();
    metrics::watcher_stopped();

    match &result {
        Ok(()) => info!(%contract, event = E::SIGNATURE, "Event watcher stopped"),
        Err(err) => warn!(%contract, event = E::SIGNATURE, %err, "Event watcher failed"),
    }

    result
}

async fn forward<E: SolEvent>(
    stop: &CancellationToken,
    logs: &mut mpsc::Receiver<Log>,
    sub: &mut Subscription,
    sink: &EventSink<E>,
) -> Result<()> {
    loop {
        let log = tokio::select! {
            biased;
            _ = stop.cancelled() => return Ok(()),
            _ = sink.closed() => return Ok(()),
            log = logs.recv() => match log {
                Some(log) => log,
                None => return match sub.try_error() {
                    Some(err) => Err(Error::Subscription(err.to_string())),
                    None => Ok(()),
                },
            },
            err = sub.done() => return match err {
                Some(err) => Err(Error::Subscription(err.to_string())),
                None => Ok(()),
            },
        };

        let event = decode_log::<E>(&log)?;

        // Wait for sink capacity rather than dropping, but never deliver
        // after a stop request.
        tokio::select! {
            biased;
            _ = stop.cancelled() => return Ok(()),
            sent = sink.send(event) => {
                if sent.is_err() {
                    return Ok(());
                }
            }
        }
    }
}
