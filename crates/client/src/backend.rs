//! Contract backend over an alloy JSON-RPC provider.

use alloy_primitives::{Address, Bytes, TxHash};
use alloy_provider::Provider;
use alloy_rpc_types::eth::{BlockId, Filter, Log, TransactionRequest};
use alloy_transport::{RpcError, TransportErrorKind};
use async_trait::async_trait;
use bind::{
    BackendError, BackendResult, ContractCaller, ContractFilterer, ContractTransactor,
    FeeEstimate, FilterQuery, Subscription,
};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio_retry::{strategy::ExponentialBackoff, Retry};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Largest block range requested in a single `eth_getLogs` call.
///
/// Leaves a 500 block margin below the common 10,000 block RPC limit.
pub const LOG_CHUNK_SIZE: u64 = 9_500;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Translate a provider error into a backend error, keeping revert payloads.
fn backend_error(err: RpcError<TransportErrorKind>) -> BackendError {
    match err.as_error_resp().and_then(|payload| payload.as_revert_data()) {
        Some(data) => BackendError::Reverted(data),
        None => BackendError::Rpc(err.to_string()),
    }
}

/// Implements every contract backend capability on top of a [`Provider`].
///
/// Live log subscriptions are served by polling `eth_getLogs`, so any HTTP
/// provider works.
#[derive(Debug, Clone)]
pub struct ProviderBackend<P> {
    provider: P,
    poll_interval: Duration,
}

impl<P> ProviderBackend<P>
where
    P: Provider + Clone + 'static,
{
    pub const fn new(provider: P) -> Self {
        Self {
            provider,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Poll for new logs at `interval` instead of the default two seconds.
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub const fn provider(&self) -> &P {
        &self.provider
    }
}

/// Build the `eth_getLogs` filter for one chunk of `query`.
fn chunk_filter(query: &FilterQuery, from: u64, to: u64) -> Filter {
    let mut filter = Filter::new()
        .address(query.address)
        .from_block(from)
        .to_block(to);

    for (slot, topics) in filter.topics.iter_mut().zip(&query.topics) {
        *slot = topics.clone().into();
    }

    filter
}

/// Fetch logs for `query` between `from` and `to` inclusive, in chunks of
/// [`LOG_CHUNK_SIZE`] blocks, retrying each chunk with exponential backoff.
async fn fetch_logs<P: Provider>(
    provider: &P,
    query: &FilterQuery,
    from: u64,
    to: u64,
) -> Result<Vec<Log>, RpcError<TransportErrorKind>> {
    let mut logs = Vec::new();
    let mut current = from;

    while current <= to {
        let chunk_end = (current + LOG_CHUNK_SIZE - 1).min(to);
        let filter = chunk_filter(query, current, chunk_end);

        debug!(
            address = %query.address,
            from = current,
            to = chunk_end,
            "Fetching log chunk"
        );

        // Retries after 100ms, 200ms, 400ms, 800ms and 1.6s.
        let retry_strategy = ExponentialBackoff::from_millis(2).factor(50).take(5);
        let chunk = Retry::spawn(retry_strategy, || async {
            provider.get_logs(&filter).await.map_err(|e| {
                warn!(
                    from = current,
                    to = chunk_end,
                    error = %e,
                    "Log chunk failed, will retry"
                );
                e
            })
        })
        .await?;

        logs.extend(chunk);
        current = chunk_end + 1;
    }

    Ok(logs)
}

#[async_trait]
impl<P> ContractCaller for ProviderBackend<P>
where
    P: Provider + Clone + 'static,
{
    async fn code_at(&self, account: Address, block: BlockId) -> BackendResult<Bytes> {
        self.provider
            .get_code_at(account)
            .block_id(block)
            .await
            .map_err(backend_error)
    }

    async fn call_contract(
        &self,
        call: TransactionRequest,
        block: BlockId,
    ) -> BackendResult<Bytes> {
        self.provider
            .call(call)
            .block(block)
            .await
            .map_err(backend_error)
    }
}

#[async_trait]
impl<P> ContractTransactor for ProviderBackend<P>
where
    P: Provider + Clone + 'static,
{
    async fn pending_code_at(&self, account: Address) -> BackendResult<Bytes> {
        self.provider
            .get_code_at(account)
            .pending()
            .await
            .map_err(backend_error)
    }

    async fn pending_nonce_at(&self, account: Address) -> BackendResult<u64> {
        self.provider
            .get_transaction_count(account)
            .pending()
            .await
            .map_err(backend_error)
    }

    async fn estimate_fees(&self) -> BackendResult<FeeEstimate> {
        let estimate = self
            .provider
            .estimate_eip1559_fees()
            .await
            .map_err(backend_error)?;

        Ok(FeeEstimate {
            max_fee_per_gas: estimate.max_fee_per_gas,
            max_priority_fee_per_gas: estimate.max_priority_fee_per_gas,
        })
    }

    async fn estimate_gas(&self, tx: TransactionRequest) -> BackendResult<u64> {
        let estimate = self
            .provider
            .estimate_gas(tx)
            .await
            .map_err(backend_error)?;

        // 20% headroom over the node's estimate
        Ok(estimate + estimate / 5)
    }

    async fn send_transaction(
        &self,
        _tx: &TransactionRequest,
        raw: Bytes,
    ) -> BackendResult<TxHash> {
        let pending = self
            .provider
            .send_raw_transaction(&raw)
            .await
            .map_err(backend_error)?;

        Ok(*pending.tx_hash())
    }
}

#[async_trait]
impl<P> ContractFilterer for ProviderBackend<P>
where
    P: Provider + Clone + 'static,
{
    async fn filter_logs(&self, query: FilterQuery) -> BackendResult<Vec<Log>> {
        let from = query.from_block.unwrap_or_default();
        let to = match query.to_block {
            Some(to) => to,
            None => self
                .provider
                .get_block_number()
                .await
                .map_err(backend_error)?,
        };

        fetch_logs(&self.provider, &query, from, to)
            .await
            .map_err(backend_error)
    }

    /// Poll for new logs every `poll_interval`.
    ///
    /// With `query.from_block` set, the first poll back-fills history from
    /// that block before new blocks are followed.
    async fn subscribe_filter_logs(
        &self,
        query: FilterQuery,
        sink: mpsc::Sender<Log>,
    ) -> BackendResult<Subscription> {
        let next = match query.from_block {
            Some(start) => start,
            None => {
                self.provider
                    .get_block_number()
                    .await
                    .map_err(backend_error)?
                    + 1
            }
        };

        let (err_tx, err_rx) = oneshot::channel();
        let token = CancellationToken::new();

        tokio::spawn(poll_logs(
            self.provider.clone(),
            self.poll_interval,
            query,
            next,
            sink,
            err_tx,
            token.clone(),
        ));

        Ok(Subscription::new(err_rx, token))
    }
}

async fn poll_logs<P: Provider>(
    provider: P,
    interval: Duration,
    query: FilterQuery,
    mut next: u64,
    sink: mpsc::Sender<Log>,
    err_tx: oneshot::Sender<BackendError>,
    token: CancellationToken,
) {
    let mut ticker = tokio::time::interval(interval);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => return,
            _ = sink.closed() => return,
            _ = ticker.tick() => {}
        }

        let head = match provider.get_block_number().await {
            Ok(head) => head,
            Err(e) => {
                let _ = err_tx.send(backend_error(e));
                return;
            }
        };
        if head < next {
            continue;
        }

        let logs = match fetch_logs(&provider, &query, next, head).await {
            Ok(logs) => logs,
            Err(e) => {
                let _ = err_tx.send(backend_error(e));
                return;
            }
        };

        for log in logs {
            tokio::select! {
                biased;
                _ = token.cancelled() => return,
                sent = sink.send(log) => {
                    if sent.is_err() {
                        return;
                    }
                }
            }
        }

        next = head + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, LogData, B256};
    use alloy_provider::ProviderBuilder;
    use alloy_rpc_types::eth::FilterSet;
    use alloy_transport::mock::Asserter;

    const ORACLE: Address = address!("420000000000000000000000000000000000000F");

    fn mocked() -> (Asserter, impl Provider + Clone + 'static) {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone());
        (asserter, provider)
    }

    fn log(block: u64) -> Log {
        Log {
            inner: alloy_primitives::Log {
                address: ORACLE,
                data: LogData::new_unchecked(vec![B256::with_last_byte(1)], Bytes::new()),
            },
            block_number: Some(block),
            ..Default::default()
        }
    }

    #[test]
    fn test_chunk_filter_positions() {
        let sig = B256::with_last_byte(1);
        let a = B256::with_last_byte(2);
        let b = B256::with_last_byte(3);
        let query = FilterQuery {
            topics: vec![vec![sig], vec![], vec![a, b]],
            ..FilterQuery::new(address!("4200000000000000000000000000000000000016"))
        };

        let filter = chunk_filter(&query, 10, 20);
        assert_eq!(filter.get_from_block(), Some(10));
        assert_eq!(filter.get_to_block(), Some(20));
        assert_eq!(filter.topics[0], FilterSet::from(vec![sig]));
        assert!(filter.topics[1].is_empty());
        assert_eq!(filter.topics[2], FilterSet::from(vec![a, b]));
        assert!(filter.topics[3].is_empty());
    }

    #[test]
    fn test_rpc_error_is_not_revert() {
        let err = backend_error(TransportErrorKind::custom_str("connection refused"));
        assert!(matches!(err, BackendError::Rpc(_)));
    }

    #[tokio::test]
    async fn test_fetch_logs_splits_range_into_chunks() {
        let (asserter, provider) = mocked();
        let query = FilterQuery::new(ORACLE);

        asserter.push_success(&vec![log(1)]);
        let logs = fetch_logs(&provider, &query, 0, LOG_CHUNK_SIZE - 1)
            .await
            .unwrap();
        assert_eq!(logs, vec![log(1)]);
        assert!(asserter.read_q().is_empty());

        // One block past the chunk size needs a second request.
        asserter.push_success(&vec![log(1)]);
        asserter.push_success(&vec![log(LOG_CHUNK_SIZE)]);
        let logs = fetch_logs(&provider, &query, 0, LOG_CHUNK_SIZE)
            .await
            .unwrap();
        assert_eq!(logs, vec![log(1), log(LOG_CHUNK_SIZE)]);
        assert!(asserter.read_q().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_logs_retries_failed_chunk() {
        let (asserter, provider) = mocked();
        asserter.push_failure_msg("upstream timeout");
        asserter.push_success(&vec![log(3)]);

        let logs = fetch_logs(&provider, &FilterQuery::new(ORACLE), 0, 10)
            .await
            .unwrap();
        assert_eq!(logs, vec![log(3)]);
    }

    #[tokio::test]
    async fn test_poll_failure_reaches_subscription() {
        let (asserter, provider) = mocked();
        let backend = ProviderBackend::new(provider).with_poll_interval(Duration::from_millis(10));
        let query = FilterQuery {
            from_block: Some(5),
            ..FilterQuery::new(ORACLE)
        };

        asserter.push_success(&7u64);
        asserter.push_success(&vec![log(6)]);
        asserter.push_failure_msg("node unavailable");

        let (sink, mut logs) = mpsc::channel(8);
        let mut sub = backend.subscribe_filter_logs(query, sink).await.unwrap();

        assert_eq!(logs.recv().await, Some(log(6)));
        assert_eq!(logs.recv().await, None);
        let err = sub.try_error().unwrap();
        assert!(matches!(&err, BackendError::Rpc(msg) if msg.contains("node unavailable")));
    }

    #[tokio::test]
    async fn test_unsubscribe_stops_polling() {
        let (asserter, provider) = mocked();
        let backend = ProviderBackend::new(provider);
        let query = FilterQuery {
            from_block: Some(0),
            ..FilterQuery::new(ORACLE)
        };

        let (sink, mut logs) = mpsc::channel(8);
        let mut sub = backend.subscribe_filter_logs(query, sink).await.unwrap();
        sub.unsubscribe();

        assert_eq!(logs.recv().await, None);
        assert!(sub.try_error().is_none());
        assert!(asserter.read_q().is_empty());
    }
}
