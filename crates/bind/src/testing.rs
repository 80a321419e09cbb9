//! In-memory backend for exercising bindings without a node.
//!
//! The backend does not execute EVM code. Calls are answered by responders
//! registered per selector, contract creations install their init code as
//! the runtime code, and logs are whatever the test emits.

use crate::{
    backend::{
        BackendResult, ContractCaller, ContractFilterer, ContractTransactor, FeeEstimate,
        FilterQuery,
    },
    error::BackendError,
    opts::SignerFn,
    subscription::Subscription,
};
use alloy_primitives::{keccak256, Address, Bytes, LogData, Selector, TxHash, TxKind, B256};
use alloy_rpc_types_eth::{BlockId, Log, TransactionRequest};
use alloy_sol_types::SolEvent;
use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex, MutexGuard, PoisonError,
    },
};
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;

type Responder = Arc<dyn Fn(&[u8]) -> Bytes + Send + Sync>;

struct LiveSubscription {
    query: FilterQuery,
    sink: mpsc::Sender<Log>,
    err: oneshot::Sender<BackendError>,
    unsubscribed: CancellationToken,
}

#[derive(Default)]
struct State {
    block_number: u64,
    code: HashMap<Address, Bytes>,
    nonces: HashMap<Address, u64>,
    responders: HashMap<(Option<Address>, Selector), Responder>,
    reverts: HashMap<(Option<Address>, Selector), Bytes>,
    logs: Vec<Log>,
    subscriptions: Vec<LiveSubscription>,
    sent: Vec<TransactionRequest>,
}

impl State {
    fn lookup<'a, T>(
        map: &'a HashMap<(Option<Address>, Selector), T>,
        to: Address,
        selector: Selector,
    ) -> Option<&'a T> {
        map.get(&(Some(to), selector))
            .or_else(|| map.get(&(None, selector)))
    }
}

/// A simulated chain implementing every backend capability.
#[derive(Default)]
pub struct SimulatedBackend {
    state: Mutex<State>,
    requests: AtomicUsize,
}

impl std::fmt::Debug for SimulatedBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedBackend")
            .field("requests", &self.request_count())
            .finish_non_exhaustive()
    }
}

impl SimulatedBackend {
    /// Gas reported by every estimate.
    pub const GAS_ESTIMATE: u64 = 100_000;

    /// Fee caps reported by every estimate.
    pub const FEES: FeeEstimate = FeeEstimate {
        max_fee_per_gas: 2_000_000_000,
        max_priority_fee_per_gas: 1_000_000_000,
    };

    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn hit(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of backend requests served so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn block_number(&self) -> u64 {
        self.state().block_number
    }

    /// Advance the chain head by `blocks`.
    pub fn mine(&self, blocks: u64) {
        self.state().block_number += blocks;
    }

    pub fn set_code(&self, account: Address, code: Bytes) {
        self.state().code.insert(account, code);
    }

    /// Answer calls with `selector` at `contract` using `responder`.
    ///
    /// The responder receives the full calldata.
    pub fn on_call<F>(&self, contract: Address, selector: impl Into<Selector>, responder: F)
    where
        F: Fn(&[u8]) -> Bytes + Send + Sync + 'static,
    {
        self.state()
            .responders
            .insert((Some(contract), selector.into()), Arc::new(responder));
    }

    /// Answer calls with `selector` at any address.
    pub fn on_selector<F>(&self, selector: impl Into<Selector>, responder: F)
    where
        F: Fn(&[u8]) -> Bytes + Send + Sync + 'static,
    {
        self.state()
            .responders
            .insert((None, selector.into()), Arc::new(responder));
    }

    /// Revert calls and gas estimates with `selector` at `contract`.
    pub fn revert_with(&self, contract: Address, selector: impl Into<Selector>, data: Bytes) {
        self.state()
            .reverts
            .insert((Some(contract), selector.into()), data);
    }

    /// Requests of every transaction submitted so far, in order.
    pub fn sent_transactions(&self) -> Vec<TransactionRequest> {
        self.state().sent.clone()
    }

    /// Record a log in the current block and deliver it to live subscriptions.
    pub async fn emit(&self, address: Address, data: LogData) -> Log {
        let (log, sinks) = {
            let mut state = self.state();
            let log = Log {
                inner: alloy_primitives::Log { address, data },
                block_number: Some(state.block_number),
                log_index: Some(state.logs.len() as u64),
                transaction_hash: Some(keccak256(state.logs.len().to_be_bytes())),
                removed: false,
                ..Default::default()
            };
            state.logs.push(log.clone());

            state
                .subscriptions
                .retain(|sub| !sub.unsubscribed.is_cancelled() && !sub.sink.is_closed());
            let sinks = state
                .subscriptions
                .iter()
                .filter(|sub| sub.query.matches(&log))
                .map(|sub| sub.sink.clone())
                .collect::<Vec<_>>();
            (log, sinks)
        };

        // Delivery waits for capacity, outside the lock.
        for sink in sinks {
            let _ = sink.send(log.clone()).await;
        }

        log
    }

    /// Emit a decoded event.
    pub async fn emit_event<E: SolEvent>(&self, address: Address, event: &E) -> Log {
        self.emit(address, event.encode_log_data()).await
    }

    /// Fail every live subscription with `err`.
    pub fn fail_subscriptions(&self, err: BackendError) {
        let subscriptions = std::mem::take(&mut self.state().subscriptions);
        for sub in subscriptions {
            let _ = sub.err.send(err.clone());
        }
    }

    /// End every live subscription cleanly.
    pub fn close_subscriptions(&self) {
        self.state().subscriptions.clear();
    }

    /// Number of subscriptions still registered and not unsubscribed.
    pub fn live_subscriptions(&self) -> usize {
        self.state()
            .subscriptions
            .iter()
            .filter(|sub| !sub.unsubscribed.is_cancelled())
            .count()
    }

    fn respond(&self, to: Address, input: &[u8]) -> BackendResult<Bytes> {
        let state = self.state();
        let Some(selector) = input.get(..4).map(Selector::from_slice) else {
            return Ok(Bytes::new());
        };

        if let Some(data) = State::lookup(&state.reverts, to, selector) {
            return Err(BackendError::Reverted(data.clone()));
        }

        // Only accounts with code answer calls, as on a real chain.
        if !state.code.get(&to).is_some_and(|code| !code.is_empty()) {
            return Ok(Bytes::new());
        }

        let responder = State::lookup(&state.responders, to, selector).cloned();
        drop(state);

        Ok(responder
            .map(|responder| responder(input))
            .unwrap_or_default())
    }
}

fn target(tx: &TransactionRequest) -> BackendResult<Address> {
    match tx.to {
        Some(TxKind::Call(to)) => Ok(to),
        _ => Err(BackendError::Rpc("call without target".to_string())),
    }
}

#[async_trait]
impl ContractCaller for SimulatedBackend {
    async fn code_at(&self, account: Address, _block: BlockId) -> BackendResult<Bytes> {
        self.hit();
        Ok(self.state().code.get(&account).cloned().unwrap_or_default())
    }

    async fn call_contract(&self, call: TransactionRequest, _block: BlockId) -> BackendResult<Bytes> {
        self.hit();
        let to = target(&call)?;
        let input = call.input.input().cloned().unwrap_or_default();
        self.respond(to, &input)
    }
}

#[async_trait]
impl ContractTransactor for SimulatedBackend {
    async fn pending_code_at(&self, account: Address) -> BackendResult<Bytes> {
        self.hit();
        Ok(self.state().code.get(&account).cloned().unwrap_or_default())
    }

    async fn pending_nonce_at(&self, account: Address) -> BackendResult<u64> {
        self.hit();
        Ok(self.state().nonces.get(&account).copied().unwrap_or_default())
    }

    async fn estimate_fees(&self) -> BackendResult<FeeEstimate> {
        self.hit();
        Ok(Self::FEES)
    }

    async fn estimate_gas(&self, tx: TransactionRequest) -> BackendResult<u64> {
        self.hit();
        if let Some(TxKind::Call(to)) = tx.to {
            let input = tx.input.input().cloned().unwrap_or_default();
            self.respond(to, &input)?;
        }
        Ok(Self::GAS_ESTIMATE)
    }

    async fn send_transaction(&self, tx: &TransactionRequest, raw: Bytes) -> BackendResult<TxHash> {
        self.hit();
        let from = tx
            .from
            .ok_or_else(|| BackendError::Rpc("transaction without sender".to_string()))?;

        let mut state = self.state();
        let nonce = state.nonces.get(&from).copied().unwrap_or_default();
        if tx.nonce != Some(nonce) {
            return Err(BackendError::Rpc(format!(
                "nonce mismatch: expected {nonce}, got {:?}",
                tx.nonce
            )));
        }
        state.nonces.insert(from, nonce + 1);

        if let Some(TxKind::Create) = tx.to {
            let init_code = tx.input.input().cloned().unwrap_or_default();
            state.code.insert(from.create(nonce), init_code);
        }

        state.sent.push(tx.clone());
        state.block_number += 1;

        Ok(keccak256(&raw))
    }
}

#[async_trait]
impl ContractFilterer for SimulatedBackend {
    async fn filter_logs(&self, query: FilterQuery) -> BackendResult<Vec<Log>> {
        self.hit();
        Ok(self
            .state()
            .logs
            .iter()
            .filter(|log| query.matches(log))
            .cloned()
            .collect())
    }

    /// Registers a live subscription. When `query.from_block` is set, stored
    /// logs from that block are replayed first, up to the sink's free capacity.
    async fn subscribe_filter_logs(
        &self,
        query: FilterQuery,
        sink: mpsc::Sender<Log>,
    ) -> BackendResult<Subscription> {
        self.hit();
        let mut state = self.state();

        if query.from_block.is_some() {
            for log in state.logs.iter().filter(|log| query.matches(log)) {
                let _ = sink.try_send(log.clone());
            }
        }

        let (err_tx, err_rx) = oneshot::channel();
        let unsubscribed = CancellationToken::new();
        let live = FilterQuery {
            from_block: None,
            ..query
        };
        state.subscriptions.push(LiveSubscription {
            query: live,
            sink,
            err: err_tx,
            unsubscribed: unsubscribed.clone(),
        });

        Ok(Subscription::new(err_rx, unsubscribed))
    }
}

/// A deterministic signer for tests.
///
/// The "signed" bytes are the nonce followed by the calldata, so distinct
/// transactions hash differently.
pub fn test_signer() -> SignerFn {
    Arc::new(|tx: TransactionRequest| {
        Box::pin(async move {
            let mut raw = tx.nonce.unwrap_or_default().to_be_bytes().to_vec();
            if let Some(input) = tx.input.input() {
                raw.extend_from_slice(input);
            }
            Ok(Bytes::from(raw))
        })
    })
}

/// A signer that always fails.
pub fn failing_signer() -> SignerFn {
    Arc::new(|_: TransactionRequest| {
        Box::pin(async { Err::<Bytes, _>(eyre::eyre!("signer unavailable")) })
    })
}

/// Build an RPC log for `address` with the given topics and data.
pub fn log(address: Address, topics: Vec<B256>, data: Bytes) -> Log {
    Log {
        inner: alloy_primitives::Log {
            address,
            data: LogData::new_unchecked(topics, data),
        },
        ..Default::default()
    }
}
