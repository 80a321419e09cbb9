//! Per-operation option records.

use alloy_primitives::{Address, Bytes, U256};
use alloy_rpc_types_eth::{BlockId, TransactionRequest};
use std::{fmt, future::Future, pin::Pin, sync::Arc};
use tokio_util::sync::CancellationToken;

/// A function that signs a fully populated transaction request and returns
/// the EIP-2718 encoded signed transaction.
///
/// Allows the transact path to work with both local wallet signing and remote
/// signing via a signer-proxy service.
pub type SignerFn = Arc<
    dyn Fn(TransactionRequest) -> Pin<Box<dyn Future<Output = eyre::Result<Bytes>> + Send>>
        + Send
        + Sync,
>;

/// Options for read-only calls.
#[derive(Debug, Clone)]
pub struct CallOpts {
    /// Optional sender of the call
    pub from: Option<Address>,
    /// Block to execute the call against
    pub block: BlockId,
    /// Aborts the call when cancelled
    pub cancel: Option<CancellationToken>,
}

impl Default for CallOpts {
    fn default() -> Self {
        Self {
            from: None,
            block: BlockId::latest(),
            cancel: None,
        }
    }
}

impl CallOpts {
    /// Call against the given block.
    pub const fn at_block(mut self, block: BlockId) -> Self {
        self.block = block;
        self
    }

    /// Set the caller address.
    pub const fn from(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    /// Attach a cancellation token.
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

/// Options for state-changing transactions.
///
/// Unset fields are filled from the backend: the nonce from the pending
/// state, fee caps from the backend's estimate and the gas limit from an
/// `eth_estimateGas`.
#[derive(Clone)]
pub struct TransactOpts {
    /// Sender account
    pub from: Address,
    /// Signs the populated request
    pub signer: SignerFn,
    /// Explicit nonce, or `None` to use the pending nonce
    pub nonce: Option<u64>,
    /// Wei to send along with the transaction
    pub value: U256,
    /// Legacy gas price; mutually exclusive with the EIP-1559 caps
    pub gas_price: Option<u128>,
    pub max_fee_per_gas: Option<u128>,
    pub max_priority_fee_per_gas: Option<u128>,
    /// Gas limit, or `None` to estimate
    pub gas_limit: Option<u64>,
    /// Chain id to set on the request before signing
    pub chain_id: Option<u64>,
    /// Sign but do not submit
    pub no_send: bool,
    /// Aborts the transaction when cancelled
    pub cancel: Option<CancellationToken>,
}

impl TransactOpts {
    pub fn new(from: Address, signer: SignerFn) -> Self {
        Self {
            from,
            signer,
            nonce: None,
            value: U256::ZERO,
            gas_price: None,
            max_fee_per_gas: None,
            max_priority_fee_per_gas: None,
            gas_limit: None,
            chain_id: None,
            no_send: false,
            cancel: None,
        }
    }

    /// Send `value` wei with the transaction.
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// Use an explicit nonce.
    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// Use an explicit gas limit.
    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    /// Attach a cancellation token.
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

impl fmt::Debug for TransactOpts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactOpts")
            .field("from", &self.from)
            .field("nonce", &self.nonce)
            .field("value", &self.value)
            .field("gas_price", &self.gas_price)
            .field("max_fee_per_gas", &self.max_fee_per_gas)
            .field("max_priority_fee_per_gas", &self.max_priority_fee_per_gas)
            .field("gas_limit", &self.gas_limit)
            .field("chain_id", &self.chain_id)
            .field("no_send", &self.no_send)
            .finish_non_exhaustive()
    }
}

/// Options for historical log queries.
#[derive(Debug, Clone, Default)]
pub struct FilterOpts {
    /// First block to include
    pub start: u64,
    /// Last block to include, or `None` for the latest block
    pub end: Option<u64>,
    /// Aborts the query when cancelled
    pub cancel: Option<CancellationToken>,
}

impl FilterOpts {
    pub const fn range(start: u64, end: Option<u64>) -> Self {
        Self {
            start,
            end,
            cancel: None,
        }
    }
}

/// Options for live log subscriptions.
#[derive(Debug, Clone, Default)]
pub struct WatchOpts {
    /// Replay logs from this block before streaming new ones
    pub start: Option<u64>,
    /// Stops the watcher when cancelled
    pub cancel: Option<CancellationToken>,
}

impl WatchOpts {
    pub fn with_cancel(cancel: CancellationToken) -> Self {
        Self {
            start: None,
            cancel: Some(cancel),
        }
    }
}
