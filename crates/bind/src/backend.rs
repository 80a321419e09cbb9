//! Narrow backend capabilities a bound contract talks to.
//!
//! A contract handle only ever needs to read (call), write (send transactions)
//! or observe (filter and subscribe to logs). Each concern is its own
//! object-safe trait so a handle can be bound to any subset of them.

use crate::{error::BackendError, subscription::Subscription};
use alloy_primitives::{Address, Bytes, TxHash, B256};
use alloy_rpc_types_eth::{BlockId, Log, TransactionRequest};
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Result type returned by backend implementations.
pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// Read-only access to contract state.
#[async_trait]
pub trait ContractCaller: Send + Sync {
    /// Return the runtime code of `account` at `block`.
    async fn code_at(&self, account: Address, block: BlockId) -> BackendResult<Bytes>;

    /// Execute a message call against `block` without creating a transaction.
    async fn call_contract(&self, call: TransactionRequest, block: BlockId)
        -> BackendResult<Bytes>;
}

/// EIP-1559 fee suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeEstimate {
    pub max_fee_per_gas: u128,
    pub max_priority_fee_per_gas: u128,
}

/// Transaction building and submission.
#[async_trait]
pub trait ContractTransactor: Send + Sync {
    /// Return the code of `account` in the pending state.
    async fn pending_code_at(&self, account: Address) -> BackendResult<Bytes>;

    /// Return the next nonce of `account` in the pending state.
    async fn pending_nonce_at(&self, account: Address) -> BackendResult<u64>;

    /// Suggest EIP-1559 fee caps for a new transaction.
    async fn estimate_fees(&self) -> BackendResult<FeeEstimate>;

    /// Estimate the gas needed to execute `tx`.
    async fn estimate_gas(&self, tx: TransactionRequest) -> BackendResult<u64>;

    /// Submit a signed transaction.
    ///
    /// `raw` is the EIP-2718 encoding produced by the signer for `tx`.
    async fn send_transaction(&self, tx: &TransactionRequest, raw: Bytes)
        -> BackendResult<TxHash>;
}

/// Log retrieval and subscription.
#[async_trait]
pub trait ContractFilterer: Send + Sync {
    /// Fetch historical logs matching `query`.
    async fn filter_logs(&self, query: FilterQuery) -> BackendResult<Vec<Log>>;

    /// Stream new logs matching `query` into `sink` until the returned
    /// subscription is unsubscribed or fails.
    async fn subscribe_filter_logs(
        &self,
        query: FilterQuery,
        sink: mpsc::Sender<Log>,
    ) -> BackendResult<Subscription>;
}

/// A backend providing every capability.
pub trait ContractBackend: ContractCaller + ContractTransactor + ContractFilterer {}

impl<T> ContractBackend for T where T: ContractCaller + ContractTransactor + ContractFilterer {}

/// Log filter criteria.
///
/// `topics` is positional: entry `i` constrains topic `i`. An empty entry is a
/// wildcard, multiple entries in one position are OR-ed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    pub address: Address,
    pub from_block: Option<u64>,
    pub to_block: Option<u64>,
    pub topics: Vec<Vec<B256>>,
}

impl FilterQuery {
    /// Create a query matching every log emitted by `address`.
    pub const fn new(address: Address) -> Self {
        Self {
            address,
            from_block: None,
            to_block: None,
            topics: Vec::new(),
        }
    }

    /// Returns true if `log` satisfies the address, block range and topic criteria.
    pub fn matches(&self, log: &Log) -> bool {
        if log.inner.address != self.address {
            return false;
        }

        if let Some(number) = log.block_number {
            if self.from_block.is_some_and(|from| number < from)
                || self.to_block.is_some_and(|to| number > to)
            {
                return false;
            }
        }

        let topics = log.inner.data.topics();
        self.topics.iter().enumerate().all(|(i, wanted)| {
            wanted.is_empty() || topics.get(i).is_some_and(|topic| wanted.contains(topic))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256, LogData};

    fn log_with(address: Address, topics: Vec<B256>, block: u64) -> Log {
        Log {
            inner: alloy_primitives::Log {
                address,
                data: LogData::new_unchecked(topics, Bytes::new()),
            },
            block_hash: None,
            block_number: Some(block),
            block_timestamp: None,
            transaction_hash: None,
            transaction_index: None,
            log_index: None,
            removed: false,
        }
    }

    #[test]
    fn test_empty_topic_is_wildcard() {
        let contract = address!("4200000000000000000000000000000000000023");
        let sig = b256!("1111111111111111111111111111111111111111111111111111111111111111");
        let query = FilterQuery {
            topics: vec![vec![sig], vec![]],
            ..FilterQuery::new(contract)
        };

        let log = log_with(contract, vec![sig, B256::ZERO], 1);
        assert!(query.matches(&log));
    }

    #[test]
    fn test_topic_or_match() {
        let contract = address!("4200000000000000000000000000000000000023");
        let a = B256::with_last_byte(1);
        let b = B256::with_last_byte(2);
        let c = B256::with_last_byte(3);
        let query = FilterQuery {
            topics: vec![vec![], vec![a, c]],
            ..FilterQuery::new(contract)
        };

        assert!(query.matches(&log_with(contract, vec![B256::ZERO, a], 1)));
        assert!(!query.matches(&log_with(contract, vec![B256::ZERO, b], 1)));
        assert!(query.matches(&log_with(contract, vec![B256::ZERO, c], 1)));
        // Missing topic position never matches a non-empty constraint.
        assert!(!query.matches(&log_with(contract, vec![B256::ZERO], 1)));
    }

    #[test]
    fn test_block_range_and_address() {
        let contract = address!("4200000000000000000000000000000000000023");
        let query = FilterQuery {
            from_block: Some(10),
            to_block: Some(20),
            ..FilterQuery::new(contract)
        };

        assert!(!query.matches(&log_with(contract, vec![], 9)));
        assert!(query.matches(&log_with(contract, vec![], 10)));
        assert!(query.matches(&log_with(contract, vec![], 20)));
        assert!(!query.matches(&log_with(contract, vec![], 21)));
        assert!(!query.matches(&log_with(Address::ZERO, vec![], 15)));
    }
}
