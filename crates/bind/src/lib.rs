//! Runtime for generated contract bindings.
//!
//! A binding pairs a contract address with its parsed ABI and up to three
//! backend capabilities:
//! - [`ContractCaller`] for read calls
//! - [`ContractTransactor`] for transactions and deployment
//! - [`ContractFilterer`] for historical logs and live subscriptions
//!
//! Method accessors are typed by the `sol!` generated call structs through
//! [`CallBuilder`] and [`TransactBuilder`]; events share one generic
//! [`Event`] binding.

mod backend;
mod builder;
mod contract;
mod deploy;
mod error;
mod event;
mod iterator;
mod meta;
pub mod metrics;
mod opts;
mod session;
mod subscription;
mod transact;
mod watch;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use backend::{
    BackendResult, ContractBackend, ContractCaller, ContractFilterer, ContractTransactor,
    FeeEstimate, FilterQuery,
};
pub use builder::{CallBuilder, TransactBuilder};
pub use contract::{Backends, BoundContract};
pub use deploy::{deploy_contract, deploy_encoded};
pub use error::{BackendError, Capability, Error, Result};
pub use event::{decode_log, topic_set, Decoded, Event, IntoTopic};
pub use iterator::{EventIterator, IteratorState};
pub use meta::ContractMetaData;
pub use opts::{CallOpts, FilterOpts, SignerFn, TransactOpts, WatchOpts};
pub use session::Session;
pub use subscription::Subscription;
pub use transact::SignedTransaction;
pub use watch::{EventSink, EventSubscription};

// Re-exported so generated code depends on a single runtime crate.
pub use alloy_dyn_abi::DynSolValue;
pub use alloy_json_abi::JsonAbi;
pub use alloy_rpc_types_eth::{BlockId, Log, TransactionRequest};
pub use tokio_util::sync::CancellationToken;
