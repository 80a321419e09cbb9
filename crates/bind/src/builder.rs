use crate::{
    contract::BoundContract,
    error::Result,
    opts::{CallOpts, TransactOpts},
    transact::SignedTransaction,
};
use alloy_primitives::{Bytes, Selector};
use alloy_sol_types::SolCall;

/// A pending read call to a view or pure method.
#[derive(Debug)]
#[must_use = "call builders do nothing until `.call()` is awaited"]
pub struct CallBuilder<'a, C> {
    contract: &'a BoundContract,
    call: C,
}

impl<'a, C: SolCall> CallBuilder<'a, C> {
    pub const fn new(contract: &'a BoundContract, call: C) -> Self {
        Self { contract, call }
    }

    /// Execute the call and decode its return values.
    pub async fn call(&self, opts: &CallOpts) -> Result<C::Return> {
        self.contract.call(opts, &self.call).await
    }

    /// ABI-encoded calldata, selector included.
    pub fn calldata(&self) -> Bytes {
        self.call.abi_encode().into()
    }

    pub const fn selector(&self) -> Selector {
        Selector::new(C::SELECTOR)
    }

    pub const fn inner(&self) -> &C {
        &self.call
    }
}

/// A pending transaction to a state-changing method.
///
/// The method can also be simulated with [`TransactBuilder::call`], which is
/// how return values of non-view methods are read.
#[derive(Debug)]
#[must_use = "transaction builders do nothing until `.send()` is awaited"]
pub struct TransactBuilder<'a, C> {
    contract: &'a BoundContract,
    call: C,
}

impl<'a, C: SolCall> TransactBuilder<'a, C> {
    pub const fn new(contract: &'a BoundContract, call: C) -> Self {
        Self { contract, call }
    }

    /// Sign and submit the transaction.
    pub async fn send(&self, opts: &TransactOpts) -> Result<SignedTransaction> {
        self.contract.transact(opts, &self.call).await
    }

    /// Execute the method as a read call without creating a transaction.
    pub async fn call(&self, opts: &CallOpts) -> Result<C::Return> {
        self.contract.call(opts, &self.call).await
    }

    pub fn calldata(&self) -> Bytes {
        self.call.abi_encode().into()
    }

    pub const fn selector(&self) -> Selector {
        Selector::new(C::SELECTOR)
    }

    pub const fn inner(&self) -> &C {
        &self.call
    }
}
