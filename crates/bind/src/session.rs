use crate::{
    builder::{CallBuilder, TransactBuilder},
    error::Result,
    opts::{CallOpts, TransactOpts},
    transact::SignedTransaction,
};
use alloy_sol_types::SolCall;

/// A contract binding with pinned call and transaction options.
///
/// ```ignore
/// let session = Session::new(&vetoable, CallOpts::default(), opts);
/// let version = session.call(|c| c.version()).await?;
/// let tx = session.send(|c| c.initiator()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Session<'a, T> {
    pub contract: &'a T,
    pub call_opts: CallOpts,
    pub transact_opts: TransactOpts,
}

impl<'a, T> Session<'a, T> {
    pub const fn new(contract: &'a T, call_opts: CallOpts, transact_opts: TransactOpts) -> Self {
        Self {
            contract,
            call_opts,
            transact_opts,
        }
    }

    /// Execute a read accessor with the pinned call options.
    pub async fn call<C, F>(&self, accessor: F) -> Result<C::Return>
    where
        C: SolCall,
        F: FnOnce(&'a T) -> CallBuilder<'a, C>,
    {
        accessor(self.contract).call(&self.call_opts).await
    }

    /// Submit a write accessor with the pinned transaction options.
    pub async fn send<C, F>(&self, accessor: F) -> Result<SignedTransaction>
    where
        C: SolCall,
        F: FnOnce(&'a T) -> TransactBuilder<'a, C>,
    {
        accessor(self.contract).send(&self.transact_opts).await
    }

    /// Simulate a write accessor with the pinned call options.
    pub async fn simulate<C, F>(&self, accessor: F) -> Result<C::Return>
    where
        C: SolCall,
        F: FnOnce(&'a T) -> TransactBuilder<'a, C>,
    {
        accessor(self.contract).call(&self.call_opts).await
    }
}
