//! The runtime handle shared by every generated binding.

use crate::{
    backend::{ContractBackend, ContractCaller, ContractFilterer, ContractTransactor},
    builder::{CallBuilder, TransactBuilder},
    error::{Capability, Error, Result},
    event::Event,
    metrics,
    opts::{CallOpts, TransactOpts},
    transact::{self, SignedTransaction},
};
use alloy_dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt};
use alloy_json_abi::{Function, JsonAbi};
use alloy_primitives::{Address, Bytes, TxKind};
use alloy_rpc_types_eth::{TransactionInput, TransactionRequest};
use alloy_sol_types::{SolCall, SolEvent};
use std::{
    fmt,
    future::Future,
    sync::{Arc, Weak},
    time::Instant,
};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// The set of backend capabilities a contract is bound to.
///
/// Backends are held weakly: a bound contract never keeps its backend alive.
#[derive(Clone, Default)]
pub struct Backends {
    caller: Option<Weak<dyn ContractCaller>>,
    transactor: Option<Weak<dyn ContractTransactor>>,
    filterer: Option<Weak<dyn ContractFilterer>>,
}

impl Backends {
    /// Bind every capability to `backend`.
    pub fn full<B: ContractBackend + 'static>(backend: &Arc<B>) -> Self {
        Self::default()
            .with_caller(backend)
            .with_transactor(backend)
            .with_filterer(backend)
    }

    /// Read-only binding.
    pub fn caller<B: ContractCaller + 'static>(backend: &Arc<B>) -> Self {
        Self::default().with_caller(backend)
    }

    /// Write-only binding.
    pub fn transactor<B: ContractTransactor + 'static>(backend: &Arc<B>) -> Self {
        Self::default().with_transactor(backend)
    }

    /// Log-only binding.
    pub fn filterer<B: ContractFilterer + 'static>(backend: &Arc<B>) -> Self {
        Self::default().with_filterer(backend)
    }

    pub fn with_caller<B: ContractCaller + 'static>(mut self, backend: &Arc<B>) -> Self {
        let caller: Arc<dyn ContractCaller> = backend.clone();
        self.caller = Some(Arc::downgrade(&caller));
        self
    }

    pub fn with_transactor<B: ContractTransactor + 'static>(mut self, backend: &Arc<B>) -> Self {
        let transactor: Arc<dyn ContractTransactor> = backend.clone();
        self.transactor = Some(Arc::downgrade(&transactor));
        self
    }

    pub fn with_filterer<B: ContractFilterer + 'static>(mut self, backend: &Arc<B>) -> Self {
        let filterer: Arc<dyn ContractFilterer> = backend.clone();
        self.filterer = Some(Arc::downgrade(&filterer));
        self
    }

    /// Returns true if the capability slot is populated.
    pub const fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::Caller => self.caller.is_some(),
            Capability::Transactor => self.transactor.is_some(),
            Capability::Filterer => self.filterer.is_some(),
        }
    }
}

impl fmt::Debug for Backends {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Backends")
            .field("caller", &self.caller.is_some())
            .field("transactor", &self.transactor.is_some())
            .field("filterer", &self.filterer.is_some())
            .finish()
    }
}

fn upgrade<T: ?Sized>(slot: Option<&Weak<T>>, capability: Capability) -> Result<Arc<T>> {
    slot.ok_or(Error::CapabilityAbsent(capability))?
        .upgrade()
        .ok_or(Error::BackendDropped)
}

/// Run `fut` unless `cancel` fires first.
pub(crate) async fn with_cancel<F: Future>(
    cancel: Option<&CancellationToken>,
    fut: F,
) -> Result<F::Output> {
    match cancel {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => Err(Error::Cancelled),
            out = fut => Ok(out),
        },
        None => Ok(fut.await),
    }
}

/// A contract address paired with its parsed ABI and backend capabilities.
///
/// Cheap to clone and safe to share between tasks.
#[derive(Clone)]
pub struct BoundContract {
    address: Address,
    abi: Arc<JsonAbi>,
    backends: Backends,
}

impl fmt::Debug for BoundContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundContract")
            .field("address", &self.address)
            .field("backends", &self.backends)
            .finish_non_exhaustive()
    }
}

impl BoundContract {
    pub const fn new(address: Address, abi: Arc<JsonAbi>, backends: Backends) -> Self {
        Self {
            address,
            abi,
            backends,
        }
    }

    pub const fn address(&self) -> Address {
        self.address
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// Returns true if the contract was bound with `capability`.
    pub const fn has(&self, capability: Capability) -> bool {
        self.backends.has(capability)
    }

    pub(crate) fn caller(&self) -> Result<Arc<dyn ContractCaller>> {
        upgrade(self.backends.caller.as_ref(), Capability::Caller)
    }

    pub(crate) fn transactor(&self) -> Result<Arc<dyn ContractTransactor>> {
        upgrade(self.backends.transactor.as_ref(), Capability::Transactor)
    }

    pub(crate) fn filterer(&self) -> Result<Arc<dyn ContractFilterer>> {
        upgrade(self.backends.filterer.as_ref(), Capability::Filterer)
    }

    /// Accessor for a view or pure method.
    pub const fn view<C: SolCall>(&self, call: C) -> CallBuilder<'_, C> {
        CallBuilder::new(self, call)
    }

    /// Accessor for a state-changing method.
    pub const fn method<C: SolCall>(&self, call: C) -> TransactBuilder<'_, C> {
        TransactBuilder::new(self, call)
    }

    /// Accessor for one of the contract's events.
    pub const fn event<E: SolEvent + Send + 'static>(&self) -> Event<'_, E> {
        Event::new(self)
    }

    /// Execute `call` as a read-only message call and decode its return values.
    pub async fn call<C: SolCall>(&self, opts: &CallOpts, call: &C) -> Result<C::Return> {
        let output = self
            .call_data(opts, C::SIGNATURE, call.abi_encode().into())
            .await?;

        C::abi_decode_returns(&output).map_err(|e| Error::decode(C::SIGNATURE, e))
    }

    /// Invoke `method` by name with dynamically typed arguments.
    ///
    /// Overloads are resolved by argument count.
    pub async fn call_raw(
        &self,
        opts: &CallOpts,
        method: &str,
        args: &[DynSolValue],
    ) -> Result<Vec<DynSolValue>> {
        let function = self.function(method, args.len())?;
        let signature = function.signature();

        let input = function
            .abi_encode_input(args)
            .map_err(|e| Error::encode(signature.as_str(), e))?;
        let output = self.call_data(opts, &signature, input.into()).await?;

        function
            .abi_decode_output(&output)
            .map_err(|e| Error::decode(signature, e))
    }

    /// Sign and submit `call` as a transaction to this contract.
    pub async fn transact<C: SolCall>(
        &self,
        opts: &TransactOpts,
        call: &C,
    ) -> Result<SignedTransaction> {
        let transactor = self.transactor()?;
        transact::send(
            transactor.as_ref(),
            opts,
            TxKind::Call(self.address),
            call.abi_encode().into(),
            C::SIGNATURE,
        )
        .await
    }

    /// Invoke a state-changing `method` by name with dynamically typed arguments.
    pub async fn transact_raw(
        &self,
        opts: &TransactOpts,
        method: &str,
        args: &[DynSolValue],
    ) -> Result<SignedTransaction> {
        let transactor = self.transactor()?;
        let function = self.function(method, args.len())?;
        let signature = function.signature();

        let input = function
            .abi_encode_input(args)
            .map_err(|e| Error::encode(signature.as_str(), e))?;

        transact::send(
            transactor.as_ref(),
            opts,
            TxKind::Call(self.address),
            input.into(),
            &signature,
        )
        .await
    }

    /// Send `opts.value` to the contract with empty calldata, invoking its
    /// receive function (or fallback when there is none).
    pub async fn transfer(&self, opts: &TransactOpts) -> Result<SignedTransaction> {
        let transactor = self.transactor()?;
        transact::send(
            transactor.as_ref(),
            opts,
            TxKind::Call(self.address),
            Bytes::new(),
            "transfer",
        )
        .await
    }

    /// Send `calldata` verbatim to the contract's fallback function.
    pub async fn fallback(&self, opts: &TransactOpts, calldata: Bytes) -> Result<SignedTransaction> {
        if self.abi.fallback.is_none() {
            return Err(Error::NoFallback);
        }

        let transactor = self.transactor()?;
        transact::send(
            transactor.as_ref(),
            opts,
            TxKind::Call(self.address),
            calldata,
            "fallback",
        )
        .await
    }

    fn function(&self, method: &str, arity: usize) -> Result<&Function> {
        let overloads = self
            .abi
            .function(method)
            .ok_or_else(|| Error::UnknownMethod(method.to_string()))?;

        overloads
            .iter()
            .find(|f| f.inputs.len() == arity)
            .ok_or_else(|| {
                Error::encode(
                    method,
                    format!("no overload of `{method}` takes {arity} arguments"),
                )
            })
    }

    async fn call_data(&self, opts: &CallOpts, context: &str, input: Bytes) -> Result<Bytes> {
        let caller = self.caller()?;

        let request = TransactionRequest {
            from: opts.from,
            to: Some(TxKind::Call(self.address)),
            input: TransactionInput::new(input),
            ..Default::default()
        };

        debug!(
            contract = %self.address,
            method = context,
            block = ?opts.block,
            "Calling contract"
        );

        let start = Instant::now();
        let result = with_cancel(opts.cancel.as_ref(), caller.call_contract(request, opts.block))
            .await
            .and_then(|res| res.map_err(|e| Error::backend(context, e)));
        metrics::record_call(context, result.is_ok(), start.elapsed());

        let output = result?;
        if output.is_empty() {
            // An empty result from an address without code is never a valid return.
            let code = with_cancel(opts.cancel.as_ref(), caller.code_at(self.address, opts.block))
                .await?
                .map_err(|e| Error::backend(context, e))?;
            if code.is_empty() {
                return Err(Error::NoCode(self.address));
            }
        }

        Ok(output)
    }
}
