//! Building, signing and submitting transactions.

use crate::{
    backend::ContractTransactor,
    contract::with_cancel,
    error::{Error, Result},
    metrics,
    opts::TransactOpts,
};
use alloy_primitives::{keccak256, Address, Bytes, TxHash, TxKind};
use alloy_rpc_types_eth::{TransactionInput, TransactionRequest};
use tracing::debug;

/// Handle to a signed transaction.
///
/// Returned as soon as the transaction is signed (and submitted, unless
/// `no_send` was set). It does not wait for inclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    /// Transaction hash as reported by the backend, or the keccak256 of
    /// `raw` when the transaction was not submitted
    pub hash: TxHash,
    /// The fully populated request that was signed
    pub request: TransactionRequest,
    /// EIP-2718 encoded signed transaction
    pub raw: Bytes,
    /// Whether the transaction was submitted to the backend
    pub sent: bool,
}

impl SignedTransaction {
    /// Calldata (or init code for creations) carried by the transaction.
    pub fn calldata(&self) -> Bytes {
        self.request.input.input().cloned().unwrap_or_default()
    }

    /// Target of the transaction, `None` for contract creations.
    pub const fn to(&self) -> Option<Address> {
        match self.request.to {
            Some(TxKind::Call(to)) => Some(to),
            _ => None,
        }
    }
}

fn validate(opts: &TransactOpts) -> Result<()> {
    if opts.gas_price.is_some()
        && (opts.max_fee_per_gas.is_some() || opts.max_priority_fee_per_gas.is_some())
    {
        return Err(Error::InvalidOptions(
            "both gas_price and EIP-1559 fee caps specified".to_string(),
        ));
    }

    if let (Some(max_fee), Some(tip)) = (opts.max_fee_per_gas, opts.max_priority_fee_per_gas) {
        if tip > max_fee {
            return Err(Error::InvalidOptions(format!(
                "max_priority_fee_per_gas ({tip}) exceeds max_fee_per_gas ({max_fee})"
            )));
        }
    }

    Ok(())
}

/// Populate, sign and (unless `opts.no_send`) submit a transaction.
///
/// `context` names the method for errors, logs and metrics.
pub(crate) async fn send(
    transactor: &dyn ContractTransactor,
    opts: &TransactOpts,
    to: TxKind,
    input: Bytes,
    context: &str,
) -> Result<SignedTransaction> {
    validate(opts)?;
    let cancel = opts.cancel.as_ref();

    let nonce = match opts.nonce {
        Some(nonce) => nonce,
        None => with_cancel(cancel, transactor.pending_nonce_at(opts.from))
            .await?
            .map_err(|e| Error::backend(context, e))?,
    };

    let mut request = TransactionRequest {
        from: Some(opts.from),
        to: Some(to),
        input: TransactionInput::new(input.clone()),
        value: Some(opts.value),
        nonce: Some(nonce),
        chain_id: opts.chain_id,
        ..Default::default()
    };

    match opts.gas_price {
        Some(gas_price) => request.gas_price = Some(gas_price),
        None if opts.max_fee_per_gas.is_some() && opts.max_priority_fee_per_gas.is_some() => {
            request.max_fee_per_gas = opts.max_fee_per_gas;
            request.max_priority_fee_per_gas = opts.max_priority_fee_per_gas;
        }
        None => {
            let estimate = with_cancel(cancel, transactor.estimate_fees())
                .await?
                .map_err(|e| Error::backend(context, e))?;
            let tip = opts
                .max_priority_fee_per_gas
                .unwrap_or(estimate.max_priority_fee_per_gas);
            let max_fee = opts.max_fee_per_gas.unwrap_or(estimate.max_fee_per_gas);
            if tip > max_fee {
                return Err(Error::InvalidOptions(format!(
                    "max_priority_fee_per_gas ({tip}) exceeds max_fee_per_gas ({max_fee})"
                )));
            }
            request.max_fee_per_gas = Some(max_fee);
            request.max_priority_fee_per_gas = Some(tip);
        }
    }

    let gas = match opts.gas_limit {
        Some(gas) => gas,
        None => {
            if let TxKind::Call(target) = to {
                if !input.is_empty() {
                    let code = with_cancel(cancel, transactor.pending_code_at(target))
                        .await?
                        .map_err(|e| Error::backend(context, e))?;
                    if code.is_empty() {
                        return Err(Error::NoCode(target));
                    }
                }
            }

            with_cancel(cancel, transactor.estimate_gas(request.clone()))
                .await?
                .map_err(|e| Error::backend(context, e))?
        }
    };
    request.gas = Some(gas);

    debug!(
        method = context,
        from = %opts.from,
        nonce,
        gas,
        "Signing transaction"
    );

    let raw = with_cancel(cancel, (opts.signer)(request.clone()))
        .await?
        .map_err(|e| Error::Signer {
            context: context.to_string(),
            reason: e.to_string(),
        })?;

    let (hash, sent) = if opts.no_send {
        (keccak256(&raw), false)
    } else {
        let hash = with_cancel(cancel, transactor.send_transaction(&request, raw.clone()))
            .await?
            .map_err(|e| Error::backend(context, e))?;
        debug!(method = context, %hash, "Submitted transaction");
        (hash, true)
    };

    metrics::record_transaction(context);

    Ok(SignedTransaction {
        hash,
        request,
        raw,
        sent,
    })
}
