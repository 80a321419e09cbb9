use crate::{
    backend::ContractBackend,
    contract::{with_cancel, Backends, BoundContract},
    error::{Error, Result},
    meta::ContractMetaData,
    metrics,
    opts::TransactOpts,
    transact::{self, SignedTransaction},
};
use alloy_dyn_abi::{DynSolValue, JsonAbiExt};
use alloy_primitives::{Address, Bytes, TxKind};
use std::sync::Arc;
use tracing::info;

/// Deploy a contract from its metadata with dynamically typed constructor
/// arguments.
///
/// `args` are checked and encoded against the ABI constructor.
pub async fn deploy_contract<B>(
    opts: &TransactOpts,
    meta: &ContractMetaData,
    backend: &Arc<B>,
    args: &[DynSolValue],
) -> Result<(Address, SignedTransaction, BoundContract)>
where
    B: ContractBackend + 'static,
{
    let abi = meta.get_abi()?;
    let encoded = match &abi.constructor {
        Some(constructor) => constructor
            .abi_encode_input(args)
            .map_err(|e| Error::encode("constructor", e))?,
        None if args.is_empty() => Vec::new(),
        None => {
            return Err(Error::encode(
                "constructor",
                format!("contract declares no constructor but {} arguments given", args.len()),
            ))
        }
    };

    deploy_encoded(opts, meta, backend, encoded.into()).await
}

/// Deploy a contract from its metadata.
///
/// `constructor_args` are the ABI-encoded constructor parameters. They are
/// appended to the deploy bytecode and submitted as a creation transaction.
/// Returns the address the contract will live at, the transaction handle and
/// a contract bound to every capability of `backend`.
pub async fn deploy_encoded<B>(
    opts: &TransactOpts,
    meta: &ContractMetaData,
    backend: &Arc<B>,
    constructor_args: Bytes,
) -> Result<(Address, SignedTransaction, BoundContract)>
where
    B: ContractBackend + 'static,
{
    let abi = meta.get_abi()?;
    let bytecode = meta.bytecode()?;
    if bytecode.is_empty() {
        return Err(Error::InvalidBytecode("no deploy bytecode".to_string()));
    }

    if abi.constructor.is_none() && !constructor_args.is_empty() {
        return Err(Error::encode(
            "constructor",
            "contract declares no constructor but arguments were given",
        ));
    }
    let init_code = [bytecode.as_ref(), constructor_args.as_ref()].concat();

    let nonce = match opts.nonce {
        Some(nonce) => nonce,
        None => with_cancel(opts.cancel.as_ref(), backend.pending_nonce_at(opts.from))
            .await?
            .map_err(|e| Error::backend("deploy", e))?,
    };
    let address = opts.from.create(nonce);

    let existing = with_cancel(opts.cancel.as_ref(), backend.pending_code_at(address))
        .await?
        .map_err(|e| Error::backend("deploy", e))?;
    if !existing.is_empty() {
        return Err(Error::AddressCollision(address));
    }

    let opts = TransactOpts {
        nonce: Some(nonce),
        ..opts.clone()
    };
    let tx = transact::send(
        backend.as_ref(),
        &opts,
        TxKind::Create,
        Bytes::from(init_code),
        "deploy",
    )
    .await?;

    info!(%address, hash = %tx.hash, "Deployed contract");
    metrics::record_deployment();

    let contract = BoundContract::new(address, abi, Backends::full(backend));
    Ok((address, tx, contract))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{test_signer, SimulatedBackend};
    use alloy_primitives::{address, bytes, U256};

    static OWNED: ContractMetaData = ContractMetaData::new(
        r#"[{"type":"constructor","inputs":[{"name":"_owner","type":"address"}],"stateMutability":"nonpayable"}]"#,
        "0x6080604052",
    );

    const DEPLOYER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    #[tokio::test]
    async fn test_deploy_appends_constructor_args() {
        let backend = Arc::new(SimulatedBackend::new());
        let opts = TransactOpts::new(DEPLOYER, test_signer());

        let (address, tx, contract) = deploy_contract(
            &opts,
            &OWNED,
            &backend,
            &[DynSolValue::Address(DEPLOYER)],
        )
        .await
        .unwrap();

        assert_eq!(address, DEPLOYER.create(0));
        assert_eq!(contract.address(), address);
        assert!(tx.to().is_none());

        let calldata = tx.calldata();
        assert_eq!(&calldata[..5], bytes!("6080604052").as_ref());
        assert_eq!(&calldata[5..], DEPLOYER.into_word().as_slice());
    }

    #[tokio::test]
    async fn test_mismatched_constructor_args() {
        let backend = Arc::new(SimulatedBackend::new());
        let opts = TransactOpts::new(DEPLOYER, test_signer());

        let err = deploy_contract(&opts, &OWNED, &backend, &[DynSolValue::from(U256::from(1))])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Encode { .. }));
        assert_eq!(backend.request_count(), 0);
    }

    #[tokio::test]
    async fn test_address_collision() {
        let backend = Arc::new(SimulatedBackend::new());
        backend.set_code(DEPLOYER.create(0), bytes!("00"));
        let opts = TransactOpts::new(DEPLOYER, test_signer());

        let err = deploy_encoded(&opts, &OWNED, &backend, Bytes::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AddressCollision(addr) if addr == DEPLOYER.create(0)));
        assert!(backend.sent_transactions().is_empty());
    }
}
