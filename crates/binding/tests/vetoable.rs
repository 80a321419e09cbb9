//! Deployment, reads, writes and raw access through the generated
//! `DelayedVetoable` binding.

use alloy_primitives::{bytes, Address, U256};
use alloy_sol_types::{SolCall, SolInterface, SolType};
use bind::{CallOpts, Capability, DynSolValue, Error};
use binding::{DelayedVetoable, IDelayedVetoable, DELAYED_VETOABLE_META_DATA};
use setup::{deploy_vetoable, transact_opts, DELAY, DEPLOYER, INITIATOR, TARGET, VETOER};


#[tokio::test]
async fn test_deploy_and_read_version() {
    let (backend, vetoable) = deploy_vetoable().await;

    assert_eq!(vetoable.address(), DEPLOYER.create(0));
    let deployment = &backend.sent_transactions()[0];
    assert!(deployment.to.is_some_and(|to| to.is_create()));

    let version = vetoable.version().call(&CallOpts::default()).await.unwrap();
    assert_eq!(version, "1.0.0");

    let session = vetoable.session(CallOpts::default(), transact_opts());
    assert_eq!(session.call(|c| c.version()).await.unwrap(), "1.0.0");
}

#[tokio::test]
async fn test_constructor_args_follow_bytecode() {
    let (_, tx, _) = DelayedVetoable::deploy(
        &transact_opts(),
        &std::sync::Arc::new(bind::testing::SimulatedBackend::new()),
        VETOER,
        INITIATOR,
        TARGET,
        U256::from(DELAY),
    )
    .await
    .unwrap();

    let bytecode = DELAYED_VETOABLE_META_DATA.bytecode().unwrap();
    let init_code = tx.calldata();
    assert!(init_code.starts_with(&bytecode));

    type Args = (
        alloy_sol_types::sol_data::Address,
        alloy_sol_types::sol_data::Address,
        alloy_sol_types::sol_data::Address,
        alloy_sol_types::sol_data::Uint<256>,
    );
    let args = Args::abi_decode_params(&init_code[bytecode.len()..]).unwrap();
    assert_eq!(args, (VETOER, INITIATOR, TARGET, U256::from(DELAY)));
}

#[tokio::test]
async fn test_nonpayable_getter_can_be_simulated_or_sent() {
    let (backend, vetoable) = deploy_vetoable().await;

    let delay = vetoable.delay().call(&CallOpts::default()).await.unwrap();
    assert_eq!(delay, U256::from(DELAY));

    let tx = vetoable.delay().send(&transact_opts()).await.unwrap();
    assert_eq!(tx.to(), Some(vetoable.address()));
    assert_eq!(tx.calldata(), IDelayedVetoable::delayCall {}.abi_encode());
    assert_eq!(tx.request.nonce, Some(1));
    assert_eq!(backend.sent_transactions().len(), 2);
}

#[tokio::test]
async fn test_raw_call_matches_typed() {
    let (_backend, vetoable) = deploy_vetoable().await;

    let out = vetoable
        .raw()
        .call_raw(&CallOpts::default(), "version", &[])
        .await
        .unwrap();
    assert_eq!(out, vec![DynSolValue::String("1.0.0".to_string())]);

    let tx = vetoable
        .raw()
        .transact_raw(&transact_opts(), "vetoer", &[])
        .await
        .unwrap();
    assert_eq!(tx.calldata(), vetoable.vetoer().calldata());
}

#[tokio::test]
async fn test_custom_error_is_decoded() {
    let (backend, vetoable) = deploy_vetoable().await;
    let unauthorized = IDelayedVetoable::IDelayedVetoableErrors::Unauthorized(
        IDelayedVetoable::Unauthorized {
            expected: INITIATOR,
            actual: Address::ZERO,
        },
    );
    backend.revert_with(
        vetoable.address(),
        IDelayedVetoable::vetoerCall::SELECTOR,
        unauthorized.abi_encode().into(),
    );

    let err = vetoable.vetoer().call(&CallOpts::default()).await.unwrap_err();
    assert!(matches!(err, Error::ExecutionReverted { .. }));
    assert_eq!(
        err.decode_revert::<IDelayedVetoable::IDelayedVetoableErrors>(),
        Some(unauthorized)
    );
}

#[tokio::test]
async fn test_transfer_and_fallback_are_distinct() {
    let (_backend, vetoable) = deploy_vetoable().await;
    let opts = transact_opts().with_value(U256::from(7));

    let transfer = vetoable.transfer(&opts).await.unwrap();
    assert!(transfer.calldata().is_empty());
    assert_eq!(transfer.request.value, Some(U256::from(7)));

    let fallback = vetoable
        .fallback(&transact_opts(), bytes!("d09de08a"))
        .await
        .unwrap();
    assert_eq!(fallback.calldata(), bytes!("d09de08a"));
    assert_eq!(fallback.to(), Some(vetoable.address()));
}

#[tokio::test]
async fn test_missing_capabilities_never_reach_backend() {
    let (backend, deployed) = deploy_vetoable().await;
    let before = backend.request_count();

    let reader = DelayedVetoable::new_caller(deployed.address(), &backend).unwrap();
    let err = reader.delay().send(&transact_opts()).await.unwrap_err();
    assert!(matches!(err, Error::CapabilityAbsent(Capability::Transactor)));
    let err = reader
        .filter_forwarded(&bind::FilterOpts::default(), &[])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::CapabilityAbsent(Capability::Filterer)));

    let writer = DelayedVetoable::new_transactor(deployed.address(), &backend).unwrap();
    let err = writer.version().call(&CallOpts::default()).await.unwrap_err();
    assert!(matches!(err, Error::CapabilityAbsent(Capability::Caller)));

    assert_eq!(backend.request_count(), before);
}

#[tokio::test]
async fn test_dropped_backend() {
    let (backend, vetoable) = deploy_vetoable().await;
    drop(backend);

    let err = vetoable.version().call(&CallOpts::default()).await.unwrap_err();
    assert!(matches!(err, Error::BackendDropped));
}
