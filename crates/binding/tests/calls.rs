//! Encoding of generated accessors: selectors, overloads, structs and
//! renamed methods.

use alloy_primitives::{address, bytes, keccak256, Address, Selector, B256, U256};
use alloy_sol_types::{SolCall, SolEvent, SolValue};
use bind::{testing::SimulatedBackend, CallOpts, Error};
use binding::{
    predeploys, GasPriceOracle, IDelayedVetoable, IGasPriceOracle, IMulticall3, IStorageSetter,
    Multicall3, ProtocolVersions, StorageSetter,
};
use setup::transact_opts;
use std::sync::Arc;


fn selector(signature: &str) -> Selector {
    Selector::from_slice(&keccak256(signature)[..4])
}

fn with_code(account: Address) -> Arc<SimulatedBackend> {
    let backend = Arc::new(SimulatedBackend::new());
    backend.set_code(account, bytes!("00"));
    backend
}

#[tokio::test]
async fn test_write_returns_signed_handle() {
    let backend = with_code(predeploys::GAS_PRICE_ORACLE);
    let oracle = GasPriceOracle::new(predeploys::GAS_PRICE_ORACLE, &backend).unwrap();

    let tx = oracle
        .set_scalar(U256::from(42))
        .send(&transact_opts())
        .await
        .unwrap();

    let mut expected = selector("setScalar(uint256)").to_vec();
    expected.extend_from_slice(&U256::from(42).abi_encode());
    assert_eq!(tx.calldata(), expected);
    assert_eq!(tx.to(), Some(predeploys::GAS_PRICE_ORACLE));
    assert!(tx.sent);
    assert_eq!(tx.request.gas, Some(SimulatedBackend::GAS_ESTIMATE));
    assert_eq!(backend.sent_transactions(), vec![tx.request]);
}

#[test]
fn test_selectors_match_signatures() {
    assert_eq!(
        IDelayedVetoable::versionCall::SELECTOR,
        selector("version()").0
    );
    assert_eq!(
        IGasPriceOracle::getL1FeeCall::SELECTOR,
        selector("getL1Fee(bytes)").0
    );
    assert_eq!(
        IMulticall3::aggregate3Call::SIGNATURE,
        "aggregate3((address,bool,bytes)[])"
    );
    assert_eq!(
        IDelayedVetoable::Forwarded::SIGNATURE_HASH,
        keccak256("Forwarded(bytes32,bytes)")
    );
    assert_eq!(
        IGasPriceOracle::OwnershipTransferred::SIGNATURE_HASH,
        keccak256("OwnershipTransferred(address,address)")
    );
}

#[test]
fn test_renamed_accessors_keep_their_selectors() {
    let backend = Arc::new(SimulatedBackend::new());
    let versions = ProtocolVersions::new(Address::ZERO, &backend).unwrap();
    assert_eq!(versions.version().selector(), selector("version()"));
    assert_eq!(versions.version_1().selector(), selector("VERSION()"));

    let setter = StorageSetter::new(Address::ZERO, &backend).unwrap();
    let slot = IStorageSetter::Slot {
        key: B256::with_last_byte(1),
        value: B256::with_last_byte(2),
    };
    assert_eq!(
        setter.set_bytes32_0(vec![slot.clone()]).selector(),
        selector("setBytes32((bytes32,bytes32)[])")
    );
    assert_eq!(
        setter.set_bytes32_1(slot.key, slot.value).selector(),
        selector("setBytes32(bytes32,bytes32)")
    );

    let call = IStorageSetter::setBytes32_0Call::abi_decode(
        &setter.set_bytes32_0(vec![slot.clone()]).calldata(),
    )
    .unwrap();
    assert_eq!(call.slots, vec![slot]);
}

#[tokio::test]
async fn test_struct_arguments_and_returns() {
    let backend = with_code(predeploys::MULTICALL3);
    let multicall = Multicall3::new(predeploys::MULTICALL3, &backend).unwrap();

    backend.on_call(
        predeploys::MULTICALL3,
        IMulticall3::aggregate3Call::SELECTOR,
        |input| {
            let call = IMulticall3::aggregate3Call::abi_decode(input).unwrap();
            let results: Vec<_> = call
                .calls
                .into_iter()
                .map(|c| IMulticall3::Result {
                    success: c.allowFailure,
                    returnData: c.callData,
                })
                .collect();
            IMulticall3::aggregate3Call::abi_encode_returns(&results).into()
        },
    );

    let calls = vec![
        IMulticall3::Call3 {
            target: predeploys::L1_BLOCK,
            allowFailure: true,
            callData: bytes!("54fd4d50"),
        },
        IMulticall3::Call3 {
            target: predeploys::GAS_PRICE_ORACLE,
            allowFailure: false,
            callData: bytes!("313ce567"),
        },
    ];

    let results = multicall
        .aggregate3(calls)
        .call(&CallOpts::default())
        .await
        .unwrap();
    assert_eq!(results.len(), 2);
    assert!(results[0].success);
    assert_eq!(results[0].returnData, bytes!("54fd4d50"));
    assert!(!results[1].success);
}

#[tokio::test]
async fn test_multiple_returns_decode_to_struct() {
    let backend = with_code(predeploys::MULTICALL3);
    let multicall = Multicall3::new(predeploys::MULTICALL3, &backend).unwrap();
    let hash = B256::with_last_byte(9);

    backend.on_selector(IMulticall3::blockAndAggregateCall::SELECTOR, move |_| {
        (U256::from(7), hash, Vec::<IMulticall3::Result>::new())
            .abi_encode_params()
            .into()
    });

    let out = multicall
        .block_and_aggregate(Vec::new())
        .call(&CallOpts::default())
        .await
        .unwrap();
    assert_eq!(out.blockNumber, U256::from(7));
    assert_eq!(out.blockHash, hash);
    assert!(out.returnData.is_empty());
}

#[tokio::test]
async fn test_odd_width_integers() {
    let messenger_address = predeploys::L2_TO_L2_CROSS_DOMAIN_MESSENGER;
    let backend = with_code(messenger_address);
    let messenger = binding::L2ToL2CrossDomainMessenger::new(messenger_address, &backend).unwrap();
    let balance = alloy_primitives::Uint::<248, 4>::MAX;

    backend.on_call(
        messenger_address,
        binding::IL2ToL2CrossDomainMessenger::INITIAL_BALANCECall::SELECTOR,
        move |_| {
            binding::IL2ToL2CrossDomainMessenger::INITIAL_BALANCECall::abi_encode_returns(&balance)
                .into()
        },
    );

    let out = messenger
        .initial_balance()
        .call(&CallOpts::default())
        .await
        .unwrap();
    assert_eq!(out, balance);
}

#[tokio::test]
async fn test_contract_without_fallback() {
    let backend = with_code(predeploys::GAS_PRICE_ORACLE);
    let oracle = GasPriceOracle::new(predeploys::GAS_PRICE_ORACLE, &backend).unwrap();

    let err = oracle
        .raw()
        .fallback(&transact_opts(), bytes!("01"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NoFallback));
    assert!(backend.sent_transactions().is_empty());
}

#[tokio::test]
async fn test_call_to_empty_account() {
    let backend = Arc::new(SimulatedBackend::new());
    let oracle = GasPriceOracle::new_caller(
        address!("00000000000000000000000000000000deadbeef"),
        &backend,
    )
    .unwrap();

    let err = oracle.scalar().call(&CallOpts::default()).await.unwrap_err();
    assert!(matches!(err, Error::NoCode(_)));
}
