//! Filtering, watching and parsing generated event bindings.

use alloy_primitives::{address, bytes, Bytes, B256, U256};
use alloy_sol_types::SolEvent;
use bind::{
    testing::SimulatedBackend, CancellationToken, Error, FilterOpts, IteratorState, WatchOpts,
};
use binding::{
    IDelayedVetoable, IL2ToL2CrossDomainMessenger, IProtocolVersions, L2ToL2CrossDomainMessenger,
    ProtocolVersions,
};
use setup::deploy_vetoable;
use std::{sync::Arc, time::Duration};
use tokio::sync::mpsc;


fn call_hash(n: u8) -> B256 {
    B256::with_last_byte(n)
}

fn forwarded(n: u8) -> IDelayedVetoable::Forwarded {
    IDelayedVetoable::Forwarded {
        callHash: call_hash(n),
        data: Bytes::from(vec![n; 3]),
    }
}

#[tokio::test]
async fn test_filter_by_call_hash() {
    let (backend, vetoable) = deploy_vetoable().await;
    for n in 1..=3 {
        backend.emit_event(vetoable.address(), &forwarded(n)).await;
    }
    let opts = FilterOpts::range(0, None);

    let events = vetoable
        .filter_forwarded(&opts, &[call_hash(2)])
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].callHash, call_hash(2));
    assert_eq!(events[0].data, Bytes::from(vec![2; 3]));

    let events = vetoable
        .filter_forwarded(&opts, &[call_hash(1), call_hash(3)])
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();
    let hashes: Vec<_> = events.iter().map(|e| e.callHash).collect();
    assert_eq!(hashes, [call_hash(1), call_hash(3)]);
    assert!(events[0].log.log_index < events[1].log.log_index);

    let all = vetoable.filter_forwarded(&opts, &[]).await.unwrap();
    assert_eq!(all.collect().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_filter_skips_other_events_and_blocks() {
    let (backend, vetoable) = deploy_vetoable().await;
    backend
        .emit_event(
            vetoable.address(),
            &IDelayedVetoable::Initiated {
                callHash: call_hash(1),
                data: Bytes::new(),
            },
        )
        .await;
    backend.mine(5);
    backend.emit_event(vetoable.address(), &forwarded(2)).await;

    let events = vetoable
        .filter_forwarded(&FilterOpts::range(0, None), &[])
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();
    assert_eq!(events.len(), 1);

    let head = backend.block_number();
    let events = vetoable
        .filter_forwarded(&FilterOpts::range(0, Some(head - 1)), &[])
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_filter_on_second_indexed_argument() {
    let backend = Arc::new(SimulatedBackend::new());
    let versions = ProtocolVersions::new(
        address!("4200000000000000000000000000000000000042"),
        &backend,
    )
    .unwrap();

    for (version, update_type) in [(1u64, 0u8), (1, 1), (2, 1)] {
        let update = IProtocolVersions::ConfigUpdate {
            version: U256::from(version),
            updateType: update_type,
            data: Bytes::new(),
        };
        backend.emit_event(versions.address(), &update).await;
    }
    let opts = FilterOpts::default();

    let recommended = versions
        .filter_config_update(&opts, &[], &[1])
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();
    let versions_seen: Vec<_> = recommended.iter().map(|e| e.version).collect();
    assert_eq!(versions_seen, [U256::from(1), U256::from(2)]);

    let exact = versions
        .filter_config_update(&opts, &[U256::from(1)], &[0])
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].updateType, 0);
}

#[tokio::test]
async fn test_watch_stops_on_cancel() {
    let (backend, vetoable) = deploy_vetoable().await;
    let cancel = CancellationToken::new();
    let (sink, mut events) = mpsc::channel(8);

    let sub = vetoable
        .watch_forwarded(&WatchOpts::with_cancel(cancel.clone()), sink, &[])
        .await
        .unwrap();

    backend.emit_event(vetoable.address(), &forwarded(1)).await;
    let first = events.recv().await.unwrap();
    assert_eq!(first.callHash, call_hash(1));

    cancel.cancel();
    tokio::time::timeout(Duration::from_secs(1), sub.wait())
        .await
        .expect("watcher returns promptly")
        .unwrap();

    backend.emit_event(vetoable.address(), &forwarded(2)).await;
    assert!(events.try_recv().is_err());
    assert_eq!(backend.live_subscriptions(), 0);
}

#[tokio::test]
async fn test_watch_filters_and_backfills() {
    let (backend, vetoable) = deploy_vetoable().await;
    backend.emit_event(vetoable.address(), &forwarded(1)).await;
    backend.emit_event(vetoable.address(), &forwarded(2)).await;

    let opts = WatchOpts {
        start: Some(0),
        cancel: None,
    };
    let (sink, mut events) = mpsc::channel(8);
    let sub = vetoable
        .watch_forwarded(&opts, sink, &[call_hash(1), call_hash(3)])
        .await
        .unwrap();

    backend.emit_event(vetoable.address(), &forwarded(2)).await;
    backend.emit_event(vetoable.address(), &forwarded(3)).await;

    assert_eq!(events.recv().await.unwrap().callHash, call_hash(1));
    assert_eq!(events.recv().await.unwrap().callHash, call_hash(3));

    sub.unsubscribe();
    sub.wait().await.unwrap();
}

#[tokio::test]
async fn test_iterator_drains_after_clean_close() {
    let (backend, vetoable) = deploy_vetoable().await;
    let mut iter = vetoable
        .raw()
        .event::<IDelayedVetoable::Forwarded>()
        .subscribe(&WatchOpts::default(), vec![])
        .await
        .unwrap();

    backend.emit_event(vetoable.address(), &forwarded(1)).await;
    backend.emit_event(vetoable.address(), &forwarded(2)).await;
    backend.close_subscriptions();

    assert_eq!(iter.next().await.unwrap().callHash, call_hash(1));
    assert_eq!(iter.next().await.unwrap().callHash, call_hash(2));
    assert!(iter.next().await.is_none());
    assert!(iter.next().await.is_none());
    assert!(iter.error().is_none());
    assert_eq!(iter.state(), IteratorState::Drained);
}

#[tokio::test]
async fn test_parse_rejects_other_event() {
    let (backend, vetoable) = deploy_vetoable().await;
    let initiated = backend
        .emit_event(
            vetoable.address(),
            &IDelayedVetoable::Initiated {
                callHash: call_hash(1),
                data: bytes!("01"),
            },
        )
        .await;

    let err = vetoable.parse_forwarded(&initiated).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));

    let parsed = vetoable.parse_initiated(&initiated).unwrap();
    assert_eq!(parsed.callHash, call_hash(1));
    assert_eq!(parsed.log, initiated);
}

#[tokio::test]
async fn test_anonymous_event() {
    let backend = Arc::new(SimulatedBackend::new());
    let messenger = L2ToL2CrossDomainMessenger::new(
        binding::predeploys::L2_TO_L2_CROSS_DOMAIN_MESSENGER,
        &backend,
    )
    .unwrap();
    let sent = IL2ToL2CrossDomainMessenger::SentMessage {
        destination: U256::from(901),
        target: address!("4200000000000000000000000000000000000042"),
        message: bytes!("c0ffee"),
        data: bytes!("01"),
    };

    let log = backend.emit_event(messenger.address(), &sent).await;
    assert!(!log.inner.data.topics().contains(
        &IL2ToL2CrossDomainMessenger::SentMessage::SIGNATURE_HASH
    ));

    assert_eq!(messenger.parse_sent_message(&log).unwrap().event, sent);

    let events = messenger
        .filter_sent_message(&FilterOpts::default())
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].destination, U256::from(901));
}
