//! One generic binding for every contract event.
//!
//! Generated stubs only declare the event record (through `sol!`) and forward
//! their typed indexed arguments here.

use crate::{
    backend::FilterQuery,
    contract::{with_cancel, BoundContract},
    error::{Error, Result},
    iterator::EventIterator,
    metrics,
    opts::{FilterOpts, WatchOpts},
    subscription::Subscription,
    watch::{self, EventSink, EventSubscription},
};
use alloy_primitives::{Address, Bytes, FixedBytes, B256, I256, U256};
use alloy_rpc_types_eth::Log;
use alloy_sol_types::{sol_data, EventTopic, SolEvent};
use std::{marker::PhantomData, ops::Deref};
use tokio::sync::mpsc;
use tracing::debug;

/// Capacity of the log channel between a backend subscription and its consumer.
pub(crate) const LOG_CHANNEL_CAPACITY: usize = 128;

/// A value that can be matched against an indexed event parameter.
///
/// Value types encode to their 32-byte ABI word. Dynamic types (`string`,
/// `bytes`) are indexed by the keccak256 hash of their contents.
pub trait IntoTopic {
    fn to_topic(&self) -> B256;
}

macro_rules! impl_into_topic {
    ($($rust:ty => $sol:ty),* $(,)?) => {$(
        impl IntoTopic for $rust {
            fn to_topic(&self) -> B256 {
                <$sol as EventTopic>::encode_topic(self).0
            }
        }
    )*};
}

impl_into_topic! {
    Address => sol_data::Address,
    bool => sol_data::Bool,
    u8 => sol_data::Uint<8>,
    u16 => sol_data::Uint<16>,
    u32 => sol_data::Uint<32>,
    u64 => sol_data::Uint<64>,
    u128 => sol_data::Uint<128>,
    U256 => sol_data::Uint<256>,
    i8 => sol_data::Int<8>,
    i16 => sol_data::Int<16>,
    i32 => sol_data::Int<32>,
    i64 => sol_data::Int<64>,
    i128 => sol_data::Int<128>,
    I256 => sol_data::Int<256>,
    String => sol_data::String,
    Bytes => sol_data::Bytes,
}

impl<const N: usize> IntoTopic for FixedBytes<N> {
    fn to_topic(&self) -> B256 {
        B256::right_padding_from(self.as_slice())
    }
}

impl IntoTopic for str {
    fn to_topic(&self) -> B256 {
        alloy_primitives::keccak256(self.as_bytes())
    }
}

impl<T: IntoTopic + ?Sized> IntoTopic for &T {
    fn to_topic(&self) -> B256 {
        (**self).to_topic()
    }
}

/// Turn the accepted values of one indexed parameter into an OR-set of topics.
///
/// An empty slice yields an empty set, which matches any value.
pub fn topic_set<T: IntoTopic>(values: &[T]) -> Vec<B256> {
    values.iter().map(IntoTopic::to_topic).collect()
}

/// A decoded event together with the log it was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<E> {
    pub event: E,
    pub log: Log,
}

impl<E> Decoded<E> {
    /// Returns true if the log was removed by a chain reorganisation.
    pub const fn removed(&self) -> bool {
        self.log.removed
    }

    pub fn into_inner(self) -> E {
        self.event
    }
}

impl<E> Deref for Decoded<E> {
    type Target = E;

    fn deref(&self) -> &Self::Target {
        &self.event
    }
}

/// Decode `log` as an `E` event.
///
/// For non-anonymous events topic0 must equal the event selector. Anonymous
/// events carry no selector, so their first topic is decoded as payload.
pub fn decode_log<E: SolEvent>(log: &Log) -> Result<Decoded<E>> {
    let topics = log.inner.data.topics();

    if !E::ANONYMOUS && topics.first() != Some(&E::SIGNATURE_HASH) {
        return Err(Error::decode(
            E::SIGNATURE,
            match topics.first() {
                Some(topic) => format!("topic0 {topic} is not the event selector"),
                None => "log has no topics".to_string(),
            },
        ));
    }

    let event = E::decode_raw_log(topics.iter().copied(), &log.inner.data.data)
        .map_err(|e| Error::decode(E::SIGNATURE, e))?;
    metrics::record_log_decoded(E::SIGNATURE);

    Ok(Decoded {
        event,
        log: log.clone(),
    })
}

/// Filter, watch and parse accessors for the `E` event of a bound contract.
#[derive(Debug)]
pub struct Event<'a, E> {
    contract: &'a BoundContract,
    _event: PhantomData<fn() -> E>,
}

impl<'a, E: SolEvent + Send + 'static> Event<'a, E> {
    pub const fn new(contract: &'a BoundContract) -> Self {
        Self {
            contract,
            _event: PhantomData,
        }
    }

    /// Build the backend query for this event.
    ///
    /// `indexed` holds one topic set per indexed parameter, in declaration
    /// order.
    pub fn query(&self, indexed: Vec<Vec<B256>>) -> Result<FilterQuery> {
        let max = if E::ANONYMOUS { 4 } else { 3 };
        if indexed.len() > max {
            return Err(Error::encode(
                E::SIGNATURE,
                format!("{} indexed topics given, at most {max} allowed", indexed.len()),
            ));
        }

        let mut topics = Vec::with_capacity(indexed.len() + 1);
        if !E::ANONYMOUS {
            topics.push(vec![E::SIGNATURE_HASH]);
        }
        topics.extend(indexed);

        // Trailing wildcards constrain nothing.
        while topics.last().is_some_and(Vec::is_empty) {
            topics.pop();
        }

        Ok(FilterQuery {
            topics,
            ..FilterQuery::new(self.contract.address())
        })
    }

    /// Retrieve past `E` logs in `opts`' block range.
    pub async fn filter(
        &self,
        opts: &FilterOpts,
        indexed: Vec<Vec<B256>>,
    ) -> Result<EventIterator<E>> {
        let filterer = self.contract.filterer()?;
        let query = FilterQuery {
            from_block: Some(opts.start),
            to_block: opts.end,
            ..self.query(indexed)?
        };

        debug!(
            contract = %self.contract.address(),
            event = E::SIGNATURE,
            from = opts.start,
            to = ?opts.end,
            "Filtering logs"
        );

        let logs = with_cancel(opts.cancel.as_ref(), filterer.filter_logs(query))
            .await?
            .map_err(|e| Error::backend(E::SIGNATURE, e))?;

        let (tx, rx) = mpsc::channel(logs.len().max(1));
        for log in logs {
            // Capacity matches the number of logs, so this never fails.
            let _ = tx.try_send(log);
        }

        Ok(EventIterator::new(rx, Subscription::completed()))
    }

    /// Stream new `E` logs into an iterator.
    pub async fn subscribe(
        &self,
        opts: &WatchOpts,
        indexed: Vec<Vec<B256>>,
    ) -> Result<EventIterator<E>> {
        let (logs, sub) = self.open(opts, indexed).await?;
        Ok(EventIterator::new(logs, sub))
    }

    /// Forward new `E` events to `sink` from a background task.
    ///
    /// The watcher stops when `opts.cancel` fires, when the returned handle is
    /// unsubscribed, when `sink` is closed, or when the backend subscription
    /// fails.
    pub async fn watch(
        &self,
        opts: &WatchOpts,
        sink: EventSink<E>,
        indexed: Vec<Vec<B256>>,
    ) -> Result<EventSubscription> {
        let (logs, sub) = self.open(opts, indexed).await?;
        Ok(watch::spawn(
            self.contract.address(),
            opts.cancel.as_ref(),
            logs,
            sub,
            sink,
        ))
    }

    /// Decode a single log as an `E` event.
    pub fn parse(&self, log: &Log) -> Result<Decoded<E>> {
        decode_log(log)
    }

    async fn open(
        &self,
        opts: &WatchOpts,
        indexed: Vec<Vec<B256>>,
    ) -> Result<(mpsc::Receiver<Log>, Subscription)> {
        let filterer = self.contract.filterer()?;
        let query = FilterQuery {
            from_block: opts.start,
            ..self.query(indexed)?
        };

        debug!(
            contract = %self.contract.address(),
            event = E::SIGNATURE,
            start = ?opts.start,
            "Subscribing to logs"
        );

        let (tx, rx) = mpsc::channel(LOG_CHANNEL_CAPACITY);
        let sub = with_cancel(
            opts.cancel.as_ref(),
            filterer.subscribe_filter_logs(query, tx),
        )
        .await?
        .map_err(|e| Error::backend(E::SIGNATURE, e))?;

        Ok((rx, sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256, keccak256, LogData};
    use alloy_sol_types::sol;

    sol! {
        #[derive(Debug, PartialEq, Eq)]
        event Forwarded(bytes32 indexed callHash, bytes data);

        #[derive(Debug, PartialEq, Eq)]
        event Initiated(bytes32 indexed callHash, bytes data);

        #[derive(Debug, PartialEq, Eq)]
        event Tagged(address indexed who, string indexed tag) anonymous;
    }

    fn rpc_log(topics: Vec<B256>, data: Bytes) -> Log {
        Log {
            inner: alloy_primitives::Log {
                address: Address::ZERO,
                data: LogData::new_unchecked(topics, data),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_topic_encoding() {
        let who = address!("5CFFA347b0aE99cc01E5c01714cA5658e54a23D1");
        assert_eq!(who.to_topic(), who.into_word());
        assert_eq!(7u8.to_topic(), B256::with_last_byte(7));
        assert_eq!(U256::from(7).to_topic(), B256::with_last_byte(7));
        assert_eq!(true.to_topic(), B256::with_last_byte(1));
        assert_eq!((-1i64).to_topic(), B256::repeat_byte(0xff));
        assert_eq!("hello".to_string().to_topic(), keccak256("hello"));
        assert_eq!("hello".to_topic(), keccak256("hello"));

        let hash = b256!("1111111111111111111111111111111111111111111111111111111111111111");
        assert_eq!(hash.to_topic(), hash);
        assert_eq!(
            FixedBytes::<4>::from([1, 2, 3, 4]).to_topic()[..5],
            [1, 2, 3, 4, 0]
        );
        assert_eq!(topic_set::<B256>(&[]), Vec::<B256>::new());
    }

    #[test]
    fn test_decode_checks_selector() {
        let hash = B256::with_last_byte(9);
        let event = Forwarded {
            callHash: hash,
            data: Bytes::from_static(b"payload"),
        };
        let log = rpc_log(
            vec![Forwarded::SIGNATURE_HASH, hash],
            event.encode_data().into(),
        );

        let decoded = decode_log::<Forwarded>(&log).unwrap();
        assert_eq!(decoded.callHash, hash);
        assert_eq!(decoded.data, event.data);
        assert!(!decoded.removed());

        let wrong = rpc_log(
            vec![Initiated::SIGNATURE_HASH, hash],
            event.encode_data().into(),
        );
        assert!(matches!(
            decode_log::<Forwarded>(&wrong),
            Err(Error::Decode { .. })
        ));
        assert!(matches!(
            decode_log::<Forwarded>(&rpc_log(vec![], Bytes::new())),
            Err(Error::Decode { .. })
        ));
    }

    #[test]
    fn test_anonymous_event_skips_selector() {
        let who = address!("5CFFA347b0aE99cc01E5c01714cA5658e54a23D1");
        let log = rpc_log(vec![who.into_word(), keccak256("tag")], Bytes::new());

        let decoded = decode_log::<Tagged>(&log).unwrap();
        assert_eq!(decoded.who, who);
        assert_eq!(decoded.tag, keccak256("tag"));
    }
}
