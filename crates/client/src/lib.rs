//! Concrete backends and signers for contract bindings.
//!
//! - [`ProviderBackend`] serves every binding capability over JSON-RPC
//! - [`local_signer_fn`] signs with a private key held in memory
//! - [`remote_signer_fn`] delegates signing to a signer-proxy service

mod backend;
mod remote_signer;

pub use backend::{ProviderBackend, LOG_CHUNK_SIZE};
pub use remote_signer::RemoteSigner;

use alloy_consensus::TxEnvelope;
use alloy_network::{eip2718::Encodable2718, EthereumWallet, TransactionBuilder};
use alloy_primitives::{Address, Bytes};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_types::TransactionRequest;
use alloy_signer_local::PrivateKeySigner;
use bind::{SignerFn, TransactOpts};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Error parsing or validating URLs
    #[error("Invalid RPC URL: {0}")]
    InvalidUrl(String),

    /// Error with private key
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),
}

/// Convenience function to create an ethereum rpc provider from url.
pub fn create_provider(rpc_url: &str) -> Result<impl Provider + Clone, ClientError> {
    let url = rpc_url
        .parse()
        .map_err(|e| ClientError::InvalidUrl(format!("{}", e)))?;
    let provider = ProviderBuilder::new().connect_http(url);

    Ok(provider)
}

/// Create a contract backend talking to `rpc_url`.
pub fn create_backend(rpc_url: &str) -> Result<ProviderBackend<impl Provider + Clone>, ClientError> {
    Ok(ProviderBackend::new(create_provider(rpc_url)?))
}

/// Create a SignerFn from a local private key.
///
/// The bound contract fills nonce, fees and gas before signing; only the
/// sender and `chain_id` are defaulted here. Returns the signer's address
/// alongside the function.
pub fn local_signer_fn(
    private_key: &str,
    chain_id: u64,
) -> Result<(Address, SignerFn), ClientError> {
    let signer: PrivateKeySigner = private_key
        .parse()
        .map_err(|e| ClientError::InvalidPrivateKey(format!("{}", e)))?;
    let from_address = signer.address();
    let wallet = EthereumWallet::from(signer);

    let signer_fn: SignerFn = Arc::new(move |tx: TransactionRequest| {
        let wallet = wallet.clone();
        Box::pin(async move {
            let tx = with_identity(tx, from_address, chain_id);
            debug!(from = %from_address, nonce = ?tx.nonce, "Signing transaction locally");

            // Build and sign the typed transaction
            let tx_envelope: TxEnvelope = tx
                .build(&wallet)
                .await
                .map_err(|e| eyre::eyre!("{}", e))?;

            // Encode to EIP-2718 bytes
            let mut encoded = Vec::new();
            tx_envelope.encode_2718(&mut encoded);
            Ok(Bytes::from(encoded))
        })
    });

    Ok((from_address, signer_fn))
}

/// Create a SignerFn from a RemoteSigner.
pub fn remote_signer_fn(remote: RemoteSigner) -> SignerFn {
    let from_address = remote.address();
    let chain_id = remote.chain_id();

    Arc::new(move |tx| {
        let remote = remote.clone();
        Box::pin(async move {
            let tx = with_identity(tx, from_address, chain_id);
            remote.sign_transaction(tx).await
        })
    })
}

/// Transaction options signing with a local private key.
pub fn local_transact_opts(private_key: &str, chain_id: u64) -> Result<TransactOpts, ClientError> {
    let (from, signer) = local_signer_fn(private_key, chain_id)?;
    Ok(TransactOpts {
        chain_id: Some(chain_id),
        ..TransactOpts::new(from, signer)
    })
}

/// Default the sender and chain id the signer is bound to.
fn with_identity(mut tx: TransactionRequest, from: Address, chain_id: u64) -> TransactionRequest {
    if tx.from.is_none() {
        tx.from = Some(from);
    }

    if tx.chain_id.is_none() {
        tx.chain_id = Some(chain_id);
    }

    tx
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_consensus::Transaction;
    use alloy_network::eip2718::Decodable2718;
    use alloy_primitives::{address, TxKind, U256};

    // Well-known development key (anvil account 0).
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_invalid_url() {
        let result = create_provider("not a url");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_private_key() {
        assert!(matches!(
            local_signer_fn("0x1234", 1),
            Err(ClientError::InvalidPrivateKey(_))
        ));
    }

    #[tokio::test]
    async fn test_local_signer_signs_filled_request() {
        let (from, signer) = local_signer_fn(DEV_KEY, 10).unwrap();
        assert_eq!(from, address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));

        let tx = TransactionRequest {
            to: Some(TxKind::Call(address!("4200000000000000000000000000000000000016"))),
            nonce: Some(3),
            gas: Some(21_000),
            max_fee_per_gas: Some(2_000_000_000),
            max_priority_fee_per_gas: Some(1_000_000_000),
            value: Some(U256::from(1)),
            ..Default::default()
        };

        let raw = signer(tx).await.unwrap();
        let envelope = TxEnvelope::decode_2718(&mut raw.as_ref()).unwrap();
        assert_eq!(envelope.nonce(), 3);
        assert_eq!(envelope.chain_id(), Some(10));
    }

    #[test]
    fn test_with_identity_keeps_explicit_fields() {
        let sender = address!("5CFFA347b0aE99cc01E5c01714cA5658e54a23D1");
        let tx = TransactionRequest {
            chain_id: Some(5),
            ..Default::default()
        };

        let tx = with_identity(tx, sender, 1);
        assert_eq!(tx.from, Some(sender));
        assert_eq!(tx.chain_id, Some(5));
    }
}
