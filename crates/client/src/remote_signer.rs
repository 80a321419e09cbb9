//! Remote transaction signer that delegates signing to a signer-proxy service.
//!
//! The remote signer sends `eth_signTransaction` JSON-RPC requests to a proxy service,
//! which handles the actual signing (typically via an HSM or secure enclave).

use alloy_primitives::{Address, Bytes};
use alloy_rpc_types::eth::TransactionRequest;
use bind::TransactOpts;
use eyre::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A remote signer that delegates transaction signing to a signer-proxy service.
///
/// # Example
///
/// ```ignore
/// let signer = RemoteSigner::new("http://localhost:9060", address, 1);
/// let opts = signer.transact_opts();
/// let tx = vetoable.initiator().send(&opts).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RemoteSigner {
    client: reqwest::Client,
    proxy_url: String,
    address: Address,
    chain_id: u64,
}

impl RemoteSigner {
    /// Creates a new remote signer.
    ///
    /// # Arguments
    /// * `proxy_url` - The URL of the signer-proxy service (e.g., "http://localhost:9060")
    /// * `address` - The Ethereum address of the signer
    /// * `chain_id` - The chain ID for EIP-155 replay protection
    pub fn new(proxy_url: impl Into<String>, address: Address, chain_id: u64) -> Self {
        Self::with_client(reqwest::Client::new(), proxy_url, address, chain_id)
    }

    /// Creates a new remote signer with a custom HTTP client.
    pub fn with_client(
        client: reqwest::Client,
        proxy_url: impl Into<String>,
        address: Address,
        chain_id: u64,
    ) -> Self {
        Self {
            client,
            proxy_url: proxy_url.into(),
            address,
            chain_id,
        }
    }

    pub const fn address(&self) -> Address {
        self.address
    }

    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Transaction options signing through this proxy.
    pub fn transact_opts(&self) -> TransactOpts {
        TransactOpts {
            chain_id: Some(self.chain_id),
            ..TransactOpts::new(self.address, crate::remote_signer_fn(self.clone()))
        }
    }

    /// Signs a fully populated transaction via the remote signer-proxy.
    ///
    /// Returns the EIP-2718 encoded signed transaction.
    pub async fn sign_transaction(&self, tx: TransactionRequest) -> Result<Bytes> {
        debug!(
            proxy = %self.proxy_url,
            from = %self.address,
            nonce = ?tx.nonce,
            "Requesting remote signature"
        );

        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            method: "eth_signTransaction",
            params: [tx],
            id: 1,
        };

        let response = self
            .client
            .post(&self.proxy_url)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            bail!("signer-proxy returned {status}: {body}");
        }

        let rpc_response: JsonRpcResponse<SignedTransactionResponse> = response.json().await?;
        rpc_response.into_raw()
    }
}

#[derive(Debug, Serialize)]
struct JsonRpcRequest<T> {
    jsonrpc: &'static str,
    method: &'static str,
    params: T,
    id: u32,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse<T> {
    result: Option<T>,
    error: Option<JsonRpcError>,
}

impl JsonRpcResponse<SignedTransactionResponse> {
    fn into_raw(self) -> Result<Bytes> {
        match (self.result, self.error) {
            (Some(result), _) => Ok(result.raw.parse()?),
            (None, Some(error)) => bail!("JSON-RPC error {}: {}", error.code, error.message),
            (None, None) => bail!("JSON-RPC response carries neither result nor error"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

/// Response from eth_signTransaction containing the signed transaction.
#[derive(Debug, Deserialize)]
struct SignedTransactionResponse {
    /// The signed transaction as hex-encoded EIP-2718 bytes.
    raw: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, bytes};

    #[test]
    fn test_transact_opts() {
        let signer = RemoteSigner::new(
            "http://localhost:9060",
            address!("5CFFA347b0aE99cc01E5c01714cA5658e54a23D1"),
            1,
        );

        let opts = signer.transact_opts();
        assert_eq!(opts.from, signer.address());
        assert_eq!(opts.chain_id, Some(1));
        assert!(opts.nonce.is_none());
    }

    #[test]
    fn test_response_decoding() {
        let ok: JsonRpcResponse<SignedTransactionResponse> =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"result":{"raw":"0x02f8"}}"#).unwrap();
        assert_eq!(ok.into_raw().unwrap(), bytes!("02f8"));

        let err: JsonRpcResponse<SignedTransactionResponse> = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"locked"}}"#,
        )
        .unwrap();
        assert!(err.into_raw().unwrap_err().to_string().contains("locked"));
    }
}
