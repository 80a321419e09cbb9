use alloy_primitives::{Address, Bytes};
use alloy_sol_types::SolInterface;
use std::fmt;
use thiserror::Error;

/// Convenience alias used throughout the binding runtime.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Which backend capability a bound contract was asked to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Caller,
    Transactor,
    Filterer,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Caller => f.write_str("caller"),
            Self::Transactor => f.write_str("transactor"),
            Self::Filterer => f.write_str("filterer"),
        }
    }
}

/// Failure reported by a backend implementation.
///
/// Backends translate their transport errors into this shape so the runtime
/// can recognise reverts without knowing the transport.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The call reached the contract and reverted with the given payload.
    #[error("execution reverted")]
    Reverted(Bytes),

    /// JSON-RPC or transport failure
    #[error("rpc error: {0}")]
    Rpc(String),

    /// The subscription or channel was closed by the backend.
    #[error("backend closed")]
    Closed,
}

/// Errors surfaced by bound contracts.
#[derive(Error, Debug)]
pub enum Error {
    /// The embedded ABI text is malformed.
    #[error("failed to parse contract ABI: {0}")]
    AbiParse(String),

    /// The embedded deploy bytecode is not valid hex.
    #[error("invalid contract bytecode: {0}")]
    InvalidBytecode(String),

    /// Arguments do not match the method's input types.
    #[error("failed to encode {context}: {reason}")]
    Encode { context: String, reason: String },

    /// Return data or event data does not match the expected shape.
    #[error("failed to decode {context}: {reason}")]
    Decode { context: String, reason: String },

    /// The backend failed the call, transaction, filter or subscription.
    #[error("{context}: {source}")]
    Backend {
        context: String,
        #[source]
        source: BackendError,
    },

    /// The call reached the contract and reverted.
    #[error("{context}: execution reverted")]
    ExecutionReverted { context: String, data: Bytes },

    /// The contract was bound without the capability the operation needs.
    #[error("contract bound without {0} capability")]
    CapabilityAbsent(Capability),

    /// The backend behind a bound contract has been dropped.
    #[error("contract backend has been dropped")]
    BackendDropped,

    /// The caller's cancellation token fired.
    #[error("operation cancelled")]
    Cancelled,

    /// The log subscription terminated with an error.
    #[error("log subscription failed: {0}")]
    Subscription(String),

    /// The call returned no data and there is no code at the address.
    #[error("no contract code at {0}")]
    NoCode(Address),

    /// Deployment would land on an address that already holds code.
    #[error("contract already deployed at {0}")]
    AddressCollision(Address),

    #[error("method `{0}` not found in ABI")]
    UnknownMethod(String),

    #[error("event `{0}` not found in ABI")]
    UnknownEvent(String),

    /// The contract ABI declares no fallback function.
    #[error("contract does not declare a fallback function")]
    NoFallback,

    /// The transaction signer rejected the request.
    #[error("failed to sign transaction for {context}: {reason}")]
    Signer { context: String, reason: String },

    /// The transaction options are contradictory.
    #[error("invalid transaction options: {0}")]
    InvalidOptions(String),
}

impl Error {
    pub(crate) fn encode(context: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::Encode {
            context: context.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn decode(context: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::Decode {
            context: context.into(),
            reason: reason.to_string(),
        }
    }

    /// Wrap a backend failure, promoting reverts to [`Error::ExecutionReverted`].
    pub(crate) fn backend(context: impl Into<String>, source: BackendError) -> Self {
        match source {
            BackendError::Reverted(data) => Self::ExecutionReverted {
                context: context.into(),
                data,
            },
            source => Self::Backend {
                context: context.into(),
                source,
            },
        }
    }

    /// Raw revert payload, if this error is an execution revert.
    pub const fn revert_data(&self) -> Option<&Bytes> {
        match self {
            Self::ExecutionReverted { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Decode the revert payload as one of the contract's custom errors.
    ///
    /// Returns `None` when this is not a revert or the payload does not match
    /// any error declared by `E`.
    pub fn decode_revert<E: SolInterface>(&self) -> Option<E> {
        self.revert_data()
            .and_then(|data| E::abi_decode(data).ok())
    }

    /// Returns true if the error is a cancellation.
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::bytes;

    #[test]
    fn test_revert_is_promoted() {
        let err = Error::backend("version()", BackendError::Reverted(bytes!("deadbeef")));
        assert_eq!(err.revert_data(), Some(&bytes!("deadbeef")));
        assert_eq!(err.to_string(), "version(): execution reverted");
    }

    #[test]
    fn test_rpc_error_keeps_context() {
        let err = Error::backend("delay()", BackendError::Rpc("timeout".to_string()));
        assert!(err.revert_data().is_none());
        assert_eq!(err.to_string(), "delay(): rpc error: timeout");
    }

    #[test]
    fn test_capability_display() {
        let err = Error::CapabilityAbsent(Capability::Transactor);
        assert_eq!(err.to_string(), "contract bound without transactor capability");
    }
}
