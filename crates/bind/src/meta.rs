use crate::error::{Error, Result};
use alloy_json_abi::JsonAbi;
use alloy_primitives::{hex, Bytes};
use std::sync::{Arc, OnceLock};

/// ABI and deploy bytecode of a compiled contract.
///
/// Generated bindings declare one `static` per contract. The ABI text is
/// parsed on first use and the result (or the parse failure) is cached for
/// the lifetime of the process.
#[derive(Debug)]
pub struct ContractMetaData {
    /// JSON ABI as emitted by the compiler
    pub abi: &'static str,
    /// Hex-encoded deploy bytecode, empty for interfaces
    pub bin: &'static str,
    parsed: OnceLock<std::result::Result<Arc<JsonAbi>, String>>,
}

impl ContractMetaData {
    pub const fn new(abi: &'static str, bin: &'static str) -> Self {
        Self {
            abi,
            bin,
            parsed: OnceLock::new(),
        }
    }

    /// Return the parsed ABI, parsing it on first access.
    pub fn get_abi(&self) -> Result<Arc<JsonAbi>> {
        self.parsed
            .get_or_init(|| {
                serde_json::from_str::<JsonAbi>(self.abi)
                    .map(Arc::new)
                    .map_err(|e| e.to_string())
            })
            .clone()
            .map_err(Error::AbiParse)
    }

    /// Decode the deploy bytecode.
    pub fn bytecode(&self) -> Result<Bytes> {
        hex::decode(self.bin.trim())
            .map(Bytes::from)
            .map_err(|e| Error::InvalidBytecode(e.to_string()))
    }

    /// Returns true if the contract carries deploy bytecode.
    pub fn is_deployable(&self) -> bool {
        !self.bin.trim().trim_start_matches("0x").is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static VERSIONED: ContractMetaData = ContractMetaData::new(
        r#"[{"type":"function","name":"version","inputs":[],"outputs":[{"name":"","type":"string","internalType":"string"}],"stateMutability":"view"}]"#,
        "0x6080",
    );

    static BROKEN: ContractMetaData = ContractMetaData::new("[{\"type\":", "0xzz");

    #[test]
    fn test_abi_is_parsed_once() {
        let first = VERSIONED.get_abi().unwrap();
        let second = VERSIONED.get_abi().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(first.function("version").is_some());
    }

    #[test]
    fn test_bytecode_decodes_with_prefix() {
        assert_eq!(VERSIONED.bytecode().unwrap(), Bytes::from(vec![0x60, 0x80]));
        assert!(VERSIONED.is_deployable());
    }

    #[test]
    fn test_malformed_artifacts_fail() {
        assert!(matches!(BROKEN.get_abi(), Err(Error::AbiParse(_))));
        // The failure is cached, not retried.
        assert!(matches!(BROKEN.get_abi(), Err(Error::AbiParse(_))));
        assert!(matches!(BROKEN.bytecode(), Err(Error::InvalidBytecode(_))));
    }
}
