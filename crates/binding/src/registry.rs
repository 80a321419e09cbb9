//! Storage layouts and runtime bytecode of contracts that are inspected
//! rather than called.
//!
//! Layouts are solc `storageLayout` output. Each is parsed on first use and
//! cached; a malformed layout only fails lookups for its own contract.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::OnceLock};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("malformed storage layout for {name}: {reason}")]
    Malformed { name: &'static str, reason: String },

    #[error("no storage variable `{0}`")]
    UnknownLabel(String),

    #[error("invalid {field} `{value}` for `{label}`")]
    InvalidNumber {
        label: String,
        field: &'static str,
        value: String,
    },
}

/// One storage variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageLayoutEntry {
    pub ast_id: u64,
    pub contract: String,
    pub label: String,
    /// Byte offset within the slot
    pub offset: u32,
    /// Decimal slot number
    pub slot: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl StorageLayoutEntry {
    pub fn slot(&self) -> Result<U256, LayoutError> {
        U256::from_str_radix(&self.slot, 10).map_err(|_| LayoutError::InvalidNumber {
            label: self.label.clone(),
            field: "slot",
            value: self.slot.clone(),
        })
    }
}

/// Type referenced by a storage entry, keyed by its solc type id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageLayoutType {
    /// `inplace`, `mapping`, `dynamic_array` or `bytes`
    pub encoding: String,
    pub label: String,
    pub number_of_bytes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<StorageLayoutEntry>>,
}

impl StorageLayoutType {
    pub fn size(&self) -> Result<u64, LayoutError> {
        self.number_of_bytes
            .parse()
            .map_err(|_| LayoutError::InvalidNumber {
                label: self.label.clone(),
                field: "numberOfBytes",
                value: self.number_of_bytes.clone(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageLayout {
    pub storage: Vec<StorageLayoutEntry>,
    pub types: BTreeMap<String, StorageLayoutType>,
}

impl StorageLayout {
    /// First variable declared as `label`.
    ///
    /// Upgradeable contracts repeat `__gap`; later declarations are only
    /// reachable through [`Self::storage`].
    pub fn entry(&self, label: &str) -> Option<&StorageLayoutEntry> {
        self.storage.iter().find(|entry| entry.label == label)
    }

    /// Slot and byte offset of `label`.
    pub fn slot_of(&self, label: &str) -> Result<(U256, u32), LayoutError> {
        let entry = self
            .entry(label)
            .ok_or_else(|| LayoutError::UnknownLabel(label.to_string()))?;
        Ok((entry.slot()?, entry.offset))
    }

    pub fn type_of(&self, entry: &StorageLayoutEntry) -> Option<&StorageLayoutType> {
        self.types.get(&entry.ty)
    }
}

struct Artifact {
    name: &'static str,
    layout: &'static str,
    deployed: &'static str,
    parsed: OnceLock<Result<StorageLayout, String>>,
}

macro_rules! artifact {
    ($name:literal) => {
        Artifact {
            name: $name,
            layout: include_str!(concat!("../artifacts/", $name, ".storage-layout.json")),
            deployed: include_str!(concat!("../artifacts/", $name, ".deployed.bin")),
            parsed: OnceLock::new(),
        }
    };
}

static ARTIFACTS: [Artifact; 4] = [
    artifact!("L1CrossDomainMessenger"),
    artifact!("L2StandardBridge"),
    artifact!("MIPS"),
    artifact!("SystemConfig"),
];

fn find(name: &str) -> Option<&'static Artifact> {
    ARTIFACTS.iter().find(|artifact| artifact.name == name)
}

/// Names of the contracts with a registered layout and runtime bytecode.
pub fn names() -> impl Iterator<Item = &'static str> {
    ARTIFACTS.iter().map(|artifact| artifact.name)
}

/// Storage layout of `name`, or `None` when the contract is not registered.
pub fn storage_layout(name: &str) -> Result<Option<&'static StorageLayout>, LayoutError> {
    let Some(artifact) = find(name) else {
        return Ok(None);
    };

    let parsed = artifact
        .parsed
        .get_or_init(|| serde_json::from_str(artifact.layout).map_err(|e| e.to_string()));

    match parsed {
        Ok(layout) => Ok(Some(layout)),
        Err(reason) => Err(LayoutError::Malformed {
            name: artifact.name,
            reason: reason.clone(),
        }),
    }
}

/// Hex runtime bytecode of `name`.
pub fn deployed_bytecode(name: &str) -> Option<&'static str> {
    find(name).map(|artifact| artifact.deployed.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_layout_parses() {
        for name in names() {
            let layout = storage_layout(name).unwrap().unwrap();
            assert!(!layout.storage.is_empty(), "{name}");
            for entry in &layout.storage {
                assert!(layout.type_of(entry).is_some(), "{name}.{}", entry.label);
                entry.slot().unwrap();
            }
        }
    }

    #[test]
    fn test_slot_lookup() {
        let layout = storage_layout("SystemConfig").unwrap().unwrap();

        assert_eq!(layout.slot_of("_owner").unwrap(), (U256::from(51), 0));
        assert_eq!(layout.slot_of("_initializing").unwrap(), (U256::from(0), 1));
        assert_eq!(layout.slot_of("startBlock").unwrap().0, U256::from(106));
        assert_eq!(
            layout.slot_of("missing"),
            Err(LayoutError::UnknownLabel("missing".to_string()))
        );

        let gap = layout.entry("__gap").unwrap();
        assert_eq!(gap.slot, "1");
        assert_eq!(layout.type_of(gap).unwrap().size().unwrap(), 1600);
    }

    #[test]
    fn test_mapping_types() {
        let layout = storage_layout("L2StandardBridge").unwrap().unwrap();
        let deposits = layout.entry("deposits").unwrap();
        let ty = layout.type_of(deposits).unwrap();

        assert_eq!(ty.encoding, "mapping");
        assert_eq!(ty.key.as_deref(), Some("t_address"));
        assert!(ty.value.as_deref().unwrap().starts_with("t_mapping"));
    }

    #[test]
    fn test_unregistered_contract() {
        assert_eq!(storage_layout("Multicall3"), Ok(None));
        assert!(deployed_bytecode("Multicall3").is_none());
    }

    #[test]
    fn test_deployed_bytecode() {
        for name in names() {
            let code = deployed_bytecode(name).unwrap();
            assert!(code.starts_with("0x6080"), "{name}");
            assert!(alloy_primitives::hex::decode(code).is_ok(), "{name}");
        }
    }
}
