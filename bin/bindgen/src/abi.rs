//! The slice of the solc JSON ABI the renderer works from.
//!
//! `alloy-json-abi` validates the artifact; this model keeps the raw
//! `internalType` strings and declaration order, which the renderer needs to
//! name structs and number overloads the way `sol!` does.

use crate::config::ContractEntry;
use alloy_json_abi::JsonAbi;
use alloy_primitives::hex;
use eyre::{bail, Result, WrapErr};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    Pure,
    View,
    #[default]
    NonPayable,
    Payable,
}

impl StateMutability {
    /// Whether the method can be served by a read-only call.
    pub const fn is_view(self) -> bool {
        matches!(self, Self::Pure | Self::View)
    }

    /// Keyword used in Solidity declarations; empty for nonpayable.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Pure => "pure",
            Self::View => "view",
            Self::NonPayable => "",
            Self::Payable => "payable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Param {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub internal_type: Option<String>,
    #[serde(default)]
    pub components: Vec<Param>,
    #[serde(default)]
    pub indexed: bool,
}

impl Param {
    /// Base type and array suffix, e.g. `tuple` and `[][2]` for `tuple[][2]`.
    pub fn split_array(&self) -> (&str, &str) {
        self.ty
            .find('[')
            .map_or((self.ty.as_str(), ""), |at| self.ty.split_at(at))
    }

    pub fn is_tuple(&self) -> bool {
        self.split_array().0 == "tuple"
    }

    /// Name of the struct a tuple parameter was declared with.
    ///
    /// Minified artifacts drop the space after `struct`, so both
    /// `struct Multicall3.Call[]` and `structMulticall3.Call[]` yield `Call`.
    pub fn struct_name(&self) -> Result<&str> {
        let Some(internal) = self
            .internal_type
            .as_deref()
            .and_then(|ty| ty.strip_prefix("struct"))
            .map(str::trim_start)
        else {
            bail!(
                "tuple parameter `{}` has no struct internalType",
                self.name
            );
        };

        let ty = internal.rsplit('.').next().unwrap_or(internal);
        Ok(ty.split('[').next().unwrap_or(ty))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<Param>,
    #[serde(default)]
    pub outputs: Vec<Param>,
    #[serde(default)]
    pub state_mutability: StateMutability,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constructor {
    #[serde(default)]
    pub inputs: Vec<Param>,
    #[serde(default)]
    pub state_mutability: StateMutability,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<Param>,
    #[serde(default)]
    pub anonymous: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Error {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<Param>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Item {
    Function(Function),
    Constructor(Constructor),
    Event(Event),
    Error(Error),
    Fallback {},
    Receive {},
}

/// A contract ready to render.
///
/// Functions, events and errors are sorted by name. Overloads keep their ABI
/// order, which decides their `_0`, `_1` suffixes.
#[derive(Debug, Clone)]
pub struct Contract {
    pub name: String,
    pub abi_file: String,
    pub bin_file: Option<String>,
    pub constructor: Option<Constructor>,
    pub functions: Vec<Function>,
    pub events: Vec<Event>,
    pub errors: Vec<Error>,
    pub has_fallback: bool,
    pub has_receive: bool,
}

impl Contract {
    /// Load and validate the artifacts of `entry`.
    pub fn load(entry: &ContractEntry, artifacts_dir: &Path) -> Result<Self> {
        let abi_path = artifacts_dir.join(&entry.abi);
        let text = std::fs::read_to_string(&abi_path)
            .wrap_err_with(|| format!("failed to read {}", abi_path.display()))?;
        let mut contract = Self::from_abi(&entry.name, &entry.abi, &text)
            .wrap_err_with(|| format!("invalid ABI {}", abi_path.display()))?;

        if let Some(bin) = &entry.bin {
            let bin_path = artifacts_dir.join(bin);
            let code = std::fs::read_to_string(&bin_path)
                .wrap_err_with(|| format!("failed to read {}", bin_path.display()))?;
            hex::decode(code.trim())
                .wrap_err_with(|| format!("invalid bytecode {}", bin_path.display()))?;
            contract.bin_file = Some(bin.clone());
        }

        Ok(contract)
    }

    /// Parse an ABI document.
    pub fn from_abi(name: &str, abi_file: &str, text: &str) -> Result<Self> {
        serde_json::from_str::<JsonAbi>(text)?;
        let items: Vec<Item> = serde_json::from_str(text)?;

        let mut contract = Self {
            name: name.to_string(),
            abi_file: abi_file.to_string(),
            bin_file: None,
            constructor: None,
            functions: Vec::new(),
            events: Vec::new(),
            errors: Vec::new(),
            has_fallback: false,
            has_receive: false,
        };

        for item in items {
            match item {
                Item::Function(function) => contract.functions.push(function),
                Item::Constructor(constructor) => contract.constructor = Some(constructor),
                Item::Event(event) => contract.events.push(event),
                Item::Error(error) => contract.errors.push(error),
                Item::Fallback {} => contract.has_fallback = true,
                Item::Receive {} => contract.has_receive = true,
            }
        }

        // Stable sorts keep overloads in declaration order.
        contract.functions.sort_by(|a, b| a.name.cmp(&b.name));
        contract.events.sort_by(|a, b| a.name.cmp(&b.name));
        contract.errors.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(contract)
    }

    /// Name of the `sol!` interface module.
    pub fn interface(&self) -> String {
        format!("I{}", self.name)
    }
}

/// Identifiers `sol!` gives to a list of possibly overloaded items.
///
/// Unique names are kept; each overload gets its index within the overload
/// set as a suffix.
pub fn overload_names<'a>(names: impl Iterator<Item = &'a str> + Clone) -> Vec<String> {
    let mut seen = std::collections::HashMap::<&str, usize>::new();
    names
        .clone()
        .map(|name| {
            let total = names.clone().filter(|n| *n == name).count();
            if total == 1 {
                return name.to_string();
            }
            let index = seen.entry(name).or_default();
            let ident = format!("{name}_{index}");
            *index += 1;
            ident
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABI: &str = r#"[
        {"type":"constructor","inputs":[{"name":"_owner","type":"address","internalType":"address"}],"stateMutability":"nonpayable"},
        {"type":"function","name":"setBytes32","inputs":[{"name":"slots","type":"tuple[]","internalType":"struct StorageSetter.Slot[]","components":[{"name":"key","type":"bytes32","internalType":"bytes32"},{"name":"value","type":"bytes32","internalType":"bytes32"}]}],"outputs":[],"stateMutability":"nonpayable"},
        {"type":"function","name":"getUint","inputs":[{"name":"_slot","type":"bytes32","internalType":"bytes32"}],"outputs":[{"name":"value_","type":"uint256","internalType":"uint256"}],"stateMutability":"view"},
        {"type":"function","name":"setBytes32","inputs":[{"name":"_slot","type":"bytes32","internalType":"bytes32"},{"name":"_value","type":"bytes32","internalType":"bytes32"}],"outputs":[],"stateMutability":"nonpayable"},
        {"type":"event","name":"Withdrawal","inputs":[{"name":"value","type":"uint256","indexed":false,"internalType":"uint256"}],"anonymous":false},
        {"type":"fallback","stateMutability":"payable"}
    ]"#;

    #[test]
    fn test_parse_sorts_and_keeps_overload_order() {
        let contract = Contract::from_abi("StorageSetter", "StorageSetter.abi.json", ABI).unwrap();

        let names: Vec<_> = contract.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["getUint", "setBytes32", "setBytes32"]);
        assert_eq!(contract.functions[1].inputs[0].name, "slots");
        assert!(contract.functions[0].state_mutability.is_view());
        assert!(contract.constructor.is_some());
        assert!(contract.has_fallback);
        assert!(!contract.has_receive);
        assert_eq!(contract.interface(), "IStorageSetter");
    }

    #[test]
    fn test_struct_name() {
        let contract = Contract::from_abi("StorageSetter", "StorageSetter.abi.json", ABI).unwrap();
        let slots = &contract.functions[1].inputs[0];

        assert!(slots.is_tuple());
        assert_eq!(slots.split_array(), ("tuple", "[]"));
        assert_eq!(slots.struct_name().unwrap(), "Slot");

        let minified = Param {
            internal_type: Some("structMulticall3.Call[]".to_string()),
            ..slots.clone()
        };
        assert_eq!(minified.struct_name().unwrap(), "Call");
        assert!(contract.functions[0].inputs[0].struct_name().is_err());
    }

    #[test]
    fn test_overload_names() {
        let names = ["getUint", "setBytes32", "setBytes32", "setUint"];
        assert_eq!(
            overload_names(names.iter().copied()),
            ["getUint", "setBytes32_0", "setBytes32_1", "setUint"]
        );
    }

    #[test]
    fn test_rejects_malformed_abi() {
        assert!(Contract::from_abi("Broken", "Broken.abi.json", "[{\"type\":\"function\"}]").is_err());
        assert!(Contract::from_abi("Broken", "Broken.abi.json", "{}").is_err());
    }
}
