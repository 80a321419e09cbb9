use eyre::{bail, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

/// Generator manifest.
///
/// Relative paths are resolved against the directory holding the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory the generated modules are written to
    pub out_dir: PathBuf,

    /// Directory holding the ABI and bytecode artifacts
    pub artifacts_dir: PathBuf,

    /// `artifacts_dir` as seen from `out_dir`, used in `include_str!` paths
    pub include_dir: String,

    /// Contracts to generate bindings for
    #[serde(default)]
    pub contracts: Vec<ContractEntry>,
}

/// One contract to bind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractEntry {
    /// Contract name, used for the wrapper type
    pub name: String,

    /// ABI file, relative to `artifacts_dir`
    pub abi: String,

    /// Hex deploy bytecode file, relative to `artifacts_dir`
    #[serde(default)]
    pub bin: Option<String>,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read manifest {}", path.display()))?;
        let mut config: Self = toml::from_str(&contents)
            .wrap_err_with(|| format!("failed to parse manifest {}", path.display()))?;

        if let Some(root) = path.parent() {
            config.out_dir = root.join(&config.out_dir);
            config.artifacts_dir = root.join(&config.artifacts_dir);
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject manifests that would render invalid or clashing modules.
    pub fn validate(&self) -> Result<()> {
        if self.contracts.is_empty() {
            bail!("manifest lists no contracts");
        }

        let mut seen = HashSet::new();
        for entry in &self.contracts {
            let valid = entry.name.starts_with(|c: char| c.is_ascii_uppercase())
                && entry.name.chars().all(|c| c.is_ascii_alphanumeric());
            if !valid {
                bail!("contract name `{}` is not a valid type name", entry.name);
            }
            if !seen.insert(entry.name.as_str()) {
                bail!("contract `{}` is listed twice", entry.name);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
        out_dir = "src/contracts"
        artifacts_dir = "artifacts"
        include_dir = "../../artifacts"

        [[contracts]]
        name = "Multicall3"
        abi = "Multicall3.abi.json"
        bin = "Multicall3.bin"

        [[contracts]]
        name = "StorageSetter"
        abi = "StorageSetter.abi.json"
    "#;

    #[test]
    fn test_paths_resolve_against_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bindgen.toml");
        std::fs::write(&path, MANIFEST).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.out_dir, dir.path().join("src/contracts"));
        assert_eq!(config.artifacts_dir, dir.path().join("artifacts"));
        assert_eq!(config.include_dir, "../../artifacts");
        assert_eq!(config.contracts.len(), 2);
        assert!(config.contracts[1].bin.is_none());
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut config: Config = toml::from_str(MANIFEST).unwrap();
        config.contracts[1].name = "Multicall3".to_string();
        assert!(config.validate().is_err());

        config.contracts[1].name = "storage_setter".to_string();
        assert!(config.validate().is_err());
    }
}
