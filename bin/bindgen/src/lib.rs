//! Contract binding generator.
//!
//! Reads a TOML manifest of compiled contract artifacts and renders one Rust
//! module per contract on top of the `bind` runtime, plus a `mod.rs` index.

pub mod abi;
pub mod config;
pub mod naming;
pub mod render;
pub mod types;

use config::Config;
use eyre::{Result, WrapErr};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// A rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Render every contract listed in `config`.
pub fn generate(config: &Config) -> Result<Vec<GeneratedFile>> {
    let mut files = Vec::with_capacity(config.contracts.len() + 1);
    let mut modules = Vec::with_capacity(config.contracts.len());

    for entry in &config.contracts {
        let contract = abi::Contract::load(entry, &config.artifacts_dir)?;
        let module = naming::snake_case(&contract.name);

        debug!(
            contract = %contract.name,
            functions = contract.functions.len(),
            events = contract.events.len(),
            "Rendering contract"
        );

        let contents = render::contract(&contract, &config.include_dir)
            .wrap_err_with(|| format!("failed to render {}", contract.name))?;
        files.push(GeneratedFile {
            path: config.out_dir.join(format!("{module}.rs")),
            contents,
        });
        modules.push((module, contract.name));
    }

    files.push(GeneratedFile {
        path: config.out_dir.join("mod.rs"),
        contents: render::index(&modules)?,
    });

    Ok(files)
}

/// Write rendered files, creating their directories as needed.
pub fn write(files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        if let Some(dir) = file.path.parent() {
            fs::create_dir_all(dir)
                .wrap_err_with(|| format!("failed to create {}", dir.display()))?;
        }
        fs::write(&file.path, &file.contents)
            .wrap_err_with(|| format!("failed to write {}", file.path.display()))?;
        info!(path = %file.path.display(), "Wrote binding");
    }
    Ok(())
}

/// Paths of rendered files whose on-disk contents differ or are missing.
pub fn check(files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
    let mut stale = Vec::new();
    for file in files {
        if !is_current(&file.path, &file.contents)? {
            stale.push(file.path.clone());
        }
    }
    Ok(stale)
}

fn is_current(path: &Path, contents: &str) -> Result<bool> {
    match fs::read_to_string(path) {
        Ok(existing) => Ok(existing == contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).wrap_err_with(|| format!("failed to read {}", path.display())),
    }
}
