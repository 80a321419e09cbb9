//! Generate Rust contract bindings from ABI and bytecode artifacts.
//!
//! ```bash
//! bindgen --config bindgen.toml
//! bindgen --check
//! ```

use bindgen::config::Config;
use clap::Parser;
use eyre::bail;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "bindgen")]
#[command(about = "Generate contract bindings from ABI and bytecode artifacts")]
struct Cli {
    /// Path to the generator manifest
    #[arg(short, long, default_value = "bindgen.toml")]
    config: PathBuf,

    /// Write bindings here instead of the manifest's out_dir
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Verify the bindings on disk are current instead of writing them
    #[arg(long)]
    check: bool,
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_file(&cli.config)?;
    if let Some(out_dir) = cli.out_dir {
        config.out_dir = out_dir;
    }

    info!(
        manifest = %cli.config.display(),
        contracts = config.contracts.len(),
        out_dir = %config.out_dir.display(),
        "Loaded manifest"
    );

    let files = bindgen::generate(&config)?;

    if cli.check {
        let stale = bindgen::check(&files)?;
        for path in &stale {
            error!(path = %path.display(), "Binding is out of date");
        }
        if !stale.is_empty() {
            bail!("{} bindings are out of date, rerun bindgen", stale.len());
        }
        info!(files = files.len(), "Bindings are up to date");
        return Ok(());
    }

    bindgen::write(&files)?;
    info!(files = files.len(), "Generated bindings");
    Ok(())
}
