//! Init-config command - write a default railscape.toml

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use railscape_core::SceneConfig;
use railscape_core::config::{self, CONFIG_FILE};

/// Arguments for the init-config command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Destination file (defaults to the platform config directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the init-config command
pub fn execute(args: InitArgs) -> Result<()> {
    let path = match args.path {
        Some(path) => path,
        None => config::config_dir()
            .map(|dir| dir.join(CONFIG_FILE))
            .context("Could not determine the config directory; pass --path")?,
    };
    write_default(&path, args.force)?;
    println!("Created {}", path.display());
    Ok(())
}

fn write_default(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists. Use --force to overwrite.", path.display());
    }
    config::save_to(&SceneConfig::default(), path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
