//! Railscape CLI - headless driver for the scene composer
//!
//! # Commands
//!
//! - `railscape frame` - Compose one frame and print a summary or JSON dump
//! - `railscape run` - Drive a sequence of frames through a recording renderer
//! - `railscape shader` - Print the GLSL source of a shader variant
//! - `railscape init-config` - Write a default `railscape.toml`
//!
//! # Usage
//!
//! ```bash
//! # Mesh counts for the frame at t = 12s
//! railscape frame --time 12
//!
//! # Full instruction dump with a different landscape
//! railscape --seed 7 frame --json > frame.json
//!
//! # Ten seconds at 60 fps riding in the cab
//! railscape run --frames 600 --anchor engine-interior
//! ```

mod frame;
mod init;
mod run;
mod shader;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use railscape_core::SceneConfig;
use railscape_core::config;

/// Railscape CLI - headless driver for the scene composer
#[derive(Parser)]
#[command(name = "railscape")]
#[command(about = "Headless driver for the Railscape scene composer")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Scene config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the placement seed
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

impl GlobalArgs {
    /// Resolve the scene configuration for this invocation
    pub fn scene_config(&self) -> Result<SceneConfig> {
        let mut scene = match &self.config {
            Some(path) => config::load_from(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => config::load(),
        };
        if let Some(seed) = self.seed {
            scene.placement.seed = seed;
        }
        Ok(scene)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compose one frame and print a summary or JSON dump
    Frame(frame::FrameArgs),

    /// Drive a sequence of frames through a recording renderer
    Run(run::RunArgs),

    /// Print the GLSL source of a shader variant
    Shader(shader::ShaderArgs),

    /// Write a default railscape.toml
    InitConfig(init::InitArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Frame(args) => frame::execute(&cli.global, args),
        Commands::Run(args) => run::execute(&cli.global, args),
        Commands::Shader(args) => shader::execute(args),
        Commands::InitConfig(args) => init::execute(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frame_with_globals() {
        let cli = Cli::try_parse_from([
            "railscape", "frame", "--time", "12.5", "--seed", "7", "--json",
        ])
        .unwrap();
        assert_eq!(cli.global.seed, Some(7));
        match cli.command {
            Commands::Frame(args) => {
                assert_eq!(args.time, 12.5);
                assert!(args.json);
            }
            _ => panic!("expected frame command"),
        }
    }

    #[test]
    fn test_parse_run_with_anchor() {
        let cli = Cli::try_parse_from([
            "railscape", "run", "--frames", "10", "--anchor", "cinematic",
        ])
        .unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.frames, 10);
                assert_eq!(args.anchor, Some(railscape_core::CameraAnchor::Cinematic));
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_rejects_unknown_anchor() {
        assert!(Cli::try_parse_from(["railscape", "run", "--anchor", "roof"]).is_err());
    }

    #[test]
    fn test_seed_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("railscape.toml");
        std::fs::write(&path, "[placement]\nseed = 5\n").unwrap();

        let global = GlobalArgs {
            config: Some(path.clone()),
            seed: None,
        };
        assert_eq!(global.scene_config().unwrap().placement.seed, 5);

        let global = GlobalArgs {
            config: Some(path),
            seed: Some(9),
        };
        assert_eq!(global.scene_config().unwrap().placement.seed, 9);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let global = GlobalArgs {
            config: Some(PathBuf::from("/nonexistent/railscape.toml")),
            seed: None,
        };
        assert!(global.scene_config().is_err());
    }
}
