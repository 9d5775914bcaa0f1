//! Subcommands and the helpers they share.

pub mod config;
pub mod handwritten;
pub mod id;
pub mod validate;

use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use ropsdoc_core::RopsConfig;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ropsdoc")
        .join("config.json")
}

/// Resolve the config file the commands operate on.
pub fn config_file(config_path: Option<&str>) -> PathBuf {
    config_path.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load the file configuration (explicit path, then the default location,
/// then built-in defaults) and overlay the environment.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<RopsConfig> {
    let mut config = match config_path {
        Some(path) => RopsConfig::from_file(Path::new(path))?,
        None => {
            let path = default_config_path();
            if path.exists() {
                RopsConfig::from_file(&path)?
            } else {
                debug!("No config file at {}, using defaults", path.display());
                RopsConfig::default()
            }
        }
    };

    config.apply_env();
    Ok(config)
}

pub fn spinner(message: &'static str) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

pub fn ensure_input(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }
    Ok(())
}
