//! CLI subcommands.

pub mod config;
pub mod process;

use std::path::{Path, PathBuf};

use studcard_core::StudcardConfig;

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("studcard")
        .join("config.json")
}

/// Load the configuration from an explicit path, the default location, or
/// fall back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<StudcardConfig> {
    if let Some(path) = config_path {
        return Ok(StudcardConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        Ok(StudcardConfig::from_file(&default_path)?)
    } else {
        Ok(StudcardConfig::default())
    }
}
