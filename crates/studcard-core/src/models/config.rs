//! Configuration structures for the card pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::card::CardLayout;
use crate::error::{CardError, Result};

/// Main configuration for studcard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StudcardConfig {
    /// Card document processed when no input is given on the command line.
    pub document_path: Option<PathBuf>,

    /// Line layout of the card's text layer.
    pub layout: CardLayout,

    /// Report configuration.
    pub report: ReportConfig,
}

/// Inspection report configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Write the report file next to the source document.
    pub enabled: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl StudcardConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| CardError::Config(format!("{}: {}", path.display(), e)))?;
        config.layout.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
