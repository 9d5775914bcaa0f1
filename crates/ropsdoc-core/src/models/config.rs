//! Configuration structures for the intake pipeline.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use ropsdoc_backend::{DocumentIntelligenceConfig, OpenAiConfig};

/// Main configuration for ropsdoc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RopsConfig {
    /// OCR backend connection.
    pub document_intelligence: DocumentIntelligenceConfig,

    /// Completion backend connection.
    pub openai: OpenAiConfig,

    /// Extraction behavior.
    pub extraction: ExtractionConfig,

    /// Uploaded file handling.
    pub input: InputConfig,

    /// Persistence.
    pub store: StoreConfig,
}

/// Extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Language the handwritten summary is written in, whatever the
    /// document language.
    pub summary_language: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            summary_language: "Romanian".to_string(),
        }
    }
}

/// Uploaded file preparation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Images are downscaled to fit in a square of this side.
    pub max_resolution: u32,

    /// Accepted raster formats (lowercase extensions, e.g. `jpeg`, `png`).
    pub allowed_formats: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_resolution: 2000,
            allowed_formats: vec!["jpeg".to_string(), "png".to_string()],
        }
    }
}

/// Persistence configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// SQLite database file.
    pub database_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("ropsdoc.db"),
        }
    }
}

/// Environment variables that override file settings.
const ENV_OVERRIDES: [&str; 6] = [
    "AZURE_FORM_RECOGNIZER_ENDPOINT",
    "AZURE_FORM_RECOGNIZER_KEY",
    "AZURE_OPENAI_ENDPOINT",
    "AZURE_OPENAI_KEY",
    "AZURE_OPENAI_DEPLOYMENT",
    "ROPSDOC_DATABASE",
];

impl RopsConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }

    /// Overlay values from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Overlay values from `lookup`; empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for key in ENV_OVERRIDES {
            let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) else {
                continue;
            };
            debug!("Configuration override from {}", key);

            match key {
                "AZURE_FORM_RECOGNIZER_ENDPOINT" => self.document_intelligence.endpoint = value,
                "AZURE_FORM_RECOGNIZER_KEY" => self.document_intelligence.api_key = value,
                "AZURE_OPENAI_ENDPOINT" => self.openai.endpoint = value,
                "AZURE_OPENAI_KEY" => self.openai.api_key = value,
                "AZURE_OPENAI_DEPLOYMENT" => self.openai.deployment = value,
                "ROPSDOC_DATABASE" => self.store.database_path = PathBuf::from(value),
                _ => {}
            }
        }
    }
}
