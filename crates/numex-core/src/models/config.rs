//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use super::finding::NumericKind;
use crate::error::{NumexError, Result};

/// Main configuration for numex.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumexConfig {
    /// Extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Kinds to report. Empty means all kinds.
    pub kinds: Vec<NumericKind>,

    /// Recognize spelled-out Portuguese numerals ("vinte e cinco").
    pub word_numerals: bool,

    /// Report byte offsets alongside each finding.
    pub include_spans: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            kinds: Vec::new(),
            word_numerals: true,
            include_spans: false,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl NumexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        if !path.is_file() {
            return Err(NumexError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
