//! Configuration structures for the scanning pipeline and its front ends.

use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::error::Result;

/// Main configuration for textscan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Which categories to analyze.
    pub scan: ScanSettings,

    /// Validity markers appended to annotated matches.
    pub markers: Markers,

    /// Result rendering options.
    pub output: OutputConfig,
}

/// Analysis settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Categories to analyze. Empty means every registered category.
    pub categories: Vec<Category>,
}

impl ScanSettings {
    /// Settings restricted to the given categories.
    pub fn only(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: categories.into_iter().collect(),
        }
    }

    /// The effective category selection.
    pub fn categories(&self) -> &[Category] {
        Category::resolve(&self.categories)
    }
}

/// Human-readable validity tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Tag for matches that pass their category's validator.
    pub valid: String,

    /// Tag for matches that fail it.
    pub invalid: String,
}

impl Markers {
    /// Marker for the given validity.
    pub fn for_validity(&self, valid: bool) -> &str {
        if valid { &self.valid } else { &self.invalid }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            valid: "valid".to_string(),
            invalid: "invalid".to_string(),
        }
    }
}

/// Result rendering options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// List categories that produced no matches. Off by default, so only
    /// categories with at least one match are listed.
    pub show_empty: bool,

    /// Include byte offsets of each match in text output.
    pub show_positions: bool,
}

impl ScanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
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
