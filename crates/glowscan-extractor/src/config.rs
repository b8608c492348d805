//! Configuration for the Extractor

use crate::error::ExtractorError;
use crate::markers::{normalize_key, DEFAULT_SCRIPT_IDS};
use crate::types::METADATA_KEY;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Marker identifiers to scan for, in output order
    pub script_ids: Vec<String>,

    /// Suffix stripped from an identifier before it becomes an output key
    pub json_suffix: String,

    /// Suffix appended to the key of a region that failed to decode
    pub raw_suffix: String,

    /// Number of characters of undecodable content shown in the warning
    pub preview_chars: usize,
}

impl ExtractorConfig {
    /// Output key for a marker identifier under this configuration
    pub fn output_key(&self, script_id: &str) -> String {
        normalize_key(script_id, &self.json_suffix)
    }

    /// Output key used when the region for `script_id` holds undecodable text
    pub fn raw_key(&self, script_id: &str) -> String {
        format!("{}{}", self.output_key(script_id), self.raw_suffix)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.script_ids.is_empty() {
            return Err("script_ids must name at least one marker".to_string());
        }
        if self.preview_chars == 0 {
            return Err("preview_chars must be greater than 0".to_string());
        }
        if self.raw_suffix.is_empty() {
            return Err("raw_suffix cannot be empty".to_string());
        }

        let mut ids = HashSet::new();
        let mut keys = HashSet::new();
        for id in &self.script_ids {
            if id.trim().is_empty() {
                return Err("script_ids cannot contain an empty identifier".to_string());
            }
            if !ids.insert(id.as_str()) {
                return Err(format!("duplicate script id '{}'", id));
            }
            let key = self.output_key(id);
            if key.is_empty() {
                return Err(format!("script id '{}' normalizes to an empty key", id));
            }
            for candidate in [key, self.raw_key(id)] {
                if candidate == METADATA_KEY {
                    return Err(format!(
                        "script id '{}' maps to reserved key '{}'",
                        id, METADATA_KEY
                    ));
                }
                if !keys.insert(candidate.clone()) {
                    return Err(format!(
                        "script id '{}' maps to key '{}' which is already taken",
                        id, candidate
                    ));
                }
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExtractorError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ExtractorError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ExtractorConfig {
    /// The six Glowroot trace regions, 100-character previews
    fn default() -> Self {
        Self {
            script_ids: DEFAULT_SCRIPT_IDS.iter().map(|s| s.to_string()).collect(),
            json_suffix: "Json".to_string(),
            raw_suffix: "_raw".to_string(),
            preview_chars: 100,
        }
    }
}
