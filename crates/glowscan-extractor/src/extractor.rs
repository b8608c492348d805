//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::decode::decode_region;
use crate::error::ExtractorError;
use crate::span::{ScriptLocator, ScriptSpan};
use crate::types::{CombinedOutput, ExtractionMetadata, ExtractionResult};
use chrono::Local;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Version recorded in every metadata record
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pulls the JSON regions out of Glowroot trace HTML.
///
/// Holds only configuration and compiled patterns; every run builds and
/// returns its own result.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractorConfig,
    locators: Vec<ScriptLocator>,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        let locators = config
            .script_ids
            .iter()
            .map(|id| ScriptLocator::new(id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { config, locators })
    }

    /// Configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Number of markers scanned per document
    pub fn marker_count(&self) -> usize {
        self.locators.len()
    }

    /// Extract every configured region from a trace file.
    ///
    /// Fails only when the file is missing or unreadable. Missing, empty and
    /// undecodable regions are logged and skipped or kept raw.
    pub fn extract_from_file(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<CombinedOutput, ExtractorError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ExtractorError::NotFound(path.to_path_buf()));
        }

        let html = read_document(path)?;
        debug!("Read {} chars from {}", html.len(), path.display());

        let result = self.extract_from_str(&html);

        let source_path = std::path::absolute(path).map_err(|source| ExtractorError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let metadata = ExtractionMetadata {
            source_file: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            source_path: source_path.display().to_string(),
            extraction_time: Local::now(),
            tool_version: TOOL_VERSION.to_string(),
            extracted_scripts: result.keys().map(str::to_string).collect(),
        };

        debug!(
            "Extracted {} data types from {} script tags",
            result.len(),
            self.marker_count()
        );

        Ok(CombinedOutput { metadata, result })
    }

    /// Extract every configured region from in-memory HTML
    pub fn extract_from_str(&self, html: &str) -> ExtractionResult {
        let mut result = ExtractionResult::new();

        for locator in &self.locators {
            let script_id = locator.script_id();
            match locator.locate(html) {
                ScriptSpan::Content(content) => {
                    let (key, payload) = decode_region(&self.config, script_id, content);
                    if !result.insert(key.clone(), payload) {
                        warn!("Duplicate output key '{}' from {}, keeping first", key, script_id);
                    }
                }
                ScriptSpan::Empty => warn!("Script tag '{}' found but empty", script_id),
                ScriptSpan::Missing => warn!("Script tag '{}' not found", script_id),
            }
        }

        result
    }
}

/// Read a document as UTF-8, falling back to Latin-1 when it is not valid UTF-8
pub fn read_document(path: &Path) -> Result<String, ExtractorError> {
    let bytes = fs::read(path).map_err(|source| ExtractorError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(
                "{} is not valid UTF-8 ({}), reading as Latin-1",
                path.display(),
                e.utf8_error()
            );
            Ok(e.into_bytes().into_iter().map(char::from).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = ExtractorConfig::default();
        config.script_ids.clear();
        let result = Extractor::new(config);
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_marker_named_like_metadata_rejected() {
        let config = ExtractorConfig {
            script_ids: vec!["headerJson".to_string(), "extractionMetadataJson".to_string()],
            ..ExtractorConfig::default()
        };
        assert!(matches!(
            Extractor::new(config),
            Err(ExtractorError::Config(_))
        ));
    }

    #[test]
    fn test_marker_count_follows_config() {
        let extractor = Extractor::new(ExtractorConfig::default()).unwrap();
        assert_eq!(extractor.marker_count(), 6);

        let config = ExtractorConfig {
            script_ids: vec!["headerJson".to_string()],
            ..ExtractorConfig::default()
        };
        let extractor = Extractor::new(config).unwrap();
        assert_eq!(extractor.marker_count(), 1);
        assert_eq!(extractor.config().script_ids, vec!["headerJson"]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let extractor = Extractor::new(ExtractorConfig::default()).unwrap();
        let result = extractor.extract_from_file("/definitely/not/here/trace.html");
        match result {
            Err(ExtractorError::NotFound(path)) => {
                assert!(path.ends_with("trace.html"));
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_is_not_found() {
        let extractor = Extractor::new(ExtractorConfig::default()).unwrap();
        let dir = std::env::temp_dir();
        assert!(matches!(
            extractor.extract_from_file(&dir),
            Err(ExtractorError::NotFound(_))
        ));
    }
}
