//! Result and metadata types for an extraction run

use crate::decode::Payload;
use chrono::{DateTime, Local};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Key under which the metadata record sits in the combined output
pub const METADATA_KEY: &str = "extraction_metadata";

/// Extracted payloads keyed by output key, in marker order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionResult {
    entries: Vec<(String, Payload)>,
}

impl ExtractionResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Returns false and leaves the result untouched when
    /// `key` is already present.
    pub fn insert(&mut self, key: String, payload: Payload) -> bool {
        if self.get(&key).is_some() {
            return false;
        }
        self.entries.push((key, payload));
        true
    }

    /// Payload stored under `key`
    pub fn get(&self, key: &str) -> Option<&Payload> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, payload)| payload)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Payload)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was extracted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ExtractionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, payload) in &self.entries {
            map.serialize_entry(key, payload)?;
        }
        map.end()
    }
}

/// Provenance of an extraction run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// File name of the source document
    pub source_file: String,

    /// Absolute path of the source document
    pub source_path: String,

    /// When the extraction ran
    pub extraction_time: DateTime<Local>,

    /// Version of the tool that produced the output
    pub tool_version: String,

    /// Keys present in the result, in order
    pub extracted_scripts: Vec<String>,
}

/// Metadata and extracted payloads, serialized as a single JSON object
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedOutput {
    /// Provenance record, written under [`METADATA_KEY`]
    pub metadata: ExtractionMetadata,

    /// Extracted payloads
    pub result: ExtractionResult,
}

impl CombinedOutput {
    /// Payload for a result key
    pub fn get(&self, key: &str) -> Option<&Payload> {
        self.result.get(key)
    }

    /// The combined document as a JSON value
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        let mut map = Map::new();
        map.insert(METADATA_KEY.to_string(), serde_json::to_value(&self.metadata)?);
        for (key, payload) in self.result.iter() {
            map.insert(key.to_string(), payload.to_value());
        }
        Ok(Value::Object(map))
    }
}

impl Serialize for CombinedOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.result.len() + 1))?;
        map.serialize_entry(METADATA_KEY, &self.metadata)?;
        for (key, payload) in self.result.iter() {
            map.serialize_entry(key, payload)?;
        }
        map.end()
    }
}
