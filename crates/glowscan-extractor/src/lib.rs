//! Glowscan Extractor
//!
//! Pulls the embedded JSON payloads out of Glowroot trace HTML exports and
//! writes them as plain JSON documents.
//!
//! # Overview
//!
//! A trace export carries its data in `<script type="text/json" id="...">`
//! regions next to a large amount of CSS and JavaScript. The Extractor scans for
//! a fixed set of region ids, decodes each region as JSON (keeping the raw text
//! when decoding fails) and records where and when the data came from.
//!
//! # Architecture
//!
//! ```text
//! HTML → ScriptLocator → decode_region → ExtractionResult
//!                                          + ExtractionMetadata → OutputWriter
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use glowscan_extractor::{Extractor, ExtractorConfig, JsonStyle, OutputMode, OutputWriter};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::new(ExtractorConfig::default())?;
//! let output = extractor.extract_from_file("trace.html")?;
//!
//! println!("Extracted: {:?}", output.metadata.extracted_scripts);
//!
//! let writer = OutputWriter::new(OutputMode::Combined, JsonStyle::Pretty);
//! writer.write(&output, Path::new("extracted_trace_data.json"))?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod decode;
mod error;
mod extractor;
mod markers;
mod span;
mod types;
mod writer;


pub use config::ExtractorConfig;
pub use decode::{decode_region, Payload};
pub use error::ExtractorError;
pub use extractor::{read_document, Extractor, TOOL_VERSION};
pub use markers::{camel_to_snake, normalize_key, DEFAULT_SCRIPT_IDS};
pub use span::{ScriptLocator, ScriptSpan};
pub use types::{CombinedOutput, ExtractionMetadata, ExtractionResult, METADATA_KEY};
pub use writer::{separate_dir, JsonStyle, OutputMode, OutputWriter};
