//! Write extraction output to disk

use crate::error::ExtractorError;
use crate::types::{CombinedOutput, METADATA_KEY};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// How the output is laid out on disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One file holding metadata and every payload
    #[default]
    Combined,
    /// A directory with one file for metadata and one per payload
    Separate,
}

/// JSON formatting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// No whitespace between tokens
    #[default]
    Compact,
    /// Two-space indentation
    Pretty,
}

/// Persists a [`CombinedOutput`]
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputWriter {
    mode: OutputMode,
    style: JsonStyle,
}

impl OutputWriter {
    /// Create a new writer
    pub fn new(mode: OutputMode, style: JsonStyle) -> Self {
        Self { mode, style }
    }

    /// Layout used by this writer
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Formatting used by this writer
    pub fn style(&self) -> JsonStyle {
        self.style
    }

    /// Write `output` and return the files written, in order.
    ///
    /// In separate mode `path` only names the directory: files land in
    /// `<parent>/<file stem>/`.
    pub fn write(
        &self,
        output: &CombinedOutput,
        path: &Path,
    ) -> Result<Vec<PathBuf>, ExtractorError> {
        match self.mode {
            OutputMode::Combined => {
                self.write_combined(output, path)?;
                Ok(vec![path.to_path_buf()])
            }
            OutputMode::Separate => self.write_separate(output, path),
        }
    }

    fn write_combined(&self, output: &CombinedOutput, path: &Path) -> Result<(), ExtractorError> {
        if let Some(parent) = path.parent() {
            create_dir(parent)?;
        }
        self.write_json(path, output)?;
        info!("Saved combined data to: {}", path.display());
        Ok(())
    }

    fn write_separate(
        &self,
        output: &CombinedOutput,
        path: &Path,
    ) -> Result<Vec<PathBuf>, ExtractorError> {
        let dir = separate_dir(path);
        create_dir(&dir)?;

        let mut written = Vec::with_capacity(output.result.len() + 1);

        let metadata_file = dir.join(format!("{}.json", METADATA_KEY));
        self.write_json(&metadata_file, &output.metadata)?;
        info!("Saved metadata to: {}", metadata_file.display());
        written.push(metadata_file);

        for (key, payload) in output.result.iter() {
            let data_file = dir.join(format!("{}.json", key));
            self.write_json(&data_file, payload)?;
            info!("Saved {} to: {}", key, data_file.display());
            written.push(data_file);
        }

        Ok(written)
    }

    fn write_json<T: Serialize + ?Sized>(
        &self,
        path: &Path,
        value: &T,
    ) -> Result<(), ExtractorError> {
        let io_err = |source| ExtractorError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        match self.style {
            JsonStyle::Compact => serde_json::to_writer(&mut writer, value)?,
            JsonStyle::Pretty => serde_json::to_writer_pretty(&mut writer, value)?,
        }
        writer.flush().map_err(io_err)
    }
}

/// Directory used by separate mode for an output path
pub fn separate_dir(path: &Path) -> PathBuf {
    let stem = path.file_stem().unwrap_or(path.as_os_str());
    match path.parent() {
        Some(parent) => parent.join(stem),
        None => PathBuf::from(stem),
    }
}

fn create_dir(dir: &Path) -> Result<(), ExtractorError> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| ExtractorError::Write {
        path: dir.to_path_buf(),
        source,
    })
}
