//! CLI argument definitions and output path resolution.

use clap::Parser;
use glowscan_extractor::{JsonStyle, OutputMode};
use std::path::PathBuf;

/// Default output file in combined mode
pub const DEFAULT_OUTPUT: &str = "extracted_trace_data.json";

/// Output base name under `--output-dir` in separate mode
pub const DEFAULT_SEPARATE_BASE: &str = "extracted_data";

/// Glowscan - Extract JSON data from Glowroot trace HTML files.
#[derive(Debug, Parser)]
#[command(name = "glowscan")]
#[command(version, about, long_about = None)]
#[command(after_help = "Examples:
  glowscan trace.html -o extracted_data.json
  glowscan trace.html -o data/ --separate
  glowscan trace.html --output-dir ./analysis/")]
pub struct Cli {
    /// Input Glowroot trace HTML file
    pub input_file: PathBuf,

    /// Output JSON file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Output directory (overrides --output)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Save each data type to separate JSON files
    #[arg(long)]
    pub separate: bool,

    /// Use pretty-printed JSON format (default: compact)
    #[arg(long)]
    pub pretty: bool,

    /// Extractor configuration file (TOML)
    #[arg(short, long, env = "GLOWSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Where the output goes, after applying `--output-dir`.
    pub fn output_path(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) if self.separate => dir.join(DEFAULT_SEPARATE_BASE),
            Some(dir) => dir.join(DEFAULT_OUTPUT),
            None => self.output.clone(),
        }
    }

    /// Requested output layout.
    pub fn output_mode(&self) -> OutputMode {
        if self.separate {
            OutputMode::Separate
        } else {
            OutputMode::Combined
        }
    }

    /// Requested JSON formatting.
    pub fn json_style(&self) -> JsonStyle {
        if self.pretty {
            JsonStyle::Pretty
        } else {
            JsonStyle::Compact
        }
    }
}
