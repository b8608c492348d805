//! Extract command implementation.

use crate::cli::Cli;
use crate::error::Result;
use crate::output::Formatter;
use glowscan_extractor::{Extractor, ExtractorConfig, OutputWriter};
use std::path::PathBuf;
use tracing::debug;

/// Execute an extraction run and write its output.
///
/// Returns the files written.
pub fn execute_extract(cli: &Cli, formatter: &Formatter) -> Result<Vec<PathBuf>> {
    let config = match &cli.config {
        Some(path) => {
            debug!("Loading extractor configuration from {}", path.display());
            ExtractorConfig::from_file(path)?
        }
        None => ExtractorConfig::default(),
    };
    let extractor = Extractor::new(config)?;

    println!("{}", formatter.processing(&cli.input_file.display().to_string()));
    println!("{}", formatter.rule());

    let output = extractor.extract_from_file(&cli.input_file)?;

    println!("{}", formatter.rule());
    println!(
        "{}",
        formatter.extraction_summary(output.result.len(), extractor.marker_count())
    );

    let writer = OutputWriter::new(cli.output_mode(), cli.json_style());
    let written = writer.write(&output, &cli.output_path())?;
    for path in &written {
        println!("{}", formatter.saved(&path.display().to_string()));
    }

    println!("{}", formatter.rule());
    println!("{}", formatter.success("Extraction completed successfully!"));

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use clap::Parser;
    use glowscan_extractor::ExtractorError;
    use std::fs;
    use tempfile::TempDir;

    const TRACE: &str = r#"<body><script type="text/json" id="headerJson">{"a":1}</script></body>"#;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["glowscan"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn test_combined_run() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("trace.html");
        fs::write(&input, TRACE).unwrap();
        let out_dir = dir.path().join("out");

        let cli = cli(&[
            input.to_str().unwrap(),
            "--output-dir",
            out_dir.to_str().unwrap(),
        ]);
        let written = execute_extract(&cli, &Formatter::new(false)).unwrap();

        assert_eq!(written, vec![out_dir.join("extracted_trace_data.json")]);
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&written[0]).unwrap()).unwrap();
        assert_eq!(value["header"], serde_json::json!({"a": 1}));
        assert_eq!(
            value["extraction_metadata"]["extracted_scripts"],
            serde_json::json!(["header"])
        );
    }

    #[test]
    fn test_separate_run() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("trace.html");
        fs::write(&input, TRACE).unwrap();
        let out_dir = dir.path().join("out");

        let cli = cli(&[
            input.to_str().unwrap(),
            "--output-dir",
            out_dir.to_str().unwrap(),
            "--separate",
        ]);
        let written = execute_extract(&cli, &Formatter::new(false)).unwrap();

        let base = out_dir.join("extracted_data");
        assert_eq!(
            written,
            vec![base.join("extraction_metadata.json"), base.join("header.json")]
        );
    }

    #[test]
    fn test_custom_config_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("trace.html");
        fs::write(&input, TRACE).unwrap();
        let config = dir.path().join("glowscan.toml");
        fs::write(&config, "script_ids = [\"entriesJson\"]\n").unwrap();
        let out = dir.path().join("out.json");

        let cli = cli(&[
            input.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "-c",
            config.to_str().unwrap(),
        ]);
        execute_extract(&cli, &Formatter::new(false)).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 1);
        assert_eq!(value["extraction_metadata"]["extracted_scripts"], serde_json::json!([]));
    }

    #[test]
    fn test_missing_input_fails_without_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("missing.html");
        let out = dir.path().join("out.json");

        let cli = cli(&[input.to_str().unwrap(), "-o", out.to_str().unwrap()]);
        let result = execute_extract(&cli, &Formatter::new(false));

        assert!(matches!(
            result,
            Err(CliError::Extractor(ExtractorError::NotFound(_)))
        ));
        assert!(!out.exists());
    }
}
