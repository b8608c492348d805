//! Glowscan CLI - Extract JSON data from Glowroot trace HTML files.

use clap::Parser;
use glowscan_cli::commands;
use glowscan_cli::{Cli, CliError, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    let formatter = Formatter::new(!cli.no_color);

    if let Err(e) = run(&cli, &formatter) {
        eprintln!("{}", formatter.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}

fn run(cli: &Cli, formatter: &Formatter) -> glowscan_cli::Result<()> {
    init_logging(cli.quiet)?;
    commands::execute_extract(cli, formatter)?;
    Ok(())
}

/// Log to stderr, honouring `RUST_LOG` when set.
fn init_logging(quiet: bool) -> glowscan_cli::Result<()> {
    let default_level = if quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
