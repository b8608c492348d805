//! Glowscan CLI library.
//!
//! Argument definitions, output path resolution and console formatting for the
//! `glowscan` binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use error::{CliError, Result};
pub use output::Formatter;
