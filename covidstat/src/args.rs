//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Command line arguments.
#[derive(Parser, Debug, Clone, Default)]
#[command(about = "COVID-19 confirmed and active case counts")]
pub struct Args {
    /// Path to configuration file (defaults to the user config directory).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}
