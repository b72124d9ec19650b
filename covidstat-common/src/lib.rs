//! CovidStat Common Library
//!
//! This crate provides the non-UI parts of CovidStat:
//!
//! - [`statistic`] - Case-count records and JSON decoding
//! - [`rows`] - Mapping a record to the rows shown on screen
//! - [`client`] - HTTP client for the statistics API
//! - [`config`] - Configuration loading (JSON5 format)
//! - [`color`] - Hex color parsing
//! - [`error`] - Error types

pub mod client;
pub mod color;
pub mod config;
pub mod error;
pub mod rows;
pub mod statistic;

// Re-export commonly used types at the crate root
pub use client::{StatisticsClient, fetch_latest};
pub use color::{Rgb, parse_hex_color};
pub use config::{
    AppConfig, LogFormat, LoggingConfig, StatisticsSource, default_config_path, load_config,
    parse_config,
};
pub use error::{Error, Result};
pub use rows::{ACTIVE_ICON, CONFIRMED_ICON, DisplayRow, display_rows};
pub use statistic::{StatisticSnapshot, decode_statistics, latest_snapshot};

/// Initialize tracing with the given configuration.
///
/// Supports two output formats:
/// - `LogFormat::Text` (default): Human-readable text format
/// - `LogFormat::Json`: Structured JSON format for log aggregation systems
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(fmt::layer())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
    }

    Ok(())
}
