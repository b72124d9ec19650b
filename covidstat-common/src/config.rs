use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default statistics API host.
pub const DEFAULT_BASE_URL: &str = "https://api.covid19api.com";

/// Default country slug.
pub const DEFAULT_COUNTRY: &str = "cambodia";

/// Default start of the date window (inclusive).
pub const DEFAULT_FROM: &str = "2020-06-24T00:00:00Z";

/// Default end of the date window.
pub const DEFAULT_TO: &str = "2020-06-25T00:00:00Z";

/// Where the statistics are fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatisticsSource {
    /// API host, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Country slug as understood by the API.
    #[serde(default = "default_country")]
    pub country: String,

    /// RFC 3339 start of the date window.
    #[serde(default = "default_from")]
    pub from: String,

    /// RFC 3339 end of the date window.
    #[serde(default = "default_to")]
    pub to: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

fn default_from() -> String {
    DEFAULT_FROM.to_string()
}

fn default_to() -> String {
    DEFAULT_TO.to_string()
}

impl Default for StatisticsSource {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            country: default_country(),
            from: default_from(),
            to: default_to(),
        }
    }
}

impl StatisticsSource {
    /// Full request URL for this source.
    ///
    /// The date literals are inserted verbatim, matching what the API expects.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/country/{}?from={}&to={}",
            self.base_url.trim_end_matches('/'),
            self.country,
            self.from,
            self.to
        )
    }

    /// Check that the source describes a usable request.
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "Invalid base_url '{}': expected an http or https URL",
                self.base_url
            )));
        }

        if self.country.trim().is_empty() {
            return Err(Error::Config("country must not be empty".to_string()));
        }

        let from = parse_timestamp("from", &self.from)?;
        let to = parse_timestamp("to", &self.to)?;
        if from >= to {
            return Err(Error::Config(format!(
                "Empty date window: from '{}' is not before to '{}'",
                self.from, self.to
            )));
        }

        Ok(())
    }
}

fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value)
        .map_err(|e| Error::Config(format!("Invalid {} timestamp '{}': {}", field, value, e)))
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format (default).
    #[default]
    Text,
    /// Structured JSON format.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format: "text" or "json".
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Statistics endpoint settings.
    #[serde(default)]
    pub source: StatisticsSource,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the whole configuration.
    pub fn validate(&self) -> Result<()> {
        self.source.validate()
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, the default location is tried
    /// and built-in defaults are used when no file is there.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config: Self = match path {
            Some(path) => load_config(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => load_config(&path)?,
                _ => {
                    tracing::debug!("No configuration file found, using defaults");
                    Self::default()
                }
            },
        };

        config.validate()?;
        Ok(config)
    }
}

/// Default configuration file location (`<config_dir>/covidstat/covidstat.json5`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("covidstat").join("covidstat.json5"))
}

/// Load a configuration file in JSON5 format.
pub fn load_config<T: for<'de> Deserialize<'de>>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    json5::from_str(&content).map_err(|e| {
        Error::Config(format!(
            "Failed to parse config file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Load a configuration from a JSON5 string.
pub fn parse_config<T: for<'de> Deserialize<'de>>(content: &str) -> Result<T> {
    json5::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
}
