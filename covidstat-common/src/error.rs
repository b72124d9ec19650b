use thiserror::Error;

/// Common error type for CovidStat components.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error came from the transport layer rather than the payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_))
    }
}

/// Result type alias using CovidStat's Error.
pub type Result<T> = std::result::Result<T, Error>;
