use crate::config::StatisticsSource;
use crate::error::Result;
use crate::statistic::{StatisticSnapshot, latest_snapshot};

/// HTTP client for the statistics API.
#[derive(Debug, Clone)]
pub struct StatisticsClient {
    http: reqwest::Client,
    source: StatisticsSource,
}

impl StatisticsClient {
    /// Create a client using reqwest's default settings.
    pub fn new(source: StatisticsSource) -> Self {
        Self::with_http_client(reqwest::Client::new(), source)
    }

    /// Create a client on top of an existing reqwest client.
    pub fn with_http_client(http: reqwest::Client, source: StatisticsSource) -> Self {
        Self { http, source }
    }

    /// The source this client reads from.
    pub fn source(&self) -> &StatisticsSource {
        &self.source
    }

    /// Fetch the statistics and return the most recent record.
    ///
    /// Transport failures, non-success statuses and undecodable bodies are
    /// errors. An empty array is `Ok(None)`.
    pub async fn fetch_latest(&self) -> Result<Option<StatisticSnapshot>> {
        let url = self.source.endpoint_url();

        tracing::info!(url = %url, "Fetching statistics");

        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body = response.bytes().await?;

        tracing::debug!(bytes = body.len(), "Received statistics response");

        let latest = latest_snapshot(&body)?;
        match latest {
            Some(snapshot) => tracing::info!(
                confirmed = snapshot.confirmed,
                active = snapshot.active,
                "Decoded latest statistics"
            ),
            None => tracing::debug!(country = %self.source.country, "Statistics response is empty"),
        }

        Ok(latest)
    }
}

/// Fetch the latest statistics for `source` with a fresh client.
pub async fn fetch_latest(source: StatisticsSource) -> Result<Option<StatisticSnapshot>> {
    StatisticsClient::new(source).fetch_latest().await
}
