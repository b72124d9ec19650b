//! Case-count records returned by the statistics API.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Confirmed and active case counts for one day.
///
/// Only the two counters are read; every other field in the API record is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticSnapshot {
    /// Cumulative confirmed cases.
    #[serde(rename = "Confirmed")]
    pub confirmed: u64,

    /// Currently active cases.
    #[serde(rename = "Active")]
    pub active: u64,
}

impl StatisticSnapshot {
    pub fn new(confirmed: u64, active: u64) -> Self {
        Self { confirmed, active }
    }
}

/// Decode a response body as a JSON array of snapshots.
pub fn decode_statistics(body: &[u8]) -> Result<Vec<StatisticSnapshot>> {
    Ok(serde_json::from_slice(body)?)
}

/// Decode a response body and keep only its last record.
///
/// Returns `Ok(None)` for an empty array.
pub fn latest_snapshot(body: &[u8]) -> Result<Option<StatisticSnapshot>> {
    Ok(decode_statistics(body)?.pop())
}
