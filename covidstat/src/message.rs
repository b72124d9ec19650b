use covidstat_common::StatisticSnapshot;

/// Messages for the CovidStat application.
#[derive(Debug, Clone)]
pub enum Message {
    /// The statistics request finished.
    ///
    /// `Ok(None)` means the API answered with an empty array; `Err` carries the
    /// rendered transport or decode error.
    StatisticsLoaded(Result<Option<StatisticSnapshot>, String>),
}
