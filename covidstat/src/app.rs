//! CovidStat Iced application.

use iced::{Element, Task, Theme};

use covidstat_common::{AppConfig, DisplayRow, StatisticsSource, display_rows, fetch_latest};

use crate::message::Message;
use crate::view::statistics::{StatisticsState, statistics_view};

/// The main CovidStat application.
pub struct CovidStat {
    /// Where the statistics come from.
    source: StatisticsSource,
    /// Rows shown on screen.
    statistics: StatisticsState,
}

impl CovidStat {
    /// Boot the application and start the one-shot statistics fetch.
    pub fn boot(config: AppConfig) -> (Self, Task<Message>) {
        let app = Self {
            source: config.source,
            statistics: StatisticsState::default(),
        };

        let fetch = Task::perform(fetch_latest(app.source.clone()), |result| {
            Message::StatisticsLoaded(result.map_err(|e| e.to_string()))
        });

        (app, fetch)
    }

    /// Get the window title.
    pub fn title(&self) -> String {
        format!("CovidStat - {}", self.source.country)
    }

    /// Handle incoming messages.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StatisticsLoaded(Ok(Some(snapshot))) => {
                tracing::debug!(
                    confirmed = snapshot.confirmed,
                    active = snapshot.active,
                    "Binding statistics"
                );
                self.statistics.rows = display_rows(&snapshot);
            }

            Message::StatisticsLoaded(Ok(None)) => {
                tracing::debug!(country = %self.source.country, "No statistics for date window");
            }

            Message::StatisticsLoaded(Err(error)) => {
                tracing::error!(error = %error, url = %self.source.endpoint_url(), "Failed to load statistics");
            }
        }

        Task::none()
    }

    /// Render the view.
    pub fn view(&self) -> Element<'_, Message> {
        statistics_view(&self.statistics)
    }

    /// Get the application theme.
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Rows currently on screen.
    pub fn rows(&self) -> &[DisplayRow] {
        &self.statistics.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covidstat_common::StatisticSnapshot;

    fn booted() -> CovidStat {
        let (app, _fetch) = CovidStat::boot(AppConfig::default());
        app
    }

    #[test]
    fn test_no_rows_before_fetch() {
        assert!(booted().rows().is_empty());
    }

    #[test]
    fn test_loaded_snapshot_binds_two_rows() {
        let mut app = booted();
        let _ = app.update(Message::StatisticsLoaded(Ok(Some(StatisticSnapshot::new(
            150, 20,
        )))));

        let rows = app.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "Total Confirmed");
        assert_eq!(rows[0].description, "150 people");
        assert_eq!(rows[1].title, "Total Active");
        assert_eq!(rows[1].description, "20 people");
    }

    #[test]
    fn test_repeated_load_replaces_rows() {
        let mut app = booted();
        let _ = app.update(Message::StatisticsLoaded(Ok(Some(StatisticSnapshot::new(
            1, 1,
        )))));
        let _ = app.update(Message::StatisticsLoaded(Ok(Some(StatisticSnapshot::new(
            2, 2,
        )))));

        assert_eq!(app.rows().len(), 2);
        assert_eq!(app.rows()[0].description, "2 people");
    }

    #[test]
    fn test_empty_response_leaves_list_empty() {
        let mut app = booted();
        let _ = app.update(Message::StatisticsLoaded(Ok(None)));
        assert!(app.rows().is_empty());
    }

    #[test]
    fn test_failure_leaves_list_empty() {
        let mut app = booted();
        let _ = app.update(Message::StatisticsLoaded(Err(
            "HTTP request failed: connection refused".to_string(),
        )));
        assert!(app.rows().is_empty());
    }

    #[test]
    fn test_title_names_country() {
        assert_eq!(booted().title(), "CovidStat - cambodia");
    }
}
