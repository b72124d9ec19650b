//! Summary list of the latest case counts.

use iced::widget::{Column, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use covidstat_common::DisplayRow;

use crate::message::Message;
use crate::view::icons::{self, ROW_ICON_SIZE};
use crate::view::theme;

/// Statistics list state.
#[derive(Debug, Default)]
pub struct StatisticsState {
    /// Rows in display order. Empty until a fetch succeeds.
    pub rows: Vec<DisplayRow>,
}

/// Render the statistics screen.
pub fn statistics_view(state: &StatisticsState) -> Element<'_, Message> {
    let mut list = Column::new().spacing(16);

    for display_row in &state.rows {
        list = list.push(render_row(display_row));
    }

    let content = scrollable(list.padding(24))
        .width(Length::Fill)
        .height(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::background)
        .into()
}

/// Render a single row card.
fn render_row(display_row: &DisplayRow) -> Element<'_, Message> {
    let icon = icons::for_identifier(&display_row.icon, ROW_ICON_SIZE);

    let title = text(&display_row.title).size(20);
    let description = text(&display_row.description)
        .size(16)
        .color(theme::text_muted());

    let content = row![icon, column![title, description].spacing(4)]
        .spacing(16)
        .align_y(Alignment::Center);

    container(content)
        .padding(20)
        .width(Length::Fill)
        .style(theme::card)
        .into()
}
