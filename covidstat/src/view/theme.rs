//! Colors and surface styles for CovidStat.

use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Degrees, Theme};

use covidstat_common::{Rgb, parse_hex_color};

/// Top of the background gradient.
pub const GRADIENT_START: &str = "#dd1818";

/// Bottom of the background gradient.
pub const GRADIENT_END: &str = "#333333";

/// Corner radius of row cards.
pub const CARD_RADIUS: f32 = 20.0;

/// Convert a parsed color into an iced color.
pub fn to_color(rgb: Rgb) -> Color {
    let [r, g, b] = rgb.to_f32();
    Color::from_rgb(r, g, b)
}

/// Parse a `#rrggbb` string into an iced color.
pub fn hex(value: &str) -> Color {
    to_color(parse_hex_color(value))
}

/// Full-window background: red fading into near-black, top to bottom.
pub fn background(_theme: &Theme) -> container::Style {
    let gradient = Linear::new(Degrees(180.0))
        .add_stop(0.0, hex(GRADIENT_START))
        .add_stop(1.0, hex(GRADIENT_END));

    container::Style {
        background: Some(Background::Gradient(gradient.into())),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}

/// Translucent rounded card for a single row.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.18))),
        border: Border {
            radius: CARD_RADIUS.into(),
            width: 1.0,
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.25),
        },
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}

/// Muted text color for row descriptions.
pub fn text_muted() -> Color {
    Color::from_rgba(1.0, 1.0, 1.0, 0.8)
}
