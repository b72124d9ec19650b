//! SVG icons for the CovidStat UI.
//!
//! All icons are embedded at compile time using `include_bytes!`. Rows refer to
//! icons by identifier; [`for_identifier`] resolves them.

use iced::widget::svg::{Handle, Svg};
use iced::{Element, Length};

use covidstat_common::{ACTIVE_ICON, CONFIRMED_ICON};

/// Edge length of a row icon, in pixels.
pub const ROW_ICON_SIZE: f32 = 40.0;

/// Create an SVG element from raw bytes.
fn svg_icon<Message: 'static>(data: &'static [u8], size: f32) -> Element<'static, Message> {
    let handle = Handle::from_memory(data);
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .into()
}

/// Bandage (confirmed cases).
pub fn bandage<Message: 'static>(size: f32) -> Element<'static, Message> {
    svg_icon(include_bytes!("bandage.svg"), size)
}

/// Person with a check badge (active cases).
pub fn person_check<Message: 'static>(size: f32) -> Element<'static, Message> {
    svg_icon(include_bytes!("person-check.svg"), size)
}

/// Plain dot, used for unknown identifiers.
pub fn dot<Message: 'static>(size: f32) -> Element<'static, Message> {
    svg_icon(include_bytes!("dot.svg"), size)
}

/// Resolve a row's icon identifier.
pub fn for_identifier<Message: 'static>(identifier: &str, size: f32) -> Element<'static, Message> {
    match identifier {
        CONFIRMED_ICON => bandage(size),
        ACTIVE_ICON => person_check(size),
        other => {
            tracing::debug!(icon = other, "Unknown icon identifier");
            dot(size)
        }
    }
}
