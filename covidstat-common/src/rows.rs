//! Display rows derived from a statistics snapshot.

use serde::{Deserialize, Serialize};

use crate::statistic::StatisticSnapshot;

/// Icon identifier for the confirmed-cases row.
pub const CONFIRMED_ICON: &str = "bandage.fill";

/// Icon identifier for the active-cases row.
pub const ACTIVE_ICON: &str = "person.crop.circle.fill.badge.checkmark";

/// One renderable row of the summary list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    /// Icon identifier.
    pub icon: String,
    /// Row title.
    pub title: String,
    /// Row description (the formatted count).
    pub description: String,
}

impl DisplayRow {
    pub fn new(
        icon: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Map a snapshot to its two display rows: confirmed first, then active.
pub fn display_rows(snapshot: &StatisticSnapshot) -> Vec<DisplayRow> {
    vec![
        DisplayRow::new(
            CONFIRMED_ICON,
            "Total Confirmed",
            format_people(snapshot.confirmed),
        ),
        DisplayRow::new(ACTIVE_ICON, "Total Active", format_people(snapshot.active)),
    ]
}

fn format_people(count: u64) -> String {
    format!("{} people", count)
}
