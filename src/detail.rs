//! Detail content for the hovered month.
//!
//! Two views show the same lookup: a short preview in the middle of the
//! rings and a full list in a panel below the chart.

use crate::calendar::BloomCalendar;
use crate::interaction::HoverState;

/// Center text when nothing is hovered.
pub const IDLE_PROMPT: &str = "Hover over a month to see plants";

/// Heading between the month name and the preview.
pub const BLOOMING_HEADING: &str = "Blooming:";

/// Number of plants the center preview shows.
pub const PREVIEW_LIMIT: usize = 3;

/// First `limit` plants joined by `", "`, with `"..."` appended when the list
/// is longer than `limit`.
#[must_use]
pub fn bloom_preview<S: AsRef<str>>(plants: &[S], limit: usize) -> String {
    let mut preview = plants
        .iter()
        .take(limit)
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    if plants.len() > limit {
        preview.push_str("...");
    }
    preview
}

/// What the center of the rings shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CenterOverlay {
    /// Idle prompt.
    Prompt,
    /// Hovered month with its plant preview.
    Month {
        /// Month name.
        month: String,
        /// Truncated plant list.
        preview: String,
    },
}

impl CenterOverlay {
    /// Overlay for the given hover state.
    #[must_use]
    pub fn for_state(calendar: &BloomCalendar, state: HoverState) -> Self {
        let Some(month) = state.active().and_then(|i| calendar.month(i)) else {
            return Self::Prompt;
        };
        Self::Month {
            month: month.name().to_string(),
            preview: bloom_preview(calendar.plants(month.name()), PREVIEW_LIMIT),
        }
    }

    /// Text lines, top to bottom.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Self::Prompt => vec![IDLE_PROMPT],
            Self::Month { month, preview } => vec![month.as_str(), BLOOMING_HEADING, preview.as_str()],
        }
    }
}

/// The panel below the chart listing every plant of the hovered month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    month: String,
    plants: Vec<String>,
}

impl DetailPanel {
    /// Panel for the given hover state; `None` while idle.
    #[must_use]
    pub fn for_state(calendar: &BloomCalendar, state: HoverState) -> Option<Self> {
        let month = calendar.month(state.active()?)?;
        Self::for_month(calendar, month.name())
    }

    /// Panel for a month by name; `None` if the calendar has no such month.
    #[must_use]
    pub fn for_month(calendar: &BloomCalendar, month: &str) -> Option<Self> {
        calendar.index_of(month)?;
        Some(Self {
            month: month.to_string(),
            plants: calendar.plants(month).to_vec(),
        })
    }

    /// Month shown.
    #[must_use]
    pub fn month(&self) -> &str {
        &self.month
    }

    /// Panel heading, e.g. `"July Blooming Plants:"`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} Blooming Plants:", self.month)
    }

    /// Every plant, in table order.
    #[must_use]
    pub fn plants(&self) -> &[String] {
        &self.plants
    }
}
