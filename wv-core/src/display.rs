//! Display formatting helpers
//!
//! GUI-agnostic formatting for projected records, usable by any frontend
//! (TUI, web, CLI) without further logic.

use crate::constants::display;
use crate::data::{ProjectedRecord, Rating};

/// Format a record's value for display
///
/// Whole units with the unit suffix appended; records without a value yet
/// render as the pending marker.
pub fn format_value(record: &ProjectedRecord) -> String {
    match record.value {
        Some(value) => format!("{}{}", value.floor(), record.unit.unwrap_or("")),
        None => display::PENDING_MARKER.to_string(),
    }
}

/// Default color token for a record's rating
///
/// Unrated records (loading or unsupported) fall back to the poor token,
/// matching the pessimistic default of the classification itself.
pub fn rating_color(rating: Option<Rating>) -> &'static str {
    match rating {
        Some(Rating::Good) => display::colors::GOOD,
        Some(Rating::NeedsImprovement) => display::colors::NEEDS_IMPROVEMENT,
        Some(Rating::Poor) | None => display::colors::POOR,
    }
}
