//! Rating classification against registry thresholds

use crate::data::{Rating, VitalDefinition};

/// Classify a reported value against a vital's thresholds
///
/// The comparisons run in a fixed order and the last match wins: the rating
/// defaults to `poor`, upgrades to `needs-improvement` when the value is at
/// or below that threshold (where one is defined), and upgrades to `good`
/// when at or below the good threshold. Both boundaries are inclusive.
/// A value of zero is legitimate data and classifies like any other.
pub fn classify(def: &VitalDefinition, value: f64) -> Rating {
    let mut rating = Rating::Poor;

    if let Some(needs_improvement) = def.needs_improvement {
        if value <= needs_improvement {
            rating = Rating::NeedsImprovement;
        }
    }

    if value <= def.good {
        rating = Rating::Good;
    }

    rating
}
