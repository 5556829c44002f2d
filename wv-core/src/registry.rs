//! Threshold registry
//!
//! Static table mapping each vital identifier to its classification
//! thresholds, required observer capability, and display metadata.
//! The set of known vitals is closed; unknown identifiers return `None`
//! and are degraded by the caller rather than treated as fatal.

use crate::constants::{capability, display, explainers, thresholds, vitals};
use crate::data::VitalDefinition;

static REGISTRY: [VitalDefinition; 5] = [
    VitalDefinition {
        id: vitals::CLS,
        good: thresholds::CLS_GOOD,
        needs_improvement: Some(thresholds::CLS_NEEDS_IMPROVEMENT),
        required_capability: Some(capability::LAYOUT_SHIFT),
        unit: None,
        long_name: "Cumulative Layout Shift",
        explainer_url: explainers::CLS,
    },
    VitalDefinition {
        id: vitals::FCP,
        good: thresholds::FCP_GOOD_MS,
        needs_improvement: None,
        required_capability: Some(capability::PAINT),
        unit: Some(display::MS_UNIT),
        long_name: "First Contentful Paint",
        explainer_url: explainers::FCP,
    },
    VitalDefinition {
        id: vitals::FID,
        good: thresholds::FID_GOOD_MS,
        needs_improvement: Some(thresholds::FID_NEEDS_IMPROVEMENT_MS),
        required_capability: Some(capability::FIRST_INPUT),
        unit: Some(display::MS_UNIT),
        long_name: "First Input Delay",
        explainer_url: explainers::FID,
    },
    VitalDefinition {
        id: vitals::LCP,
        good: thresholds::LCP_GOOD_MS,
        needs_improvement: Some(thresholds::LCP_NEEDS_IMPROVEMENT_MS),
        required_capability: Some(capability::PAINT),
        unit: Some(display::MS_UNIT),
        long_name: "Largest Contentful Paint",
        explainer_url: explainers::LCP,
    },
    VitalDefinition {
        id: vitals::TTFB,
        good: thresholds::TTFB_GOOD_MS,
        needs_improvement: None,
        required_capability: None,
        unit: Some(display::MS_UNIT),
        long_name: "Time to first byte",
        explainer_url: explainers::TTFB,
    },
];

/// Look up the definition for a vital identifier
///
/// Pure and total over the closed set; unknown identifiers return `None`.
pub fn lookup(id: &str) -> Option<&'static VitalDefinition> {
    REGISTRY.iter().find(|def| def.id == id)
}

/// All known vital definitions in default display order
pub fn all() -> &'static [VitalDefinition] {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_every_default_vital() {
        for id in vitals::DEFAULT_SET {
            let def = lookup(id).expect("default vital missing from registry");
            assert_eq!(def.id, id);
        }
    }

    #[test]
    fn lookup_rejects_unknown_identifier() {
        assert!(lookup("INP").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("cls").is_none()); // identifiers are case-sensitive
    }

    #[test]
    fn needs_improvement_threshold_is_never_below_good() {
        for def in all() {
            if let Some(needs_improvement) = def.needs_improvement {
                assert!(
                    needs_improvement >= def.good,
                    "{} has needs-improvement below good",
                    def.id
                );
            }
        }
    }

    #[test]
    fn registry_order_matches_default_set() {
        let ids: Vec<&str> = all().iter().map(|def| def.id).collect();
        assert_eq!(ids, vitals::DEFAULT_SET);
    }
}
