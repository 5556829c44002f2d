//! Core data types for the web-vitals engine
//!
//! Defines the primary data structures shared by the registry, engine,
//! and projection layers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative classification of a vital's value against its thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    Poor,
    NeedsImprovement,
    Good,
}

impl Rating {
    /// The wire/display form of the rating
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Poor => "poor",
            Rating::NeedsImprovement => "needs-improvement",
            Rating::Good => "good",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable definition of one vital: thresholds plus display metadata
///
/// Constructed once as static registry data, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct VitalDefinition {
    pub id: &'static str,
    /// Values at or below this rate `good` (inclusive)
    pub good: f64,
    /// Values at or below this rate `needs-improvement` (inclusive), when present
    pub needs_improvement: Option<f64>,
    /// Observer entry type the runtime must support to measure this vital
    pub required_capability: Option<&'static str>,
    pub unit: Option<&'static str>,
    pub long_name: &'static str,
    pub explainer_url: &'static str,
}

/// One asynchronous report from an underlying sensor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawReport {
    pub id: String,
    pub value: f64,
}

/// Consumer-facing record for one requested vital
///
/// A single shape covers all three states; `loading` and `supported` select
/// the variant:
/// - classified: `loading = false`, `supported = true`, value and rating set
/// - unsupported: `loading = false`, `supported = false`
/// - pending: `loading = true`, `supported = true`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedRecord {
    pub id: String,
    pub long_name: Option<&'static str>,
    pub unit: Option<&'static str>,
    pub explainer_url: Option<&'static str>,
    /// Absent while loading or unsupported
    pub value: Option<f64>,
    /// Absent while loading or unsupported
    pub rating: Option<Rating>,
    pub loading: bool,
    pub supported: bool,
}

impl ProjectedRecord {
    /// Record for a classified report; created once per vital per session
    pub(crate) fn classified(def: &VitalDefinition, value: f64, rating: Rating) -> Self {
        Self {
            id: def.id.to_string(),
            long_name: Some(def.long_name),
            unit: def.unit,
            explainer_url: Some(def.explainer_url),
            value: Some(value),
            rating: Some(rating),
            loading: false,
            supported: true,
        }
    }

    /// Placeholder for a vital whose required capability is absent
    pub(crate) fn unsupported(def: &VitalDefinition) -> Self {
        Self {
            id: def.id.to_string(),
            long_name: Some(def.long_name),
            unit: def.unit,
            explainer_url: Some(def.explainer_url),
            value: None,
            rating: None,
            loading: false,
            supported: false,
        }
    }

    /// Placeholder for a known vital that has not reported yet
    pub(crate) fn pending(def: &VitalDefinition) -> Self {
        Self {
            id: def.id.to_string(),
            long_name: Some(def.long_name),
            unit: def.unit,
            explainer_url: Some(def.explainer_url),
            value: None,
            rating: None,
            loading: true,
            supported: true,
        }
    }

    /// Degraded placeholder for an identifier outside the registry
    pub(crate) fn pending_unknown(id: &str) -> Self {
        Self {
            id: id.to_string(),
            long_name: None,
            unit: None,
            explainer_url: None,
            value: None,
            rating: None,
            loading: true,
            supported: true,
        }
    }
}
