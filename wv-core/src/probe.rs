//! Sensor availability probing
//!
//! Decides, synchronously and before any subscription attempt, whether the
//! runtime can measure a vital at all. This runs ahead of the adapter so the
//! engine records unsupported vitals without ever subscribing them.

use crate::data::VitalDefinition;

/// Runtime capability-query surface
///
/// Answers which observer entry types the host environment can record.
#[cfg_attr(test, mockall::automock)]
pub trait CapabilitySurface {
    /// Returns true when the runtime can observe the given entry type
    fn supports_entry_type(&self, entry_type: &str) -> bool;
}

/// Capability surface backed by a fixed list of supported entry types
#[derive(Debug, Clone, Default)]
pub struct StaticCapabilities {
    entry_types: Vec<String>,
}

impl StaticCapabilities {
    pub fn new<I, S>(entry_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entry_types: entry_types.into_iter().map(Into::into).collect(),
        }
    }

    /// A surface advertising every entry type the default vitals need
    pub fn full() -> Self {
        use crate::constants::capability;
        Self::new([
            capability::LAYOUT_SHIFT,
            capability::PAINT,
            capability::FIRST_INPUT,
        ])
    }
}

impl CapabilitySurface for StaticCapabilities {
    fn supports_entry_type(&self, entry_type: &str) -> bool {
        self.entry_types.iter().any(|e| e == entry_type)
    }
}

/// Check whether the runtime can measure the given vital
///
/// Vitals without a declared capability are always considered available;
/// for those, availability is only decided at the adapter level.
pub fn is_available(def: &VitalDefinition, caps: &dyn CapabilitySurface) -> bool {
    match def.required_capability {
        Some(entry_type) => caps.supports_entry_type(entry_type),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    #[test]
    fn vital_with_present_capability_is_available() {
        let mut caps = MockCapabilitySurface::new();
        caps.expect_supports_entry_type()
            .withf(|entry_type| entry_type == "layout-shift")
            .return_const(true);

        let cls = registry::lookup("CLS").unwrap();
        assert!(is_available(cls, &caps));
    }

    #[test]
    fn vital_with_absent_capability_is_unavailable() {
        let mut caps = MockCapabilitySurface::new();
        caps.expect_supports_entry_type().return_const(false);

        let fid = registry::lookup("FID").unwrap();
        assert!(!is_available(fid, &caps));
    }

    #[test]
    fn vital_without_capability_never_queries_the_surface() {
        // No expectations set: any call would panic the mock.
        let caps = MockCapabilitySurface::new();
        let ttfb = registry::lookup("TTFB").unwrap();
        assert!(is_available(ttfb, &caps));
    }

    #[test]
    fn static_capabilities_match_exact_entry_types() {
        let caps = StaticCapabilities::new(["paint"]);
        assert!(caps.supports_entry_type("paint"));
        assert!(!caps.supports_entry_type("layout-shift"));
    }
}
