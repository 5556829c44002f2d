//! Constants and threshold values for the web-vitals engine
//!
//! Centralizes all thresholds, capability names, and display metadata.
//! Never use magic numbers in other files - add them here first.

/// Vital identifiers
pub mod vitals {
    /// Cumulative Layout Shift
    pub const CLS: &str = "CLS";

    /// First Contentful Paint
    pub const FCP: &str = "FCP";

    /// First Input Delay
    pub const FID: &str = "FID";

    /// Largest Contentful Paint
    pub const LCP: &str = "LCP";

    /// Time to first byte
    pub const TTFB: &str = "TTFB";

    /// The full closed set, in default display order
    pub const DEFAULT_SET: [&str; 5] = [CLS, FCP, FID, LCP, TTFB];
}

/// Classification thresholds per vital
///
/// Values at or below `*_GOOD` rate `good`; values at or below
/// `*_NEEDS_IMPROVEMENT` (where defined) rate `needs-improvement`;
/// everything else rates `poor`. Both boundaries are inclusive.
pub mod thresholds {
    /// CLS is a unitless score
    pub const CLS_GOOD: f64 = 0.1;
    pub const CLS_NEEDS_IMPROVEMENT: f64 = 0.25;

    pub const FCP_GOOD_MS: f64 = 2500.0;

    pub const FID_GOOD_MS: f64 = 100.0;
    pub const FID_NEEDS_IMPROVEMENT_MS: f64 = 300.0;

    pub const LCP_GOOD_MS: f64 = 2500.0;
    pub const LCP_NEEDS_IMPROVEMENT_MS: f64 = 4000.0;

    pub const TTFB_GOOD_MS: f64 = 2500.0;
}

/// Observer entry types a runtime must support to measure certain vitals
pub mod capability {
    pub const LAYOUT_SHIFT: &str = "layout-shift";
    pub const PAINT: &str = "paint";
    pub const FIRST_INPUT: &str = "first-input";
}

/// Explainer links shown next to each vital
pub mod explainers {
    pub const CLS: &str = "https://web.dev/cls/";
    pub const FCP: &str = "https://web.dev/fcp/";
    pub const FID: &str = "https://web.dev/fid/";
    pub const LCP: &str = "https://web.dev/lcp/";
    pub const TTFB: &str = "https://web.dev/time-to-first-byte/";
}

/// Display formatting constants
pub mod display {
    /// Unit suffix for millisecond-based vitals
    pub const MS_UNIT: &str = "ms";

    /// Marker rendered while a vital is still loading
    pub const PENDING_MARKER: &str = "...";

    /// Default color tokens per rating; consumers may theme over these
    pub mod colors {
        pub const GOOD: &str = "green";
        pub const NEEDS_IMPROVEMENT: &str = "gold";
        pub const POOR: &str = "red";
    }
}

/// Input limits for configuration values
pub mod limits {
    /// Maximum accepted length of a vital identifier from configuration
    pub const MAX_VITAL_NAME_LEN: usize = 32;

    /// Maximum number of vitals a single session may request
    pub const MAX_REQUESTED_VITALS: usize = 16;
}
