//! Web-Vitals Core Library
//!
//! Collects browser performance signals ("web vitals") that arrive
//! asynchronously from independent underlying sensors, classifies each
//! against domain thresholds, and exposes a stable, ordered read-model
//! suitable for live display.
//!
//! # Features
//!
//! - **Threshold Registry**: static table of thresholds and display metadata
//!   for the closed vital set (CLS, FCP, FID, LCP, TTFB)
//! - **Availability Probing**: synchronous capability checks before any
//!   subscription attempt
//! - **First-Value-Wins Ingestion**: deduplicating classification of
//!   asynchronous sensor reports
//! - **Ordered Projection**: deterministic read-model in the caller's
//!   requested order, with placeholders for pending and unsupported vitals
//!
//! # Module Structure
//!
//! - `data/` - Data types, configuration, validation
//! - `engine/` - Collection session and rating logic
//! - `registry` / `probe` / `adapter` - Threshold table, capability probing,
//!   sensor subscription plumbing
//!
//! # Example
//!
//! ```
//! use wv_core::{Collector, RawReport, SensorAdapters, StaticCapabilities};
//!
//! // Subscription functions are supplied by the measurement library; this
//! // one reports synchronously for the sake of the example.
//! let mut adapters = SensorAdapters::new();
//! adapters.register("CLS", |sink| {
//!     sink(RawReport { id: "CLS".into(), value: 0.05 });
//! });
//!
//! let caps = StaticCapabilities::full();
//! let collector = Collector::new(Box::new(caps), adapters);
//! collector.request(["CLS", "LCP"]);
//!
//! let records = collector.project(["CLS", "LCP"]);
//! assert_eq!(records[0].rating.map(|r| r.as_str()), Some("good"));
//! assert!(records[1].loading);
//! ```

// Grouped modules
pub mod data;
pub mod engine;

// Standalone modules
pub mod adapter;
pub mod constants;
pub mod display;
pub mod probe;
pub mod registry;

mod project;

// Re-export primary types from data/
pub use data::{
    CollectorConfig, ProjectedRecord, Rating, RawReport, VitalDefinition,
    validate_config, validate_vital_name,
};

// Re-export engine types
pub use engine::{classify, Collector};

// Re-export adapter and probe surfaces
pub use adapter::{ReportSink, SensorAdapters};
pub use probe::{CapabilitySurface, StaticCapabilities};

// Re-export error types
pub use wv_error::{Result, VitalsError};
