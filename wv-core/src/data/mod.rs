//! Data types, configuration, and validation

mod config;
mod types;
mod validation;

pub use config::CollectorConfig;
pub use types::{ProjectedRecord, Rating, RawReport, VitalDefinition};
pub use validation::{validate_config, validate_vital_name};
