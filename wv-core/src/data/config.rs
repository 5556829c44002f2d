//! Collector configuration
//!
//! The requested vital list usually comes from application configuration;
//! this type carries it with sane defaults and a validating JSON loader.

use serde::{Deserialize, Serialize};

use wv_error::Result;

use crate::constants::vitals;
use crate::data::validation::validate_config;

/// Which vitals a collection session should gather, in display order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorConfig {
    #[serde(default = "default_vitals")]
    pub vitals: Vec<String>,
}

fn default_vitals() -> Vec<String> {
    vitals::DEFAULT_SET.iter().map(|v| v.to_string()).collect()
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            vitals: default_vitals(),
        }
    }
}

impl CollectorConfig {
    /// Parse and validate a configuration from JSON
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        validate_config(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_requests_full_set() {
        let config = CollectorConfig::default();
        assert_eq!(config.vitals, ["CLS", "FCP", "FID", "LCP", "TTFB"]);
    }

    #[test]
    fn missing_vitals_field_falls_back_to_default() {
        let config = CollectorConfig::from_json("{}").unwrap();
        assert_eq!(config.vitals.len(), 5);
    }

    #[test]
    fn explicit_vitals_preserve_order() {
        let config = CollectorConfig::from_json(r#"{"vitals": ["LCP", "CLS"]}"#).unwrap();
        assert_eq!(config.vitals, ["LCP", "CLS"]);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(CollectorConfig::from_json("{not json").is_err());
    }
}
