//! Input validation for collector configuration
//!
//! Requested vital lists come from application config and are untrusted;
//! validate them before they reach the engine.

use std::collections::HashSet;

use wv_error::{Result, VitalsError};

use crate::constants::limits;
use crate::data::CollectorConfig;

/// Validates a single vital identifier from configuration
///
/// Returns the trimmed identifier on success. Unknown-but-well-formed
/// identifiers pass here; the engine degrades them at request time.
pub fn validate_vital_name(name: &str) -> Result<String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(VitalsError::invalid_config(
            "vitals",
            "identifier cannot be empty",
        ));
    }

    if trimmed.len() > limits::MAX_VITAL_NAME_LEN {
        return Err(VitalsError::invalid_config(
            "vitals",
            format!(
                "identifier too long ({} chars, max {})",
                trimmed.len(),
                limits::MAX_VITAL_NAME_LEN
            ),
        ));
    }

    Ok(trimmed.to_string())
}

/// Validates a full collector configuration
pub fn validate_config(config: &CollectorConfig) -> Result<()> {
    if config.vitals.is_empty() {
        return Err(VitalsError::invalid_config(
            "vitals",
            "at least one vital must be requested",
        ));
    }

    if config.vitals.len() > limits::MAX_REQUESTED_VITALS {
        return Err(VitalsError::invalid_config(
            "vitals",
            format!(
                "too many vitals requested ({}, max {})",
                config.vitals.len(),
                limits::MAX_REQUESTED_VITALS
            ),
        ));
    }

    let mut seen = HashSet::new();
    for name in &config.vitals {
        let cleaned = validate_vital_name(name)?;
        if !seen.insert(cleaned.clone()) {
            return Err(VitalsError::invalid_config(
                "vitals",
                format!("duplicate identifier {}", cleaned),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_trimmed_names() {
        assert_eq!(validate_vital_name("  CLS ").unwrap(), "CLS");
    }

    #[test]
    fn rejects_empty_names() {
        assert!(validate_vital_name("   ").is_err());
    }

    #[test]
    fn rejects_oversized_names() {
        let long = "X".repeat(limits::MAX_VITAL_NAME_LEN + 1);
        assert!(validate_vital_name(&long).is_err());
    }

    #[test]
    fn rejects_empty_vital_list() {
        let config = CollectorConfig { vitals: Vec::new() };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_duplicate_vitals() {
        let config = CollectorConfig {
            vitals: vec!["CLS".into(), "LCP".into(), "CLS".into()],
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn accepts_default_config() {
        assert!(validate_config(&CollectorConfig::default()).is_ok());
    }
}
