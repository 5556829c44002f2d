//! Unified error handling for the web-vitals engine
//!
//! This crate provides a single error type used across all engine components.
//! It uses thiserror for ergonomic error definitions with proper Display and Error trait impls.

/// Result type alias using VitalsError
pub type Result<T> = std::result::Result<T, VitalsError>;

/// Unified error type for all web-vitals operations
#[derive(thiserror::Error, Debug)]
pub enum VitalsError {
    // ============================================================================
    // Registry Errors
    // ============================================================================
    #[error("unknown vital identifier: {0}")]
    UnknownVital(String),

    // ============================================================================
    // Availability and Subscription Errors
    // ============================================================================
    #[error("{vital} not supported by this runtime (missing {capability} observer)")]
    UnsupportedCapability {
        vital: String,
        capability: String,
    },

    #[error("{vital} not supported by this runtime (no sensor adapter registered)")]
    MissingAdapter {
        vital: String,
    },

    // ============================================================================
    // Ingestion Errors
    // ============================================================================
    #[error("malformed sensor report: {reason}")]
    MalformedReport {
        reason: String,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("invalid configuration value for {field}: {reason}")]
    InvalidConfig {
        field: String,
        reason: String,
    },

    #[error("failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Generic(String),
}

impl VitalsError {
    /// Create an unsupported-capability error for a vital
    pub fn unsupported(vital: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::UnsupportedCapability {
            vital: vital.into(),
            capability: capability.into(),
        }
    }

    /// Create a missing-adapter error for a vital
    pub fn missing_adapter(vital: impl Into<String>) -> Self {
        Self::MissingAdapter {
            vital: vital.into(),
        }
    }

    /// Create a malformed-report error from a reason string
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedReport {
            reason: reason.into(),
        }
    }

    /// Create an invalid-config error for a field
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a generic error from a string
    pub fn generic(msg: impl Into<String>) -> Self {
        Self::Generic(msg.into())
    }
}

// Allow converting from String to VitalsError
impl From<String> for VitalsError {
    fn from(s: String) -> Self {
        Self::Generic(s)
    }
}

// Allow converting from &str to VitalsError
impl From<&str> for VitalsError {
    fn from(s: &str) -> Self {
        Self::Generic(s.to_string())
    }
}
