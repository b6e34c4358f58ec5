//! Error types for risk scoring.
//!
//! Errors are categorized by the boundary that detects them:
//!
//! - `Validation`: raw inputs outside their declared domain, detected before any
//!   feature is computed. Carries every violation of the request, not just the first.
//! - `UnknownCategory`: a qualitative tag that does not map to a known value.
//! - `Computation`: a derived feature cannot be computed, or its cap is not a
//!   finite positive number.
//! - `Dependency`: the classifier could not be loaded or its inference failed.
//! - `Config`: configuration file problems.
//!
//! # Example
//!
//! ```rust
//! use diabetes_risk::errors::{FieldViolation, RiskError};
//!
//! let err = RiskError::validation(vec![FieldViolation::new("age", 5.0, 10.0, 100.0)]);
//! assert!(err.to_string().contains("age"));
//! assert!(err.is_validation());
//! ```

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single out-of-domain input field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl FieldViolation {
    pub fn new(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self {
            field,
            value,
            min,
            max,
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} must be in range [{}, {}] (got {})",
            self.field, self.min, self.max, self.value
        )
    }
}

/// Main error type for scoring operations
#[derive(Debug, Error)]
pub enum RiskError {
    /// One or more raw inputs are outside their declared domain
    #[error("Validation error: {}", join_violations(.violations))]
    Validation { violations: Vec<FieldViolation> },

    /// Qualitative tag with no mapping
    #[error("Unknown {kind} category: '{tag}' (expected one of: {expected})")]
    UnknownCategory {
        kind: &'static str,
        tag: String,
        expected: String,
    },

    /// Derived feature could not be computed to a finite value
    #[error("Computation error in {feature}: {reason}")]
    Computation {
        feature: &'static str,
        reason: String,
    },

    /// Classifier load or inference failure
    #[error("Dependency error: {message}")]
    Dependency { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl RiskError {
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        Self::Validation { violations }
    }

    pub fn unknown_category(
        kind: &'static str,
        tag: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        Self::UnknownCategory {
            kind,
            tag: tag.into(),
            expected: expected.join(", "),
        }
    }

    pub fn computation(feature: &'static str, reason: impl Into<String>) -> Self {
        Self::Computation {
            feature,
            reason: reason.into(),
        }
    }

    pub fn dependency(message: impl Into<String>) -> Self {
        Self::Dependency {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_computation(&self) -> bool {
        matches!(self, Self::Computation { .. })
    }

    pub fn is_dependency(&self) -> bool {
        matches!(self, Self::Dependency { .. })
    }

    /// Field names of all violations, empty for non-validation errors.
    pub fn violated_fields(&self) -> Vec<&'static str> {
        match self {
            Self::Validation { violations } => violations.iter().map(|v| v.field).collect(),
            _ => Vec::new(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, RiskError>;
