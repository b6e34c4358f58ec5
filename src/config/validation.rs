//! Configuration checks that accumulate every problem before reporting.

use stillwater::{NonEmptyVec, Validation};

use super::{ClampMode, RiskConfig};
use crate::errors::{Result, RiskError};

pub type ConfigValidation = Validation<(), NonEmptyVec<String>>;

/// Validate the whole config, collecting all errors.
pub fn validate_config(config: &RiskConfig) -> ConfigValidation {
    let mut errors = Vec::new();

    if config.features.clamp == ClampMode::Capped {
        for (feature, bound) in config.features.bounds.entries() {
            if !bound.is_finite() || bound <= 0.0 {
                errors.push(format!(
                    "features.bounds.{}: must be a finite positive number (got {})",
                    feature, bound
                ));
            }
        }
    }

    if config.model.path.as_os_str().is_empty() {
        errors.push("model.path: must not be empty".to_string());
    }

    match NonEmptyVec::from_vec(errors) {
        Some(nev) => Validation::Failure(nev),
        None => Validation::Success(()),
    }
}

/// [`validate_config`] as a fail-on-any `Result`.
pub fn validate_config_result(config: &RiskConfig) -> Result<()> {
    match validate_config(config) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(RiskError::config(errors.into_vec().join("; "))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&RiskConfig::default()).is_success());
    }

    #[test]
    fn test_accumulates_all_bound_errors() {
        let mut config = RiskConfig::default();
        config.features.clamp = ClampMode::Capped;
        config.features.bounds.complex_stress = 0.0;
        config.features.bounds.metabolic_stress = f64::INFINITY;
        config.model.path = PathBuf::new();

        match validate_config(&config) {
            Validation::Failure(errors) => {
                let errors = errors.into_vec();
                assert_eq!(errors.len(), 3);
                assert!(errors[0].contains("metabolic_stress"));
                assert!(errors[1].contains("complex_stress"));
                assert!(errors[2].contains("model.path"));
            }
            Validation::Success(_) => panic!("Expected failure"),
        }
    }

    #[test]
    fn test_bounds_ignored_when_unclamped() {
        let mut config = RiskConfig::default();
        config.features.bounds.complex_stress = -1.0;
        assert!(validate_config_result(&config).is_ok());
    }
}
