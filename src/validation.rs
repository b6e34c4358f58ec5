//! Error-accumulating validation.
//!
//! Input checks use stillwater's `Validation` so a request reports ALL of its
//! out-of-domain fields at once instead of failing at the first one. The
//! accumulated violations collapse into a single [`RiskError::Validation`]
//! at the boundary via [`run_validation`].
//!
//! # Example
//!
//! ```rust
//! use diabetes_risk::errors::FieldViolation;
//! use diabetes_risk::validation::{combine_validations, violation, valid, run_validation};
//!
//! let checks = vec![valid(()), violation(FieldViolation::new("bmi", 70.0, 10.0, 60.0))];
//! let result = run_validation(combine_validations(checks));
//! assert!(result.is_err());
//! ```

use stillwater::{NonEmptyVec, Validation};

use crate::errors::{FieldViolation, Result, RiskError};

/// Non-empty list of accumulated violations.
pub type Violations = NonEmptyVec<FieldViolation>;

/// Validation result that accumulates field violations.
pub type InputValidation<T> = Validation<T, Violations>;

/// Create a successful validation result.
pub fn valid<T>(value: T) -> InputValidation<T> {
    Validation::Success(value)
}

/// Create a failed validation result with a single violation.
pub fn violation<T>(v: FieldViolation) -> InputValidation<T> {
    Validation::Failure(NonEmptyVec::new(v, Vec::new()))
}

/// Check that `value` lies in the closed range `[min, max]`.
///
/// NaN and infinities are always rejected.
pub fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> InputValidation<f64> {
    if value.is_finite() && value >= min && value <= max {
        valid(value)
    } else {
        violation(FieldViolation::new(field, value, min, max))
    }
}

/// Combine multiple validations, accumulating all violations.
pub fn combine_validations<T>(validations: Vec<InputValidation<T>>) -> InputValidation<Vec<T>> {
    let mut successes = Vec::new();
    let mut failures: Vec<FieldViolation> = Vec::new();

    for v in validations {
        match v {
            Validation::Success(value) => successes.push(value),
            Validation::Failure(errors) => failures.extend(errors),
        }
    }

    match NonEmptyVec::from_vec(failures) {
        Some(nev) => Validation::Failure(nev),
        None => Validation::Success(successes),
    }
}

/// Collapse a validation into the crate `Result`.
pub fn run_validation<T>(validation: InputValidation<T>) -> Result<T> {
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Failure(errors) => Err(RiskError::validation(errors.into_vec())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range_inclusive_bounds() {
        assert!(check_range("age", 10.0, 10.0, 100.0).is_success());
        assert!(check_range("age", 100.0, 10.0, 100.0).is_success());
        assert!(check_range("age", 9.999, 10.0, 100.0).is_failure());
        assert!(check_range("age", 100.001, 10.0, 100.0).is_failure());
    }

    #[test]
    fn test_check_range_rejects_non_finite() {
        assert!(check_range("bmi", f64::NAN, 10.0, 60.0).is_failure());
        assert!(check_range("bmi", f64::INFINITY, 10.0, 60.0).is_failure());
    }

    #[test]
    fn test_combine_validations_all_success() {
        let result = combine_validations(vec![valid(1), valid(2), valid(3)]);
        match result {
            Validation::Success(values) => assert_eq!(values, vec![1, 2, 3]),
            Validation::Failure(_) => panic!("Expected success"),
        }
    }

    #[test]
    fn test_combine_validations_accumulates_violations() {
        let result: InputValidation<Vec<f64>> = combine_validations(vec![
            check_range("age", 5.0, 10.0, 100.0),
            check_range("bmi", 22.0, 10.0, 60.0),
            check_range("insulin", 0.0, 1.0, 500.0),
        ]);
        let err = run_validation(result).unwrap_err();
        assert_eq!(err.violated_fields(), vec!["age", "insulin"]);
    }

    #[test]
    fn test_run_validation_success() {
        assert_eq!(run_validation(valid(42)).unwrap(), 42);
    }
}
