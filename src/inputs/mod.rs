//! User-supplied health metrics and their validation.
//!
//! Raw inputs are validated once at the boundary ("parse, don't validate"):
//! [`RawInputs::validate`] either returns a [`ValidatedInputs`] whose values are
//! all inside their declared domains, or a [`RiskError::Validation`] naming
//! every offending field with its valid range. Feature construction only
//! accepts `ValidatedInputs`, so out-of-domain values cannot reach it.
//!
//! [`RiskError::Validation`]: crate::errors::RiskError::Validation

pub mod categories;

pub use categories::{FamilyHistory, GlucoseCategory, SkinfoldInput, DEFAULT_SKINFOLD};

use serde::{Deserialize, Serialize};
use stillwater::Validation;

use crate::errors::Result;
use crate::validation::{check_range, combine_validations, run_validation, valid, InputValidation};

/// Closed range `[min, max]` for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

impl Domain {
    const fn new(field: &'static str, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    pub fn check(&self, value: f64) -> InputValidation<f64> {
        check_range(self.field, value, self.min, self.max)
    }
}

pub const AGE: Domain = Domain::new("age", 10.0, 100.0);
pub const BMI: Domain = Domain::new("bmi", 10.0, 60.0);
pub const INSULIN: Domain = Domain::new("insulin", 1.0, 500.0);
pub const BLOOD_PRESSURE: Domain = Domain::new("blood_pressure", 40.0, 180.0);
pub const SKINFOLD: Domain = Domain::new("skinfold", 1.0, 100.0);
pub const PREGNANCIES: Domain = Domain::new("pregnancies", 0.0, 20.0);

/// All numeric input domains, in form order. Validation walks this table.
pub const DOMAINS: [Domain; 6] = [AGE, BMI, INSULIN, BLOOD_PRESSURE, SKINFOLD, PREGNANCIES];

/// One scoring request's raw inputs, as collected from the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInputs {
    pub age: i32,
    pub bmi: f64,
    pub insulin: f64,
    pub blood_pressure: f64,
    #[serde(default)]
    pub skinfold: SkinfoldInput,
    pub pregnancies: i32,
    #[serde(default)]
    pub family_history: FamilyHistory,
    #[serde(default)]
    pub glucose: GlucoseCategory,
}

impl Default for RawInputs {
    fn default() -> Self {
        Self {
            age: 30,
            bmi: 22.0,
            insulin: 85.0,
            blood_pressure: 70.0,
            skinfold: SkinfoldInput::Unknown,
            pregnancies: 2,
            family_history: FamilyHistory::None,
            glucose: GlucoseCategory::Unknown,
        }
    }
}

impl RawInputs {
    /// Validate every field, accumulating all violations.
    pub fn validate(&self) -> Result<ValidatedInputs> {
        let values = [
            Some(f64::from(self.age)),
            Some(self.bmi),
            Some(self.insulin),
            Some(self.blood_pressure),
            match self.skinfold {
                SkinfoldInput::Measured(v) => Some(v),
                SkinfoldInput::Unknown => None,
            },
            Some(f64::from(self.pregnancies)),
        ];

        let checks = DOMAINS
            .iter()
            .zip(values)
            .filter_map(|(domain, value)| value.map(|v| domain.check(v)))
            .collect();

        let validated = match combine_validations(checks) {
            Validation::Success(_) => valid(ValidatedInputs {
                age: self.age as u32,
                bmi: self.bmi,
                insulin: self.insulin,
                blood_pressure: self.blood_pressure,
                skinfold: self.skinfold.resolve(),
                pregnancies: self.pregnancies as u32,
                family_history: self.family_history,
                glucose: self.glucose,
            }),
            Validation::Failure(errors) => Validation::Failure(errors),
        };

        run_validation(validated)
    }
}

/// Inputs whose values are guaranteed to be inside their domains.
///
/// Only constructible through [`RawInputs::validate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedInputs {
    age: u32,
    bmi: f64,
    insulin: f64,
    blood_pressure: f64,
    skinfold: f64,
    pregnancies: u32,
    family_history: FamilyHistory,
    glucose: GlucoseCategory,
}

impl ValidatedInputs {
    pub fn age(&self) -> f64 {
        f64::from(self.age)
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn insulin(&self) -> f64 {
        self.insulin
    }

    pub fn blood_pressure(&self) -> f64 {
        self.blood_pressure
    }

    /// Skinfold in mm, with the default already substituted when unknown.
    pub fn skinfold(&self) -> f64 {
        self.skinfold
    }

    pub fn pregnancies(&self) -> f64 {
        f64::from(self.pregnancies)
    }

    pub fn pedigree(&self) -> f64 {
        self.family_history.pedigree()
    }

    pub fn glucose_reference(&self) -> f64 {
        self.glucose.reference()
    }

}
