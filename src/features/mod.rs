//! Feature engineering.
//!
//! Maps validated inputs to the 13-column vector the classifier was trained
//! on. Column order is part of the model contract and is fixed by
//! [`Feature::ORDER`].
//!
//! | Feature               | Formula                          |
//! |-----------------------|----------------------------------|
//! | insulin_glucose_ratio | insulin / glucose reference      |
//! | bmi_age_ratio         | bmi / age                        |
//! | bp_skin_product       | blood pressure × skinfold        |
//! | metabolic_stress      | bmi × insulin_glucose_ratio      |
//! | insulin_age_product   | insulin × age                    |
//! | complex_stress        | (bmi × insulin) / (skinfold + 1) |
//!
//! The last four may be capped by a [`ClampPolicy`].

pub mod clamp;

pub use clamp::{ClampBounds, ClampPolicy};

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::fmt;

use crate::errors::{Result, RiskError};
use crate::inputs::ValidatedInputs;

pub const FEATURE_COUNT: usize = 13;

/// A named classifier input column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Pregnancies,
    BloodPressure,
    Skinfold,
    Insulin,
    Bmi,
    Pedigree,
    Age,
    InsulinGlucoseRatio,
    BmiAgeRatio,
    BpSkinProduct,
    MetabolicStress,
    InsulinAgeProduct,
    ComplexStress,
}

impl Feature {
    /// Training-time column order.
    pub const ORDER: [Feature; FEATURE_COUNT] = [
        Self::Pregnancies,
        Self::BloodPressure,
        Self::Skinfold,
        Self::Insulin,
        Self::Bmi,
        Self::Pedigree,
        Self::Age,
        Self::InsulinGlucoseRatio,
        Self::BmiAgeRatio,
        Self::BpSkinProduct,
        Self::MetabolicStress,
        Self::InsulinAgeProduct,
        Self::ComplexStress,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Pregnancies => "pregnancies",
            Self::BloodPressure => "blood_pressure",
            Self::Skinfold => "skinfold",
            Self::Insulin => "insulin",
            Self::Bmi => "bmi",
            Self::Pedigree => "pedigree",
            Self::Age => "age",
            Self::InsulinGlucoseRatio => "insulin_glucose_ratio",
            Self::BmiAgeRatio => "bmi_age_ratio",
            Self::BpSkinProduct => "bp_skin_product",
            Self::MetabolicStress => "metabolic_stress",
            Self::InsulinAgeProduct => "insulin_age_product",
            Self::ComplexStress => "complex_stress",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Column names in training order.
pub fn feature_names() -> [&'static str; FEATURE_COUNT] {
    Feature::ORDER.map(Feature::name)
}

/// Ordered classifier input.
///
/// Every value is finite; [`build_features`] refuses to produce anything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Wrap values given in [`Feature::ORDER`], rejecting non-finite entries.
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Result<Self> {
        if let Some(feature) = Feature::ORDER
            .into_iter()
            .find(|f| !values[f.index()].is_finite())
        {
            return Err(RiskError::computation(
                feature.name(),
                format!("non-finite value {}", values[feature.index()]),
            ));
        }
        Ok(Self { values })
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }

    pub fn values(&self) -> [f64; FEATURE_COUNT] {
        self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ORDER.into_iter().map(|f| (f, self.get(f)))
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (feature, value) in self.iter() {
            map.serialize_entry(feature.name(), &value)?;
        }
        map.end()
    }
}

/// Divide, failing instead of producing infinities or NaN.
pub(crate) fn checked_div(feature: Feature, numerator: f64, denominator: f64) -> Result<f64> {
    if !denominator.is_finite() || denominator <= 0.0 {
        return Err(RiskError::computation(
            feature.name(),
            format!("non-positive denominator {}", denominator),
        ));
    }
    let value = numerator / denominator;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RiskError::computation(
            feature.name(),
            format!("{} / {} is not finite", numerator, denominator),
        ))
    }
}

/// Build the classifier input for one request.
pub fn build_features(inputs: &ValidatedInputs, policy: &ClampPolicy) -> Result<FeatureVector> {
    let age = inputs.age();
    let bmi = inputs.bmi();
    let insulin = inputs.insulin();
    let bp = inputs.blood_pressure();
    let skinfold = inputs.skinfold();

    let insulin_glucose_ratio = checked_div(
        Feature::InsulinGlucoseRatio,
        insulin,
        inputs.glucose_reference(),
    )?;
    let bmi_age_ratio = checked_div(Feature::BmiAgeRatio, bmi, age)?;
    let bp_skin_product = policy.apply(Feature::BpSkinProduct, bp * skinfold)?;
    let metabolic_stress = policy.apply(Feature::MetabolicStress, bmi * insulin_glucose_ratio)?;
    let insulin_age_product = policy.apply(Feature::InsulinAgeProduct, insulin * age)?;
    let complex_stress = policy.apply(
        Feature::ComplexStress,
        checked_div(Feature::ComplexStress, bmi * insulin, skinfold + 1.0)?,
    )?;

    FeatureVector::from_values([
        inputs.pregnancies(),
        bp,
        skinfold,
        insulin,
        bmi,
        inputs.pedigree(),
        age,
        insulin_glucose_ratio,
        bmi_age_ratio,
        bp_skin_product,
        metabolic_stress,
        insulin_age_product,
        complex_stress,
    ])
}
