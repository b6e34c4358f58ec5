//! "Why this result?" breakdown.

use serde::Serialize;

use crate::features::{Feature, FeatureVector};

/// Features shown to the user, in display order.
pub const EXPLAINED_FEATURES: [Feature; 5] = [
    Feature::InsulinAgeProduct,
    Feature::ComplexStress,
    Feature::MetabolicStress,
    Feature::BpSkinProduct,
    Feature::BmiAgeRatio,
];

/// Closing remark shown under the breakdown.
pub const CONTRIBUTION_NOTE: &str = "These features were the strongest contributors to this prediction. They reflect how your body may be reacting to insulin and storing fat, even before glucose levels rise.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub feature: Feature,
    pub label: &'static str,
    pub value: f64,
    /// `value` to two decimals.
    pub display: String,
    pub rationale: &'static str,
}

fn describe(feature: Feature) -> (&'static str, &'static str) {
    match feature {
        Feature::InsulinAgeProduct => ("Insulin × Age", "higher = more risk"),
        Feature::ComplexStress => ("Complex Stress", "BMI × Insulin / Skinfold"),
        Feature::MetabolicStress => ("Metabolic Stress", "BMI × Insulin/Glucose ratio"),
        Feature::BpSkinProduct => ("Blood Pressure × Skinfold", "linked to fat storage"),
        Feature::BmiAgeRatio => ("BMI / Age", "age-adjusted fat ratio"),
        other => (other.name(), ""),
    }
}

pub fn explain(features: &FeatureVector) -> Vec<Explanation> {
    EXPLAINED_FEATURES
        .iter()
        .map(|&feature| {
            let (label, rationale) = describe(feature);
            let value = features.get(feature);
            Explanation {
                feature,
                label,
                value,
                display: format!("{:.2}", value),
                rationale,
            }
        })
        .collect()
}
