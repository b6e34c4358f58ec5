//! Upper bounds for derived product/stress features.
//!
//! Unbounded products can land far outside the range the classifier was
//! trained on (e.g. a very low skinfold inflates complex stress). A capped
//! policy applies one fixed, named bound set to the four affected features.
//! Raw inputs and the two ratio features are never capped.

use serde::{Deserialize, Serialize};

use super::Feature;
use crate::errors::{Result, RiskError};

/// Named caps for the product/stress features.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampBounds {
    #[serde(default = "default_bp_skin_product")]
    pub bp_skin_product: f64,

    #[serde(default = "default_metabolic_stress")]
    pub metabolic_stress: f64,

    #[serde(default = "default_insulin_age_product")]
    pub insulin_age_product: f64,

    #[serde(default = "default_complex_stress")]
    pub complex_stress: f64,
}

impl Default for ClampBounds {
    fn default() -> Self {
        Self {
            bp_skin_product: default_bp_skin_product(),
            metabolic_stress: default_metabolic_stress(),
            insulin_age_product: default_insulin_age_product(),
            complex_stress: default_complex_stress(),
        }
    }
}

fn default_bp_skin_product() -> f64 {
    3000.0
}
fn default_metabolic_stress() -> f64 {
    20.0
}
fn default_insulin_age_product() -> f64 {
    1000.0
}
fn default_complex_stress() -> f64 {
    30.0
}

impl ClampBounds {
    /// Cap for `feature`, if it is one of the capped features.
    pub fn cap_for(&self, feature: Feature) -> Option<f64> {
        match feature {
            Feature::BpSkinProduct => Some(self.bp_skin_product),
            Feature::MetabolicStress => Some(self.metabolic_stress),
            Feature::InsulinAgeProduct => Some(self.insulin_age_product),
            Feature::ComplexStress => Some(self.complex_stress),
            _ => None,
        }
    }

    /// Every bound paired with its feature.
    pub fn entries(&self) -> [(Feature, f64); 4] {
        [
            (Feature::BpSkinProduct, self.bp_skin_product),
            (Feature::MetabolicStress, self.metabolic_stress),
            (Feature::InsulinAgeProduct, self.insulin_age_product),
            (Feature::ComplexStress, self.complex_stress),
        ]
    }
}

/// Whether derived features are capped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ClampPolicy {
    #[default]
    Unclamped,
    Capped(ClampBounds),
}

impl ClampPolicy {
    pub fn capped() -> Self {
        Self::Capped(ClampBounds::default())
    }

    pub fn cap(&self, feature: Feature) -> Option<f64> {
        match self {
            Self::Unclamped => None,
            Self::Capped(bounds) => bounds.cap_for(feature),
        }
    }

    /// Apply the cap for `feature`; values at or below the cap pass through unchanged.
    ///
    /// A cap that is not a finite positive number is a computation error.
    pub fn apply(&self, feature: Feature, value: f64) -> Result<f64> {
        match self.cap(feature) {
            Some(cap) if !cap.is_finite() || cap <= 0.0 => Err(RiskError::computation(
                feature.name(),
                format!("cap must be a finite positive number (got {})", cap),
            )),
            Some(cap) if value > cap => Ok(cap),
            _ => Ok(value),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unclamped => "none",
            Self::Capped(_) => "capped",
        }
    }
}
