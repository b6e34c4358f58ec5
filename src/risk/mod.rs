//! Risk categorization.
//!
//! Turns a classifier probability into one of three tiers. Two threshold
//! schemes exist and they disagree (p = 0.75 is HIGH under `Strict`,
//! BORDERLINE under `Relaxed`); exactly one is active per scorer and it is
//! reported with every assessment.
//!
//! | Scheme  | LOW        | BORDERLINE       | HIGH     |
//! |---------|------------|------------------|----------|
//! | Strict  | p ≤ 0.4    | 0.4 < p ≤ 0.7    | p > 0.7  |
//! | Relaxed | p < 0.7    | 0.7 ≤ p < 0.9    | p ≥ 0.9  |

pub mod explain;

pub use explain::{explain, Explanation, EXPLAINED_FEATURES};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{Result, RiskError};
use crate::features::FeatureVector;

/// Probability of the high-risk class, guaranteed to be in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Probability(f64);

impl Probability {
    /// Validate a classifier output. Anything outside [0, 1] means the
    /// classifier misbehaved, so this is a dependency error.
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RiskError::dependency(format!(
                "classifier returned probability {} outside [0, 1]",
                value
            )))
        }
    }

    pub fn get(&self) -> f64 {
        self.0
    }

    pub fn percentage(&self) -> f64 {
        self.0 * 100.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.percentage())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Borderline,
    High,
}

/// Presentation severity of a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [Self::Low, Self::Borderline, Self::High];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Borderline => "Borderline Risk",
            Self::High => "High Risk",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Low => "Your profile does not show strong indicators of diabetes at this stage.",
            Self::Borderline => {
                "Some mild signs of imbalance. Consider monitoring your lifestyle and checking in with a healthcare provider."
            }
            Self::High => {
                "Your profile shows a significant likelihood of early metabolic changes that may lead to diabetes."
            }
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::Low => Severity::Success,
            Self::Borderline => Severity::Warning,
            Self::High => Severity::Error,
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "LOW",
            Self::Borderline => "BORDERLINE",
            Self::High => "HIGH",
        };
        f.write_str(s)
    }
}

/// Probability thresholds separating the tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdScheme {
    /// HIGH above 0.7, BORDERLINE above 0.4.
    #[default]
    Strict,
    /// HIGH from 0.9, BORDERLINE from 0.7.
    Relaxed,
}

/// One tier's probability interval, for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierBand {
    pub tier: RiskTier,
    pub lower: f64,
    pub lower_inclusive: bool,
    pub upper: f64,
    pub upper_inclusive: bool,
}

impl fmt::Display for TierBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lo = if self.lower_inclusive { "≤" } else { "<" };
        let hi = if self.upper_inclusive { "≤" } else { "<" };
        write!(f, "{:.2} {} p {} {:.2}", self.lower, lo, hi, self.upper)
    }
}

impl ThresholdScheme {
    pub fn categorize(&self, probability: Probability) -> RiskTier {
        let p = probability.get();
        match self {
            Self::Strict => {
                if p > 0.7 {
                    RiskTier::High
                } else if p > 0.4 {
                    RiskTier::Borderline
                } else {
                    RiskTier::Low
                }
            }
            Self::Relaxed => {
                if p >= 0.9 {
                    RiskTier::High
                } else if p >= 0.7 {
                    RiskTier::Borderline
                } else {
                    RiskTier::Low
                }
            }
        }
    }

    /// Tier intervals in ascending order; together they partition [0, 1].
    pub fn bands(&self) -> [TierBand; 3] {
        let (borderline_from, high_from, lower_edges_inclusive) = match self {
            Self::Strict => (0.4, 0.7, false),
            Self::Relaxed => (0.7, 0.9, true),
        };
        [
            TierBand {
                tier: RiskTier::Low,
                lower: 0.0,
                lower_inclusive: true,
                upper: borderline_from,
                upper_inclusive: !lower_edges_inclusive,
            },
            TierBand {
                tier: RiskTier::Borderline,
                lower: borderline_from,
                lower_inclusive: lower_edges_inclusive,
                upper: high_from,
                upper_inclusive: !lower_edges_inclusive,
            },
            TierBand {
                tier: RiskTier::High,
                lower: high_from,
                lower_inclusive: lower_edges_inclusive,
                upper: 1.0,
                upper_inclusive: true,
            },
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Relaxed => "relaxed",
        }
    }
}

impl fmt::Display for ThresholdScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The rendered outcome of one scoring request.
#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub model: String,
    pub scheme: ThresholdScheme,
    pub clamp_policy: &'static str,
    pub probability: Probability,
    pub predicted_class: u8,
    pub tier: RiskTier,
    pub message: &'static str,
    pub features: FeatureVector,
    pub explanations: Vec<Explanation>,
    pub note: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(v: f64) -> Probability {
        Probability::new(v).unwrap()
    }

    #[test]
    fn test_strict_scheme_tiers() {
        let s = ThresholdScheme::Strict;
        assert_eq!(s.categorize(p(0.0)), RiskTier::Low);
        assert_eq!(s.categorize(p(0.4)), RiskTier::Low);
        assert_eq!(s.categorize(p(0.55)), RiskTier::Borderline);
        assert_eq!(s.categorize(p(0.7)), RiskTier::Borderline);
        assert_eq!(s.categorize(p(0.75)), RiskTier::High);
        assert_eq!(s.categorize(p(1.0)), RiskTier::High);
    }

    #[test]
    fn test_relaxed_scheme_tiers() {
        let s = ThresholdScheme::Relaxed;
        assert_eq!(s.categorize(p(0.55)), RiskTier::Low);
        assert_eq!(s.categorize(p(0.7)), RiskTier::Borderline);
        assert_eq!(s.categorize(p(0.75)), RiskTier::Borderline);
        assert_eq!(s.categorize(p(0.9)), RiskTier::High);
    }

    #[test]
    fn test_schemes_diverge_at_075() {
        assert_ne!(
            ThresholdScheme::Strict.categorize(p(0.75)),
            ThresholdScheme::Relaxed.categorize(p(0.75))
        );
    }

    #[test]
    fn test_probability_rejects_out_of_range() {
        assert!(Probability::new(-0.01).unwrap_err().is_dependency());
        assert!(Probability::new(1.01).is_err());
        assert!(Probability::new(f64::NAN).is_err());
    }

    #[test]
    fn test_probability_display() {
        assert_eq!(p(0.55).to_string(), "55.0%");
        assert_eq!(p(0.1234).to_string(), "12.3%");
    }

    #[test]
    fn test_strict_bands_render() {
        let bands = ThresholdScheme::Strict.bands();
        assert_eq!(bands[0].to_string(), "0.00 ≤ p ≤ 0.40");
        assert_eq!(bands[1].to_string(), "0.40 < p ≤ 0.70");
        assert_eq!(bands[2].to_string(), "0.70 < p ≤ 1.00");
    }

    #[test]
    fn test_relaxed_bands_render() {
        let bands = ThresholdScheme::Relaxed.bands();
        assert_eq!(bands[0].to_string(), "0.00 ≤ p < 0.70");
        assert_eq!(bands[1].to_string(), "0.70 ≤ p < 0.90");
        assert_eq!(bands[2].to_string(), "0.90 ≤ p ≤ 1.00");
    }

    #[test]
    fn test_tier_severity() {
        assert_eq!(RiskTier::High.severity(), Severity::Error);
        assert_eq!(RiskTier::Borderline.severity(), Severity::Warning);
        assert_eq!(RiskTier::Low.severity(), Severity::Success);
    }

    fn band_contains(band: &TierBand, v: f64) -> bool {
        let above = if band.lower_inclusive { v >= band.lower } else { v > band.lower };
        let below = if band.upper_inclusive { v <= band.upper } else { v < band.upper };
        above && below
    }

    proptest! {
        #[test]
        fn every_probability_falls_in_exactly_one_band(v in 0.0..=1.0f64) {
            for scheme in [ThresholdScheme::Strict, ThresholdScheme::Relaxed] {
                let bands = scheme.bands();
                let hits: Vec<_> = bands.iter().filter(|b| band_contains(b, v)).collect();
                prop_assert_eq!(hits.len(), 1);
                prop_assert_eq!(hits[0].tier, scheme.categorize(p(v)));
            }
        }
    }

    #[test]
    fn test_band_edges_agree_with_categorize() {
        for scheme in [ThresholdScheme::Strict, ThresholdScheme::Relaxed] {
            for v in [0.0, 0.4, 0.7, 0.9, 1.0] {
                let tier = scheme.categorize(p(v));
                let band = scheme.bands().into_iter().find(|b| band_contains(b, v)).unwrap();
                assert_eq!(band.tier, tier, "scheme {scheme} at {v}");
            }
        }
    }
}
