//! One scoring request, end to end.
//!
//! ```text
//! RawInputs ─validate─▶ ValidatedInputs ─build─▶ FeatureVector
//!           ─classify─▶ Probability + class ─categorize─▶ RiskAssessment
//! ```
//!
//! Each stage fails at its own boundary: validation errors surface before any
//! feature is computed, computation errors before the classifier is called,
//! and dependency errors at the inference call. Nothing is retried; every
//! stage is deterministic.

use tracing::{debug, info, info_span};

use crate::config::RiskConfig;
use crate::errors::{Result, RiskError};
use crate::features::{build_features, ClampPolicy, FeatureVector};
use crate::inputs::RawInputs;
use crate::model::RiskClassifier;
use crate::risk::explain::{explain, CONTRIBUTION_NOTE};
use crate::risk::{Probability, RiskAssessment, ThresholdScheme};

/// Stateless scorer around a shared, read-only classifier.
pub struct RiskScorer<C> {
    classifier: C,
    scheme: ThresholdScheme,
    clamp: ClampPolicy,
}

impl<C: RiskClassifier> RiskScorer<C> {
    /// Strict thresholds, no clamping.
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            scheme: ThresholdScheme::default(),
            clamp: ClampPolicy::default(),
        }
    }

    pub fn from_config(classifier: C, config: &RiskConfig) -> Self {
        Self {
            classifier,
            scheme: config.scoring.threshold_scheme,
            clamp: config.features.policy(),
        }
    }

    pub fn with_scheme(mut self, scheme: ThresholdScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_clamp_policy(mut self, clamp: ClampPolicy) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn scheme(&self) -> ThresholdScheme {
        self.scheme
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Validate and derive the classifier input without scoring it.
    pub fn features(&self, raw: &RawInputs) -> Result<FeatureVector> {
        let inputs = raw.validate()?;
        let features = build_features(&inputs, &self.clamp)?;
        debug!(?features, clamp = self.clamp.name(), "Built feature vector");
        Ok(features)
    }

    pub fn score(&self, raw: &RawInputs) -> Result<RiskAssessment> {
        let _span = info_span!("score", model = self.classifier.name()).entered();

        let features = self.features(raw)?;
        let probability = Probability::new(self.classifier.predict_probability(&features)?)?;
        let predicted_class = self.classifier.predict_class(&features)?;
        if predicted_class > 1 {
            return Err(RiskError::dependency(format!(
                "classifier returned class {}, expected 0 or 1",
                predicted_class
            )));
        }
        let tier = self.scheme.categorize(probability);

        info!(
            probability = probability.get(),
            predicted_class,
            tier = %tier,
            scheme = %self.scheme,
            "Scored request"
        );

        Ok(RiskAssessment {
            model: self.classifier.name().to_string(),
            scheme: self.scheme,
            clamp_policy: self.clamp.name(),
            probability,
            predicted_class,
            tier,
            message: tier.message(),
            features,
            explanations: explain(&features),
            note: CONTRIBUTION_NOTE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::ClampBounds;
    use crate::features::Feature;
    use crate::risk::RiskTier;
    use std::cell::Cell;

    struct Fixed {
        p: f64,
        calls: Cell<usize>,
    }

    impl Fixed {
        fn new(p: f64) -> Self {
            Self {
                p,
                calls: Cell::new(0),
            }
        }
    }

    impl RiskClassifier for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn predict_probability(&self, _features: &FeatureVector) -> Result<f64> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.p)
        }
    }

    #[test]
    fn test_scenario_borderline_under_strict() {
        let scorer = RiskScorer::new(Fixed::new(0.55));
        let a = scorer.score(&RawInputs::default()).unwrap();
        assert_eq!(a.tier, RiskTier::Borderline);
        assert_eq!(a.probability.to_string(), "55.0%");
        assert_eq!(a.predicted_class, 1);
        assert_eq!(a.explanations.len(), 5);
        assert_eq!(a.features.get(Feature::InsulinAgeProduct), 2550.0);
    }

    #[test]
    fn test_validation_failure_skips_classifier() {
        let scorer = RiskScorer::new(Fixed::new(0.55));
        let raw = RawInputs {
            age: 5,
            ..RawInputs::default()
        };
        let err = scorer.score(&raw).unwrap_err();
        assert_eq!(err.violated_fields(), vec!["age"]);
        assert_eq!(scorer.classifier().calls.get(), 0);
    }

    /// Probability and class come from different parts of the model.
    struct Tuned {
        p: f64,
        class: u8,
    }

    impl RiskClassifier for Tuned {
        fn name(&self) -> &str {
            "tuned"
        }

        fn predict_probability(&self, _features: &FeatureVector) -> Result<f64> {
            Ok(self.p)
        }

        fn predict_class(&self, _features: &FeatureVector) -> Result<u8> {
            Ok(self.class)
        }
    }

    #[test]
    fn test_predicted_class_comes_from_classifier() {
        let scorer = RiskScorer::new(Tuned { p: 0.55, class: 0 });
        let a = scorer.score(&RawInputs::default()).unwrap();
        assert_eq!(a.predicted_class, 0);
        assert_eq!(a.tier, RiskTier::Borderline);
    }

    #[test]
    fn test_non_binary_class_is_dependency_error() {
        let scorer = RiskScorer::new(Tuned { p: 0.55, class: 2 });
        let err = scorer.score(&RawInputs::default()).unwrap_err();
        assert!(err.is_dependency());
        assert!(err.to_string().contains("class 2"));
    }

    #[test]
    fn test_nan_cap_is_rejected_not_skipped() {
        let bounds = ClampBounds {
            insulin_age_product: f64::NAN,
            ..ClampBounds::default()
        };
        let scorer =
            RiskScorer::new(Fixed::new(0.2)).with_clamp_policy(ClampPolicy::Capped(bounds));
        let err = scorer.features(&RawInputs::default()).unwrap_err();
        assert!(err.is_computation());
        assert!(err.to_string().contains("insulin_age_product"));
        assert_eq!(scorer.classifier().calls.get(), 0);
    }

    #[test]
    fn test_negative_cap_is_rejected() {
        let bounds = ClampBounds {
            bp_skin_product: -1.0,
            ..ClampBounds::default()
        };
        let scorer =
            RiskScorer::new(Fixed::new(0.2)).with_clamp_policy(ClampPolicy::Capped(bounds));
        assert!(scorer.score(&RawInputs::default()).unwrap_err().is_computation());
    }

    #[test]
    fn test_out_of_range_probability_is_dependency_error() {
        let scorer = RiskScorer::new(Fixed::new(1.5));
        assert!(scorer.score(&RawInputs::default()).unwrap_err().is_dependency());
    }

    #[test]
    fn test_classifier_error_propagates() {
        struct Broken;
        impl RiskClassifier for Broken {
            fn name(&self) -> &str {
                "broken"
            }
            fn predict_probability(&self, _: &FeatureVector) -> Result<f64> {
                Err(RiskError::dependency("inference failed"))
            }
        }
        let err = RiskScorer::new(Broken).score(&RawInputs::default()).unwrap_err();
        assert!(err.is_dependency());
    }

    #[test]
    fn test_scheme_changes_tier_not_probability() {
        let strict = RiskScorer::new(Fixed::new(0.75));
        let relaxed = RiskScorer::new(Fixed::new(0.75)).with_scheme(ThresholdScheme::Relaxed);
        let a = strict.score(&RawInputs::default()).unwrap();
        let b = relaxed.score(&RawInputs::default()).unwrap();
        assert_eq!(a.tier, RiskTier::High);
        assert_eq!(b.tier, RiskTier::Borderline);
        assert_eq!(a.probability, b.probability);
    }

    #[test]
    fn test_from_config_applies_clamp_policy() {
        let mut config = RiskConfig::default();
        config.features.clamp = crate::config::ClampMode::Capped;
        let scorer = RiskScorer::from_config(Fixed::new(0.2), &config);
        let a = scorer.score(&RawInputs::default()).unwrap();
        assert_eq!(a.features.get(Feature::InsulinAgeProduct), 1000.0);
        assert_eq!(a.clamp_policy, "capped");
        assert_eq!(a.tier, RiskTier::Low);
    }
}
