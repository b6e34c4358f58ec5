use diabetes_risk::config::ClampMode;
use diabetes_risk::{
    Feature, FamilyHistory, GlucoseCategory, LogisticModel, RawInputs, RiskClassifier,
    RiskConfig, RiskScorer, RiskTier, SkinfoldInput, ThresholdScheme,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use std::sync::Arc;

fn sample_model() -> LogisticModel {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("models/sample-logistic.json");
    LogisticModel::load(path).unwrap()
}

fn borderline_profile() -> RawInputs {
    RawInputs {
        age: 40,
        bmi: 30.0,
        insulin: 120.0,
        blood_pressure: 80.0,
        skinfold: SkinfoldInput::Unknown,
        pregnancies: 3,
        family_history: FamilyHistory::OneRelative,
        glucose: GlucoseCategory::Elevated,
    }
}

fn high_profile() -> RawInputs {
    RawInputs {
        age: 55,
        bmi: 38.0,
        insulin: 260.0,
        blood_pressure: 95.0,
        skinfold: SkinfoldInput::Measured(35.0),
        pregnancies: 4,
        family_history: FamilyHistory::Strong,
        glucose: GlucoseCategory::High,
    }
}

#[test]
fn test_sample_model_scores_default_profile_low() {
    let scorer = RiskScorer::new(sample_model());
    let assessment = scorer.score(&RawInputs::default()).unwrap();

    assert!((assessment.probability.get() - 0.2188).abs() < 1e-3);
    assert_eq!(assessment.tier, RiskTier::Low);
    assert_eq!(assessment.predicted_class, 0);
    assert_eq!(assessment.model, "early-diabetes-logistic-sample");
}

#[test]
fn test_same_probability_different_tier_per_scheme() {
    let model = Arc::new(sample_model());
    let strict = RiskScorer::new(Arc::clone(&model));
    let relaxed = RiskScorer::new(Arc::clone(&model)).with_scheme(ThresholdScheme::Relaxed);

    let a = strict.score(&borderline_profile()).unwrap();
    let b = relaxed.score(&borderline_profile()).unwrap();

    assert!((a.probability.get() - 0.6134).abs() < 1e-3);
    assert_eq!(a.probability, b.probability);
    assert_eq!(a.tier, RiskTier::Borderline);
    assert_eq!(b.tier, RiskTier::Low);
}

#[test]
fn test_high_profile_is_high_under_both_schemes() {
    let model = sample_model();
    for scheme in [ThresholdScheme::Strict, ThresholdScheme::Relaxed] {
        let scorer = RiskScorer::new(&model).with_scheme(scheme);
        let assessment = scorer.score(&high_profile()).unwrap();
        assert_eq!(assessment.tier, RiskTier::High, "scheme {scheme}");
        assert_eq!(assessment.predicted_class, 1);
    }
}

#[test]
fn test_explanations_follow_feature_vector() {
    let scorer = RiskScorer::new(sample_model());
    let assessment = scorer.score(&high_profile()).unwrap();

    let labels: Vec<&str> = assessment.explanations.iter().map(|e| e.label).collect();
    assert_eq!(
        labels,
        vec![
            "Insulin × Age",
            "Complex Stress",
            "Metabolic Stress",
            "Blood Pressure × Skinfold",
            "BMI / Age",
        ]
    );
    for e in &assessment.explanations {
        assert_eq!(e.value, assessment.features.get(e.feature));
        assert_eq!(e.display, format!("{:.2}", e.value));
    }
    assert_eq!(assessment.explanations[0].display, "14300.00");
}

#[test]
fn test_capped_config_bounds_outlier_features() {
    let mut config = RiskConfig::default();
    config.features.clamp = ClampMode::Capped;
    let scorer = RiskScorer::from_config(sample_model(), &config);

    let features = scorer.features(&high_profile()).unwrap();
    assert_eq!(features.get(Feature::InsulinAgeProduct), 1000.0);
    assert_eq!(features.get(Feature::ComplexStress), 30.0);
    assert_eq!(features.get(Feature::MetabolicStress), 20.0);
    assert_eq!(features.get(Feature::BpSkinProduct), 3000.0);
    assert_eq!(features.get(Feature::Insulin), 260.0);
}

#[test]
fn test_invalid_inputs_report_every_field() {
    let scorer = RiskScorer::new(sample_model());
    let raw = RawInputs {
        age: 5,
        bmi: 75.0,
        ..RawInputs::default()
    };
    let err = scorer.score(&raw).unwrap_err();
    assert_eq!(err.violated_fields(), vec!["age", "bmi"]);
    assert!(err.to_string().contains("age must be in range [10, 100]"));
}

#[test]
fn test_shared_handle_is_usable_as_trait_object() {
    let shared: Arc<dyn RiskClassifier + Send + Sync> = Arc::new(sample_model());
    let scorer = RiskScorer::new(shared);
    assert!(scorer.score(&RawInputs::default()).is_ok());
}
