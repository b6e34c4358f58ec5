//! Early diabetes risk scoring.
//!
//! Collects a handful of health metrics, derives the engineered feature
//! vector a pre-trained classifier expects, and turns the resulting
//! probability into a risk tier with a short explanation.
//!
//! ```rust
//! use diabetes_risk::errors::Result;
//! use diabetes_risk::features::FeatureVector;
//! use diabetes_risk::model::RiskClassifier;
//! use diabetes_risk::{RawInputs, RiskScorer, RiskTier};
//!
//! struct Constant(f64);
//!
//! impl RiskClassifier for Constant {
//!     fn name(&self) -> &str {
//!         "constant"
//!     }
//!
//!     fn predict_probability(&self, _: &FeatureVector) -> Result<f64> {
//!         Ok(self.0)
//!     }
//! }
//!
//! let scorer = RiskScorer::new(Constant(0.55));
//! let assessment = scorer.score(&RawInputs::default()).unwrap();
//! assert_eq!(assessment.tier, RiskTier::Borderline);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod features;
pub mod formatting;
pub mod inputs;
pub mod model;
pub mod observability;
pub mod output;
pub mod pipeline;
pub mod risk;
pub mod validation;

// Re-export commonly used types
pub use crate::config::RiskConfig;
pub use crate::errors::{FieldViolation, Result, RiskError};
pub use crate::features::{build_features, ClampBounds, ClampPolicy, Feature, FeatureVector};
pub use crate::inputs::{FamilyHistory, GlucoseCategory, RawInputs, SkinfoldInput, ValidatedInputs};
pub use crate::model::{LogisticModel, RiskClassifier, RobustScaler};
pub use crate::pipeline::RiskScorer;
pub use crate::risk::{Probability, RiskAssessment, RiskTier, ThresholdScheme};
