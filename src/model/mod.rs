//! Classifier seam.
//!
//! The classifier is an external collaborator: the scoring pipeline only
//! relies on [`RiskClassifier`], which maps a [`FeatureVector`] to the
//! probability of the high-risk class. It is loaded once at startup and
//! shared read-only by every request.
//!
//! [`LogisticModel`] is the bundled implementation, loaded from a JSON
//! artifact that may carry a [`RobustScaler`] fit at training time.

pub mod logistic;
pub mod scaler;

pub use logistic::LogisticModel;
pub use scaler::RobustScaler;

use std::path::Path;
use std::sync::Arc;

use crate::errors::Result;
use crate::features::FeatureVector;

/// Probability at or above which `predict_class` returns 1.
pub const DECISION_BOUNDARY: f64 = 0.5;

/// Binary classifier over the 13-column feature vector.
pub trait RiskClassifier {
    fn name(&self) -> &str;

    /// Probability of the positive (high-risk) class.
    fn predict_probability(&self, features: &FeatureVector) -> Result<f64>;

    fn predict_class(&self, features: &FeatureVector) -> Result<u8> {
        let p = self.predict_probability(features)?;
        Ok(u8::from(p >= DECISION_BOUNDARY))
    }
}

impl<T: RiskClassifier + ?Sized> RiskClassifier for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn predict_probability(&self, features: &FeatureVector) -> Result<f64> {
        (**self).predict_probability(features)
    }

    fn predict_class(&self, features: &FeatureVector) -> Result<u8> {
        (**self).predict_class(features)
    }
}

impl<T: RiskClassifier + ?Sized> RiskClassifier for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn predict_probability(&self, features: &FeatureVector) -> Result<f64> {
        (**self).predict_probability(features)
    }

    fn predict_class(&self, features: &FeatureVector) -> Result<u8> {
        (**self).predict_class(features)
    }
}

/// Load the bundled classifier into a shared handle.
pub fn load_shared(path: impl AsRef<Path>) -> Result<Arc<dyn RiskClassifier + Send + Sync>> {
    Ok(Arc::new(LogisticModel::load(path)?))
}
