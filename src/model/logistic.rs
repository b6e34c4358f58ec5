use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::Path;
use tracing::debug;

use super::scaler::RobustScaler;
use super::RiskClassifier;
use crate::errors::{Result, RiskError};
use crate::features::{feature_names, FeatureVector, FEATURE_COUNT};

/// Logistic classifier loaded from a JSON artifact.
///
/// ```json
/// {
///   "model_name": "early-diabetes-v2",
///   "feature_names": ["pregnancies", "blood_pressure", "..."],
///   "weights": [0.1, 0.0, "..."],
///   "intercept": -1.2,
///   "scaler": { "center": ["..."], "scale": ["..."] }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub model_name: String,
    pub feature_names: Vec<String>,
    pub weights: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub scaler: Option<RobustScaler>,
}

impl LogisticModel {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = read_to_string(path).map_err(|e| {
            RiskError::dependency(format!("cannot read model {}: {}", path.display(), e))
        })?;
        let model = Self::from_json(&contents)?;
        debug!(
            model = %model.model_name,
            path = %path.display(),
            scaled = model.scaler.is_some(),
            "Loaded classifier"
        );
        Ok(model)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let model: Self = serde_json::from_str(contents)
            .map_err(|e| RiskError::dependency(format!("malformed model artifact: {}", e)))?;
        model.check()?;
        Ok(model)
    }

    /// The artifact must have been trained on exactly our column order.
    pub fn check(&self) -> Result<()> {
        let expected = feature_names();
        if self.feature_names.len() != FEATURE_COUNT
            || self.feature_names.iter().zip(expected).any(|(a, b)| a != b)
        {
            return Err(RiskError::dependency(format!(
                "model '{}' feature order {:?} does not match expected {:?}",
                self.model_name, self.feature_names, expected
            )));
        }
        if self.weights.len() != FEATURE_COUNT {
            return Err(RiskError::dependency(format!(
                "model '{}' has {} weights, expected {}",
                self.model_name,
                self.weights.len(),
                FEATURE_COUNT
            )));
        }
        if !self.intercept.is_finite() || self.weights.iter().any(|w| !w.is_finite()) {
            return Err(RiskError::dependency(format!(
                "model '{}' has non-finite coefficients",
                self.model_name
            )));
        }
        if let Some(scaler) = &self.scaler {
            scaler.check()?;
        }
        Ok(())
    }

    fn logit(&self, features: &FeatureVector) -> f64 {
        let x = match &self.scaler {
            Some(scaler) => scaler.transform(features),
            None => features.values(),
        };
        self.weights
            .iter()
            .zip(x.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl RiskClassifier for LogisticModel {
    fn name(&self) -> &str {
        &self.model_name
    }

    fn predict_probability(&self, features: &FeatureVector) -> Result<f64> {
        let z = self.logit(features);
        if z.is_nan() {
            return Err(RiskError::dependency(format!(
                "model '{}' produced NaN logit",
                self.model_name
            )));
        }
        Ok(sigmoid(z))
    }
}
