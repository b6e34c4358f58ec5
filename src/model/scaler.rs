//! Robust scaling fit at training time.
//!
//! The scaler is shipped inside the model artifact and applied as-is at
//! inference. It is never refit on the request being scored: a single row
//! has no spread to normalize against.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, RiskError};
use crate::features::{FeatureVector, FEATURE_COUNT};

/// Per-column median centering and IQR scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobustScaler {
    pub center: Vec<f64>,
    pub scale: Vec<f64>,
}

impl RobustScaler {
    /// Reject parameter sets that would produce non-finite outputs.
    pub fn check(&self) -> Result<()> {
        if self.center.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(RiskError::dependency(format!(
                "scaler expects {} columns, got center={} scale={}",
                FEATURE_COUNT,
                self.center.len(),
                self.scale.len()
            )));
        }
        if let Some(i) = self.center.iter().position(|c| !c.is_finite()) {
            return Err(RiskError::dependency(format!(
                "scaler center for column {} is not finite",
                i
            )));
        }
        if let Some(i) = self
            .scale
            .iter()
            .position(|s| !s.is_finite() || *s <= 0.0)
        {
            return Err(RiskError::dependency(format!(
                "scaler scale for column {} must be positive, got {}",
                i, self.scale[i]
            )));
        }
        Ok(())
    }

    pub fn transform(&self, features: &FeatureVector) -> [f64; FEATURE_COUNT] {
        let mut out = features.values();
        for (i, x) in out.iter_mut().enumerate() {
            *x = (*x - self.center[i]) / self.scale[i];
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> RobustScaler {
        RobustScaler {
            center: vec![0.0; FEATURE_COUNT],
            scale: vec![1.0; FEATURE_COUNT],
        }
    }

    #[test]
    fn test_identity_scaler_is_noop() {
        let fv = FeatureVector::from_values([3.0; FEATURE_COUNT]).unwrap();
        assert_eq!(identity().transform(&fv), [3.0; FEATURE_COUNT]);
    }

    #[test]
    fn test_centers_and_scales() {
        let mut scaler = identity();
        scaler.center[0] = 1.0;
        scaler.scale[0] = 2.0;
        let fv = FeatureVector::from_values([5.0; FEATURE_COUNT]).unwrap();
        assert_eq!(scaler.transform(&fv)[0], 2.0);
    }

    #[test]
    fn test_check_rejects_zero_scale() {
        let mut scaler = identity();
        scaler.scale[4] = 0.0;
        let err = scaler.check().unwrap_err();
        assert!(err.is_dependency());
        assert!(err.to_string().contains("column 4"));
    }

    #[test]
    fn test_check_rejects_wrong_width() {
        let scaler = RobustScaler {
            center: vec![0.0; 7],
            scale: vec![1.0; 7],
        };
        assert!(scaler.check().is_err());
    }
}
