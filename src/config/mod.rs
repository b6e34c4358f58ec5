//! Scorer configuration.
//!
//! Read from `.diabetes-risk.toml`, searched upwards from the working
//! directory. Every field has a default, so an empty or absent file yields
//! the strict threshold scheme with no feature clamping.
//!
//! ```toml
//! [scoring]
//! threshold_scheme = "strict"
//!
//! [features]
//! clamp = "capped"
//!
//! [features.bounds]
//! complex_stress = 30.0
//!
//! [model]
//! path = "model.json"
//! ```

pub mod loader;
pub mod validation;

pub use loader::{load_config, load_config_from, parse_and_validate_config, CONFIG_FILE_NAME};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::features::{ClampBounds, ClampPolicy};
use crate::risk::ThresholdScheme;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub features: FeaturesConfig,

    #[serde(default)]
    pub model: ModelConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub threshold_scheme: ThresholdScheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClampMode {
    #[default]
    None,
    Capped,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturesConfig {
    #[serde(default)]
    pub clamp: ClampMode,

    /// Only consulted when `clamp = "capped"`.
    #[serde(default)]
    pub bounds: ClampBounds,
}

impl FeaturesConfig {
    pub fn policy(&self) -> ClampPolicy {
        match self.clamp {
            ClampMode::None => ClampPolicy::Unclamped,
            ClampMode::Capped => ClampPolicy::Capped(self.bounds),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model_path")]
    pub path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from("model.json")
}

/// Commented default file written by `init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# diabetes-risk configuration

[scoring]
# "strict":  HIGH if p > 0.7, BORDERLINE if p > 0.4, else LOW
# "relaxed": HIGH if p >= 0.9, BORDERLINE if p >= 0.7, else LOW
threshold_scheme = "strict"

[features]
# "none" or "capped"
clamp = "none"

[features.bounds]
bp_skin_product = 3000.0
metabolic_stress = 20.0
insulin_age_product = 1000.0
complex_stress = 30.0

[model]
path = "model.json"
"#;
