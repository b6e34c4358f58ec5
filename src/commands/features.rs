use anyhow::Result;
use std::path::PathBuf;

use super::resolve_config;
use crate::features::build_features;
use crate::formatting::FormattingConfig;
use crate::inputs::RawInputs;
use crate::output::{create_writer, OutputFormat};

pub struct FeaturesConfig {
    pub inputs: RawInputs,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub formatting: FormattingConfig,
}

/// Print the classifier input; no model is loaded.
pub fn handle_features(cfg: FeaturesConfig) -> Result<()> {
    let config = resolve_config(cfg.config.as_deref())?;
    let inputs = cfg.inputs.validate()?;
    let features = build_features(&inputs, &config.features.policy())?;
    create_writer(cfg.format, cfg.formatting).write_features(&features)
}
