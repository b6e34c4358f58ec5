use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use super::resolve_config;
use crate::formatting::FormattingConfig;
use crate::inputs::RawInputs;
use crate::model;
use crate::output::{create_writer, OutputFormat};
use crate::pipeline::RiskScorer;

pub struct ScoreConfig {
    pub inputs: RawInputs,
    pub model: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub formatting: FormattingConfig,
}

pub fn handle_score(cfg: ScoreConfig) -> Result<()> {
    let config = resolve_config(cfg.config.as_deref())?;
    let model_path = cfg.model.unwrap_or_else(|| config.model.path.clone());

    // Without a classifier no request can be scored.
    let classifier = model::load_shared(&model_path)
        .with_context(|| format!("Failed to load classifier from {}", model_path.display()))?;
    info!(path = %model_path.display(), "Classifier ready");

    let scorer = RiskScorer::from_config(classifier, &config);
    let assessment = scorer.score(&cfg.inputs)?;

    create_writer(cfg.format, cfg.formatting).write_assessment(&assessment)
}
