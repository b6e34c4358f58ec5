pub mod features;
pub mod init;
pub mod legend;
pub mod score;

use anyhow::Result;
use std::path::Path;

use crate::config::{load_config, load_config_from, RiskConfig};
use crate::formatting::FormattingConfig;

/// Explicit `--config` must load; otherwise search the directory tree.
pub fn resolve_config(explicit: Option<&Path>) -> Result<RiskConfig> {
    match explicit {
        Some(path) => Ok(load_config_from(path)?),
        None => Ok(load_config()),
    }
}

pub fn formatting_for(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
