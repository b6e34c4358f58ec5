use anyhow::Result;
use std::path::Path;

use super::resolve_config;
use crate::formatting::FormattingConfig;
use crate::output::{create_writer, OutputFormat};

pub fn handle_legend(
    config: Option<&Path>,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Result<()> {
    let config = resolve_config(config)?;
    create_writer(format, formatting).write_legend(config.scoring.threshold_scheme)
}
