use std::fs;
use std::path::{Path, PathBuf};

use super::validation::validate_config_result;
use super::RiskConfig;
use crate::errors::{Result, RiskError};

pub const CONFIG_FILE_NAME: &str = ".diabetes-risk.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<RiskConfig> {
    let config = toml::from_str::<RiskConfig>(contents)
        .map_err(|e| RiskError::config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;
    validate_config_result(&config)?;
    Ok(config)
}

/// Load an explicitly named config file. Any failure is an error.
pub fn load_config_from(path: &Path) -> Result<RiskConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| RiskError::config_with_path(format!("Failed to read config: {}", e), path))?;
    parse_and_validate_config(&contents).map_err(|e| match e {
        RiskError::Config { message, .. } => RiskError::config_with_path(message, path),
        other => other,
    })
}

/// Try a discovered config file; unreadable or invalid files are skipped.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<RiskConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Directory ancestors of `start`, nearest first, up to `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search from `start` upwards for the nearest config file.
pub fn discover_config(start: PathBuf) -> RiskConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            RiskConfig::default()
        })
}

/// Load the config from the current directory hierarchy.
pub fn load_config() -> RiskConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            RiskConfig::default()
        }
    }
}
