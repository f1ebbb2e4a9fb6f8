//! Configuration loading from file system

use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use super::defaults::DEFAULT_CONFIG_PATH;
use super::types::Config;
use crate::error::{FloorFinderError, Result};

/// Default config location with `~` expanded
pub fn default_config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref())
}

/// Read and parse a config file, surfacing any failure.
pub fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| FloorFinderError::ConfigRead {
        path: path.display().to_string(),
        source,
    })?;
    let config = serde_json::from_str::<Config>(&content)?;
    Ok(config)
}

/// Load configuration from `path`, or `~/.floor-finder/config.json`.
///
/// Returns `Config::default()` if the file is missing or invalid.
#[instrument(name = "load_config", skip_all)]
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);

    if !config_path.exists() {
        info!(path = %config_path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    match read_config(&config_path) {
        Ok(config) => {
            info!(path = %config_path.display(), "Loaded config");
            config
        }
        Err(e) => {
            warn!(
                error = %e,
                path = %config_path.display(),
                "Failed to load config, using defaults"
            );
            Config::default()
        }
    }
}
