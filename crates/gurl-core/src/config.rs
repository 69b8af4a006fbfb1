use crate::error::GurlError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Filter used when neither `RUST_LOG` nor the config file set one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Optional configuration loaded from `~/.config/gurl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GurlConfig {
    /// `EnvFilter` directive applied when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Write logs to `~/.local/state/gurl/gurl.log` instead of stderr.
    /// Off unless asked for: a default run leaves nothing on disk.
    pub log_to_file: bool,
}

impl Default for GurlConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_to_file: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gurl")?;
    Ok(xdg_dirs.get_config_home().join("config.toml"))
}

/// Load configuration from disk, falling back to defaults if none exists.
///
/// The file is never created; gurl is often run in tight shell loops.
pub fn load_or_default() -> Result<GurlConfig> {
    let path = config_path()?;
    Ok(load_from(&path)?)
}

/// Load configuration from `path`; a missing file yields defaults.
pub fn load_from(path: &Path) -> Result<GurlConfig, GurlError> {
    if !path.exists() {
        return Ok(GurlConfig::default());
    }

    let data = fs::read_to_string(path).map_err(|e| GurlError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    toml::from_str(&data).map_err(|e| GurlError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
