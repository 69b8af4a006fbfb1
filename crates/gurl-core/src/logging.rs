//! Logging init: stderr by default, or an append-only file under the XDG
//! state dir when `log_to_file` is set.
//!
//! stdout carries the rendered line, so nothing here ever writes to it.

use crate::config::GurlConfig;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise the configured filter.
fn env_filter(cfg: &GurlConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter))
}

/// Path of the log file, `~/.local/state/gurl/gurl.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gurl")?;
    Ok(xdg_dirs.get_state_home().join("gurl.log"))
}

/// Send logs to the state-dir file, creating it on first use.
/// Returns Err if the file can't be opened so the caller can fall back to stderr.
pub fn init_logging(cfg: &GurlConfig) -> Result<()> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cfg))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    tracing::debug!("gurl logging initialized at {}", path.display());
    Ok(())
}

/// Initialize logging to stderr only. At the default `warn` filter a
/// successful run prints nothing here.
pub fn init_logging_stderr(cfg: &GurlConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(cfg))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

/// File logging when configured, stderr otherwise or on failure.
pub fn init(cfg: &GurlConfig) {
    if cfg.log_to_file && init_logging(cfg).is_ok() {
        return;
    }
    init_logging_stderr(cfg);
}
