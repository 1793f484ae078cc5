//! File logging for the `log` facade.
//!
//! The terminal belongs to the dashboard while it runs, so log records go to
//! a file under the user's local data directory, never to stdout.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Location of the log file: `<data_local_dir>/taskboard/taskboard.log`
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))
        .map(|dir| dir.join("taskboard").join("taskboard.log"))
}

/// Parse a configured level name
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level.trim()).map_err(|_| anyhow::anyhow!("Unsupported log level '{}'", level))
}

/// Build a dispatcher writing timestamped records at `level` or above to `log_path`
pub fn build_dispatch(level: LevelFilter, log_path: &Path) -> Result<fern::Dispatch> {
    let file = fern::log_file(log_path).with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file))
}

/// Install the global logger according to `config`
///
/// # Returns
/// * `Ok(None)` - logging is disabled
/// * `Ok(Some(path))` - records are written to `path`
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let level = parse_level(&config.level)?;
    let log_path = get_log_file_path()?;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    build_dispatch(level, &log_path)?
        .apply()
        .context("A global logger is already installed")?;

    log::info!("Logging started at level {}", level);
    Ok(Some(log_path))
}
