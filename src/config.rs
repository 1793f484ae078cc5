//! Configuration management for Taskboard
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_DEADLINE_LIMIT, DEFAULT_UPCOMING_WINDOW_DAYS, MAX_LIST_LIMIT, MAX_UPCOMING_WINDOW_DAYS,
};
use crate::entities::TaskStatus;
use crate::snapshot::IngestOptions;
use crate::triage::{DeadlinePolicy, DEFAULT_BOARD_ORDER, DEFAULT_RECENT_EVENTS};
use crate::utils::datetime;
use anyhow::{Context, Result};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub triage: TriageConfig,
    pub board: BoardConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Triage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Upcoming deadlines fall within this many days of now
    pub upcoming_window_days: u32,
    /// Maximum entries in the upcoming-deadlines list (overdue included)
    pub deadline_limit: usize,
    /// Number of events in the recent events list
    pub recent_events_limit: usize,
    /// Sort events newest-first instead of trusting snapshot order
    pub sort_recent_events: bool,
    /// Offset, in minutes east of UTC, for snapshot timestamps without one.
    /// Unset means the local offset at startup.
    pub utc_offset_minutes: Option<i32>,
}

/// Board configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Column order, left to right
    pub columns: Vec<TaskStatus>,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format for absolute dates
    pub date_format: String,
    /// Time format for datetime fields
    pub time_format: String,
    /// Show task tags on board cards
    pub show_tags: bool,
    /// Show assignees on board cards
    pub show_assignees: bool,
    /// Show checklist progress on board cards
    pub show_checklist_progress: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Minimum level: off, error, warn, info, debug or trace
    pub level: String,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            upcoming_window_days: DEFAULT_UPCOMING_WINDOW_DAYS,
            deadline_limit: DEFAULT_DEADLINE_LIMIT,
            recent_events_limit: DEFAULT_RECENT_EVENTS,
            sort_recent_events: false,
            utc_offset_minutes: None,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_BOARD_ORDER.to_vec(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::DATE_FORMAT.to_string(),
            time_format: "%H:%M".to_string(),
            show_tags: true,
            show_assignees: true,
            show_checklist_progress: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl TriageConfig {
    /// Deadline policy for the upcoming-deadlines list
    #[must_use]
    pub fn deadline_policy(&self) -> DeadlinePolicy {
        DeadlinePolicy {
            window_days: self.upcoming_window_days,
            limit: self.deadline_limit,
        }
    }

    /// Ingestion options, using `local_offset` when no offset is configured
    #[must_use]
    pub fn ingest_options(&self, local_offset: FixedOffset) -> IngestOptions {
        let offset = self
            .utc_offset_minutes
            .and_then(|minutes| FixedOffset::east_opt(minutes.saturating_mul(60)))
            .unwrap_or(local_offset);
        IngestOptions { offset }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("taskboard.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("taskboard").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.validate_triage()?;
        self.validate_board()?;

        // Validate date/time formats
        if let Err(e) = chrono::NaiveDate::parse_from_str("2025-01-01", &self.display.date_format) {
            anyhow::bail!("Invalid date_format '{}': {}", self.display.date_format, e);
        }

        if let Err(e) = chrono::NaiveTime::parse_from_str("12:00", &self.display.time_format) {
            anyhow::bail!("Invalid time_format '{}': {}", self.display.time_format, e);
        }

        if log::LevelFilter::from_str(&self.logging.level).is_err() {
            anyhow::bail!(
                "Invalid logging level '{}': expected off, error, warn, info, debug or trace",
                self.logging.level
            );
        }

        Ok(())
    }

    fn validate_triage(&self) -> Result<()> {
        let triage = &self.triage;

        if triage.upcoming_window_days == 0 || triage.upcoming_window_days > MAX_UPCOMING_WINDOW_DAYS {
            anyhow::bail!(
                "upcoming_window_days must be between 1 and {}, got {}",
                MAX_UPCOMING_WINDOW_DAYS,
                triage.upcoming_window_days
            );
        }

        for (name, value) in [
            ("deadline_limit", triage.deadline_limit),
            ("recent_events_limit", triage.recent_events_limit),
        ] {
            if value == 0 || value > MAX_LIST_LIMIT {
                anyhow::bail!("{} must be between 1 and {}, got {}", name, MAX_LIST_LIMIT, value);
            }
        }

        if let Some(minutes) = triage.utc_offset_minutes {
            if minutes.abs() >= 24 * 60 {
                anyhow::bail!("utc_offset_minutes must be within one day of UTC, got {}", minutes);
            }
        }

        Ok(())
    }

    fn validate_board(&self) -> Result<()> {
        if self.board.columns.is_empty() {
            anyhow::bail!("board.columns cannot be empty");
        }

        for (index, status) in self.board.columns.iter().enumerate() {
            if self.board.columns[..index].contains(status) {
                anyhow::bail!("board.columns lists '{}' more than once", status.as_str());
            }
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Taskboard Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("taskboard"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
