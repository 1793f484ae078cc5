//! Application state

use crate::config::Config;
use crate::entities::{Event, Task};
use crate::error::ValidationIssue;
use crate::snapshot::{Ingested, Snapshot};
use crate::triage::{self, DashboardSummary, StatusPartition};
use chrono::{DateTime, FixedOffset};
use std::path::PathBuf;

/// Screen currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Board,
}

/// Application state
///
/// `now` is set by the caller before every frame; nothing in here reads the
/// clock.
pub struct App {
    pub should_quit: bool,
    pub view: View,
    pub config: Config,
    pub snapshot: Snapshot,
    pub warnings: Vec<ValidationIssue>,
    pub now: DateTime<FixedOffset>,
    pub snapshot_path: Option<PathBuf>,
    pub error_message: Option<String>,
}

impl App {
    /// Create a new App instance on the dashboard view
    #[must_use]
    pub fn new(config: Config, ingested: Ingested, now: DateTime<FixedOffset>) -> Self {
        Self {
            should_quit: false,
            view: View::Dashboard,
            config,
            snapshot: ingested.snapshot,
            warnings: ingested.warnings,
            now,
            snapshot_path: None,
            error_message: None,
        }
    }

    /// Remember where the snapshot came from so it can be reloaded
    #[must_use]
    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    pub fn set_now(&mut self, now: DateTime<FixedOffset>) {
        self.now = now;
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Dashboard => View::Board,
            View::Board => View::Dashboard,
        };
    }

    /// Re-read the snapshot file, keeping the current data on failure
    pub fn reload(&mut self) {
        let Some(path) = self.snapshot_path.as_ref() else {
            return;
        };

        let options = self.config.triage.ingest_options(*self.now.offset());
        match Snapshot::load(path, &options) {
            Ok(ingested) => {
                self.snapshot = ingested.snapshot;
                self.warnings = ingested.warnings;
                self.error_message = None;
            }
            Err(e) => {
                log::error!("{}: {e}", crate::constants::ERROR_SNAPSHOT_RELOAD_FAILED);
                self.error_message = Some(format!("{}: {e}", crate::constants::ERROR_SNAPSHOT_RELOAD_FAILED));
            }
        }
    }

    #[must_use]
    pub fn summary(&self) -> DashboardSummary {
        triage::summarize(&self.snapshot.tasks, &self.snapshot.events, self.now)
    }

    #[must_use]
    pub fn upcoming_deadlines(&self) -> Vec<&Task> {
        triage::classify_deadlines_with(
            &self.snapshot.tasks,
            self.now,
            &self.config.triage.deadline_policy(),
        )
    }

    #[must_use]
    pub fn recent_events(&self) -> Vec<&Event> {
        let limit = self.config.triage.recent_events_limit;
        if self.config.triage.sort_recent_events {
            triage::recent_events_by_date(&self.snapshot.events, limit)
        } else {
            triage::recent_events(&self.snapshot.events, limit)
        }
    }

    #[must_use]
    pub fn board(&self) -> StatusPartition<'_, Task> {
        triage::partition_by_status(&self.snapshot.tasks, &self.config.board.columns)
    }
}
