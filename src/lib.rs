//! Taskboard - deadline triage and a terminal dashboard for tasks and events
//!
//! The core of this library is a pure triage engine: given a snapshot of
//! tasks and events and an explicit "now", it selects overdue and upcoming
//! work, classifies deadline urgency, groups tasks into kanban columns and
//! picks the recent events. Around it sit snapshot ingestion with per-record
//! warnings and a ratatui dashboard.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - Task and event records
//! * [`snapshot`] - Loading and validating snapshot files
//! * [`triage`] - Pure classification, ordering and partitioning
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Task and event domain records
pub mod entities;

/// Error types for loading and validation
pub mod error;

/// File logging setup for the `log` facade
pub mod logger;

/// Snapshot ingestion and record validation
pub mod snapshot;

/// Triage engine for deadlines, statuses and events
pub mod triage;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

// Re-export the records and the engine for convenient access
pub use entities::{ChecklistItem, Event, EventStatus, Priority, RecordId, Task, TaskStatus};
pub use error::{SnapshotError, ValidationIssue};
pub use snapshot::{IngestOptions, Ingested, Snapshot};
pub use triage::{
    classify_deadlines, partition_by_status, recent_events, summarize, urgency_bucket, DashboardSummary,
    UrgencyBucket,
};
