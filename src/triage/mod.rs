//! Triage engine: pure classification of tasks and events.
//!
//! Every function here takes the reference time as an argument and borrows
//! its input; results are new vectors of references into the caller's
//! snapshot. Nothing reads the system clock and nothing mutates input.
//!
//! # Operations
//!
//! * [`classify_deadlines`] - overdue then upcoming tasks, soonest first
//! * [`urgency_bucket`] - calendar-day proximity of one deadline
//! * [`partition_by_status`] - kanban columns in caller-defined order
//! * [`recent_events`] - the first N events as supplied
//! * [`summarize`] - counts behind the dashboard summary cards

pub mod board;
pub mod deadlines;
pub mod events;
pub mod summary;
pub mod urgency;

use crate::entities::{Task, TaskStatus};
use chrono::{DateTime, FixedOffset};

pub use board::{partition_by_status, StatusColumn, StatusPartition, DEFAULT_BOARD_ORDER};
pub use deadlines::{classify_deadlines, classify_deadlines_with, DeadlinePolicy};
pub use events::{recent_events, recent_events_by_date, DEFAULT_RECENT_EVENTS};
pub use summary::{summarize, DashboardSummary};
pub use urgency::{urgency_bucket, urgency_bucket_within, UrgencyBucket};

/// A task-like record the engine can triage.
pub trait Triageable {
    /// Deadline, if the record has one.
    fn deadline(&self) -> Option<DateTime<FixedOffset>>;

    /// Current workflow stage.
    fn status(&self) -> TaskStatus;

    /// Completed records never count as overdue or upcoming.
    fn is_actionable(&self) -> bool {
        self.status() != TaskStatus::Completed
    }
}

impl Triageable for Task {
    fn deadline(&self) -> Option<DateTime<FixedOffset>> {
        self.deadline
    }

    fn status(&self) -> TaskStatus {
        self.status
    }
}
