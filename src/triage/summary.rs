//! Counts behind the dashboard summary cards.

use super::Triageable;
use crate::entities::{Event, TaskStatus};
use crate::utils::datetime::calendar_days_between;
use chrono::{DateTime, FixedOffset};

/// Aggregate counts for one snapshot at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_tasks: usize,
    pub open: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// Not completed, deadline before now.
    pub overdue: usize,
    /// Not completed, deadline later today.
    pub due_today: usize,
    pub total_events: usize,
    /// Dated now or later and neither completed nor cancelled.
    pub upcoming_events: usize,
}

impl DashboardSummary {
    /// Share of completed tasks, rounded down; 0 when there are no tasks.
    #[must_use]
    pub fn completion_percent(&self) -> u8 {
        if self.total_tasks == 0 {
            return 0;
        }
        // completed <= total_tasks, so the quotient is at most 100
        u8::try_from(self.completed * 100 / self.total_tasks).unwrap_or(100)
    }
}

/// Count tasks per status and deadline state, and events still ahead.
pub fn summarize<T: Triageable>(tasks: &[T], events: &[Event], now: DateTime<FixedOffset>) -> DashboardSummary {
    let mut summary = DashboardSummary {
        total_tasks: tasks.len(),
        total_events: events.len(),
        ..DashboardSummary::default()
    };

    for task in tasks {
        match task.status() {
            TaskStatus::Open => summary.open += 1,
            TaskStatus::InProgress => summary.in_progress += 1,
            TaskStatus::Completed => {
                summary.completed += 1;
                continue;
            }
        }

        if let Some(deadline) = task.deadline() {
            if deadline < now {
                summary.overdue += 1;
            } else if calendar_days_between(now, deadline) == 0 {
                summary.due_today += 1;
            }
        }
    }

    summary.upcoming_events = events
        .iter()
        .filter(|event| event.date >= now)
        .filter(|event| !event.status.is_some_and(|status| status.is_closed()))
        .count();

    summary
}
