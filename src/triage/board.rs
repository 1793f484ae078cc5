//! Kanban columns.

use super::Triageable;
use crate::entities::TaskStatus;

/// Column order used by the board when none is configured.
pub const DEFAULT_BOARD_ORDER: [TaskStatus; 3] = [TaskStatus::Completed, TaskStatus::InProgress, TaskStatus::Open];

/// One board column.
#[derive(Debug)]
pub struct StatusColumn<'a, T> {
    pub status: TaskStatus,
    pub tasks: Vec<&'a T>,
}

/// Tasks grouped by status, columns in the order the caller asked for.
#[derive(Debug)]
pub struct StatusPartition<'a, T> {
    columns: Vec<StatusColumn<'a, T>>,
    dropped: usize,
}

impl<'a, T> StatusPartition<'a, T> {
    #[must_use]
    pub fn columns(&self) -> &[StatusColumn<'a, T>] {
        &self.columns
    }

    /// Tasks of `status`, or `None` when the status has no column.
    #[must_use]
    pub fn get(&self, status: TaskStatus) -> Option<&[&'a T]> {
        self.columns
            .iter()
            .find(|column| column.status == status)
            .map(|column| column.tasks.as_slice())
    }

    /// Number of tasks whose status had no column.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Number of tasks placed in a column.
    #[must_use]
    pub fn placed(&self) -> usize {
        self.columns.iter().map(|column| column.tasks.len()).sum()
    }
}

/// Group `tasks` into one column per entry of `statuses`.
///
/// Columns follow `statuses`; a status listed twice gets a single column at
/// its first position. Within a column tasks keep their input order. Tasks
/// whose status is not listed are left out and counted in
/// [`StatusPartition::dropped`].
pub fn partition_by_status<'a, T: Triageable>(tasks: &'a [T], statuses: &[TaskStatus]) -> StatusPartition<'a, T> {
    let mut columns: Vec<StatusColumn<'a, T>> = Vec::with_capacity(statuses.len());
    for &status in statuses {
        if !columns.iter().any(|column| column.status == status) {
            columns.push(StatusColumn {
                status,
                tasks: Vec::new(),
            });
        }
    }

    let mut dropped = 0;
    for task in tasks {
        match columns.iter_mut().find(|column| column.status == task.status()) {
            Some(column) => column.tasks.push(task),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::debug!("Board partition left out {} task(s) with unlisted status", dropped);
    }

    StatusPartition { columns, dropped }
}
