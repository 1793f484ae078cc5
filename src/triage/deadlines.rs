//! Upcoming-deadlines selection.

use super::Triageable;
use crate::constants::{DEFAULT_DEADLINE_LIMIT, DEFAULT_UPCOMING_WINDOW_DAYS};
use chrono::{DateTime, Duration, FixedOffset};

/// Window and size of the upcoming-deadlines list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlinePolicy {
    /// Upcoming deadlines fall in `[now, now + window_days)`.
    pub window_days: u32,
    /// Maximum number of tasks returned, overdue ones included.
    pub limit: usize,
}

impl Default for DeadlinePolicy {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_UPCOMING_WINDOW_DAYS,
            limit: DEFAULT_DEADLINE_LIMIT,
        }
    }
}

/// Overdue and upcoming tasks with the default policy (7 days, 5 entries).
///
/// See [`classify_deadlines_with`].
pub fn classify_deadlines<T: Triageable>(tasks: &[T], now: DateTime<FixedOffset>) -> Vec<&T> {
    classify_deadlines_with(tasks, now, &DeadlinePolicy::default())
}

/// Select the tasks that need attention, most pressing first.
///
/// A task qualifies when it has a deadline and is not completed. Overdue
/// tasks (`deadline < now`) come first, then upcoming ones
/// (`now <= deadline < now + window`); each group is sorted ascending by
/// deadline, ties keep input order. The concatenation is cut to
/// `policy.limit`. An overdue task always precedes an upcoming one, however
/// far in the past its deadline is.
pub fn classify_deadlines_with<'a, T: Triageable>(
    tasks: &'a [T],
    now: DateTime<FixedOffset>,
    policy: &DeadlinePolicy,
) -> Vec<&'a T> {
    // None only when the horizon overflows the calendar: nothing is beyond it.
    let horizon = now.checked_add_signed(Duration::days(i64::from(policy.window_days)));

    let mut overdue = Vec::new();
    let mut upcoming = Vec::new();

    for task in tasks.iter().filter(|task| task.is_actionable()) {
        let Some(deadline) = task.deadline() else {
            continue;
        };

        if deadline < now {
            overdue.push((deadline, task));
        } else if horizon.map_or(true, |horizon| deadline < horizon) {
            upcoming.push((deadline, task));
        }
    }

    // sort_by_key is stable, so equal deadlines keep input order
    overdue.sort_by_key(|(deadline, _)| *deadline);
    upcoming.sort_by_key(|(deadline, _)| *deadline);

    log::debug!(
        "Deadline triage: {} overdue, {} upcoming, limit {}",
        overdue.len(),
        upcoming.len(),
        policy.limit
    );

    overdue
        .into_iter()
        .chain(upcoming)
        .map(|(_, task)| task)
        .take(policy.limit)
        .collect()
}
