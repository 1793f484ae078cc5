//! Recent events selection.

use crate::entities::Event;

/// Number of events shown on the dashboard by default.
pub const DEFAULT_RECENT_EVENTS: usize = 5;

/// The first `limit` events, in the order given.
///
/// No sorting happens here: callers are expected to pass events already
/// ordered by recency. Use [`recent_events_by_date`] when that is not
/// guaranteed.
pub fn recent_events(events: &[Event], limit: usize) -> Vec<&Event> {
    events.iter().take(limit).collect()
}

/// The `limit` latest events by date, newest first.
///
/// Events sharing a date keep their input order.
pub fn recent_events_by_date(events: &[Event], limit: usize) -> Vec<&Event> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}
