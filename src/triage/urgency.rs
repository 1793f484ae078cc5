//! Deadline urgency buckets.

use crate::utils::datetime::calendar_days_between;
use chrono::{DateTime, FixedOffset};

/// How close a deadline is to "now", in calendar days.
///
/// Presentation-neutral: turning a bucket into text or color is up to the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrgencyBucket {
    /// The deadline's day is `days` calendar days in the past.
    Overdue { days: u64 },
    DueToday,
    DueTomorrow,
    /// Two or more calendar days ahead.
    DueWithinDays(u64),
    /// At or beyond the caller's horizon; only produced by
    /// [`urgency_bucket_within`].
    Later,
}

impl UrgencyBucket {
    /// Bucket for a signed calendar-day difference (deadline day minus today).
    #[must_use]
    pub fn from_days(days_until: i64) -> Self {
        match days_until {
            d if d < 0 => UrgencyBucket::Overdue { days: d.unsigned_abs() },
            0 => UrgencyBucket::DueToday,
            1 => UrgencyBucket::DueTomorrow,
            d => UrgencyBucket::DueWithinDays(d.unsigned_abs()),
        }
    }

    #[must_use]
    pub fn is_overdue(self) -> bool {
        matches!(self, UrgencyBucket::Overdue { .. })
    }
}

/// Classify `deadline` by calendar-day distance from `now`.
///
/// Days are counted in `now`'s offset, so a deadline 20 hours away that
/// crosses midnight is [`UrgencyBucket::DueTomorrow`].
pub fn urgency_bucket(deadline: DateTime<FixedOffset>, now: DateTime<FixedOffset>) -> UrgencyBucket {
    UrgencyBucket::from_days(calendar_days_between(now, deadline))
}

/// Like [`urgency_bucket`], but deadlines `horizon_days` or more days out are
/// [`UrgencyBucket::Later`]. Today and tomorrow are never `Later`.
pub fn urgency_bucket_within(
    deadline: DateTime<FixedOffset>,
    now: DateTime<FixedOffset>,
    horizon_days: u32,
) -> UrgencyBucket {
    let days_until = calendar_days_between(now, deadline);
    if days_until >= i64::from(horizon_days) && days_until > 1 {
        UrgencyBucket::Later
    } else {
        UrgencyBucket::from_days(days_until)
    }
}
