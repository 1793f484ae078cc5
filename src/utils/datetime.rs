//! Date and time utility functions
//!
//! Parsing of snapshot timestamps, calendar-day arithmetic, and human-readable
//! relative dates (e.g., "yesterday", "today", "tomorrow"). Nothing here reads
//! the system clock: the reference "now" or "today" is always an argument.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Weekday};

/// Standard date format used for snapshots and configuration
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Naive datetime layouts accepted in snapshots, tried in order
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Parse a snapshot timestamp.
///
/// Accepts RFC 3339 (offset included), naive `YYYY-MM-DDTHH:MM[:SS[.f]]`,
/// naive `YYYY-MM-DD HH:MM[:SS[.f]]` and date-only `YYYY-MM-DD` (midnight).
/// Naive forms are interpreted in `offset`.
///
/// # Returns
/// * `None` when no layout matches
pub fn parse_timestamp(value: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| parse_date(value).ok().map(|date| date.and_time(NaiveTime::MIN)))?;

    offset.from_local_datetime(&naive).single()
}

/// Whole calendar days from `now` to `target`, counted in `now`'s offset.
///
/// Day boundaries matter, not elapsed hours: 23:00 to 07:00 the next morning
/// is one day.
pub fn calendar_days_between(now: DateTime<FixedOffset>, target: DateTime<FixedOffset>) -> i64 {
    let target_day = target.with_timezone(now.offset()).date_naive();
    (target_day - now.date_naive()).num_days()
}

/// Format a date in human-readable form relative to `today`
///
/// # Arguments
/// * `input_date` - Date to describe
/// * `today` - Reference date, supplied by the caller
pub fn format_human_date(input_date: NaiveDate, today: NaiveDate) -> String {
    let days_diff = (input_date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => {
            format!("next {}", weekday_name(input_date.weekday()))
        }
        diff if (-7..-1).contains(&diff) => {
            format!("last {}", weekday_name(input_date.weekday()))
        }
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => {
            // Further out: "Jan 15", or "Jan 15, 2025" in another year
            if input_date.year() == today.year() {
                input_date.format("%b %d").to_string()
            } else {
                input_date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Format a timestamp as a human-readable date plus time of day
///
/// The timestamp is shown in `now`'s offset.
pub fn format_human_datetime(value: DateTime<FixedOffset>, now: DateTime<FixedOffset>, time_format: &str) -> String {
    let local = value.with_timezone(now.offset());
    let human_date = format_human_date(local.date_naive(), now.date_naive());
    format!("{} at {}", human_date, local.format(time_format))
}

/// Get a human-readable weekday name
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
