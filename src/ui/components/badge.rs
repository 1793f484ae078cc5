use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::entities::{EventStatus, Priority, TaskStatus};
use crate::triage::UrgencyBucket;
use crate::utils::color::tag_color;

/// Orange used for warnings and near deadlines
const ORANGE: Color = Color::Rgb(255, 165, 0);

/// Create badges with parentheses, used for checklist progress
#[must_use]
pub fn create_paren_badge(text: &str) -> Span<'static> {
    Span::styled(
        format!("({text})"),
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
    )
}

/// Create a tag badge colored by the tag text
#[must_use]
pub fn create_tag_badge(tag: &str) -> Span<'static> {
    let style = Style::default()
        .bg(tag_color(tag))
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    Span::styled(tag.to_string(), style)
}

/// Create priority badges with flag symbols
#[must_use]
pub fn create_priority_badge(priority: Option<Priority>) -> Option<Span<'static>> {
    match priority? {
        Priority::Critical => Some(Span::styled(
            "⚑",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Priority::High => Some(Span::styled(
            "⚑",
            Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
        )),
        Priority::Normal => Some(Span::styled(
            "⚑",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
        Priority::Low => Some(Span::styled("⚐", Style::default().fg(Color::White))),
    }
}

/// Human-readable text for an urgency bucket
#[must_use]
pub fn urgency_text(bucket: UrgencyBucket) -> String {
    match bucket {
        UrgencyBucket::Overdue { days: 1 } => "overdue by 1 day".to_string(),
        UrgencyBucket::Overdue { days } => format!("overdue by {days} days"),
        UrgencyBucket::DueToday => "today".to_string(),
        UrgencyBucket::DueTomorrow => "tomorrow".to_string(),
        UrgencyBucket::DueWithinDays(days) => format!("in {days} days"),
        UrgencyBucket::Later => "later".to_string(),
    }
}

/// Foreground color for an urgency bucket
#[must_use]
pub fn urgency_color(bucket: UrgencyBucket) -> Color {
    match bucket {
        UrgencyBucket::Overdue { .. } => Color::Red,
        UrgencyBucket::DueToday => ORANGE,
        UrgencyBucket::DueTomorrow => Color::Yellow,
        UrgencyBucket::DueWithinDays(_) => Color::Cyan,
        UrgencyBucket::Later => Color::Gray,
    }
}

/// Create an urgency badge, e.g. "overdue by 2 days" in red
#[must_use]
pub fn create_urgency_badge(bucket: UrgencyBucket) -> Span<'static> {
    let mut style = Style::default().fg(urgency_color(bucket));
    if bucket.is_overdue() {
        style = style.add_modifier(Modifier::BOLD);
    }
    Span::styled(urgency_text(bucket), style)
}

/// Create an event status badge
#[must_use]
pub fn create_event_status_badge(status: EventStatus) -> Span<'static> {
    let (label, bg) = match status {
        EventStatus::Planning => ("planning", Color::Gray),
        EventStatus::Approved => ("approved", Color::Blue),
        EventStatus::InProgress => ("in progress", Color::Yellow),
        EventStatus::Completed => ("completed", Color::Green),
        EventStatus::Cancelled => ("cancelled", Color::Red),
    };
    Span::styled(
        format!(" {label} "),
        Style::default().bg(bg).fg(Color::Black).add_modifier(Modifier::BOLD),
    )
}

/// Board column title for a task status
#[must_use]
pub fn status_title(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Open => "Open",
        TaskStatus::InProgress => "In progress",
        TaskStatus::Completed => "Completed",
    }
}

/// Accent color for a board column
#[must_use]
pub fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Open => Color::Cyan,
        TaskStatus::InProgress => Color::Yellow,
        TaskStatus::Completed => Color::Green,
    }
}
