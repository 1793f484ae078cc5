use ratatui::style::{Color, Modifier};
use taskboard::entities::{EventStatus, Priority, TaskStatus};
use taskboard::triage::UrgencyBucket;
use taskboard::ui::components::badge::*;

#[test]
fn test_create_paren_badge() {
    let badge = create_paren_badge("2/3");
    assert_eq!(badge.content, "(2/3)");
}

#[test]
fn test_create_tag_badge_is_stable() {
    let first = create_tag_badge("backend");
    let second = create_tag_badge("backend");
    assert_eq!(first.content, "backend");
    assert_eq!(first.style.bg, second.style.bg);
}

#[test]
fn test_priority_badges() {
    assert!(create_priority_badge(None).is_none());

    let critical = create_priority_badge(Some(Priority::Critical)).unwrap();
    assert_eq!(critical.content, "⚑");
    assert_eq!(critical.style.fg, Some(Color::Red));

    let low = create_priority_badge(Some(Priority::Low)).unwrap();
    assert_eq!(low.content, "⚐");
}

#[test]
fn test_urgency_text() {
    assert_eq!(urgency_text(UrgencyBucket::Overdue { days: 1 }), "overdue by 1 day");
    assert_eq!(urgency_text(UrgencyBucket::Overdue { days: 3 }), "overdue by 3 days");
    assert_eq!(urgency_text(UrgencyBucket::DueToday), "today");
    assert_eq!(urgency_text(UrgencyBucket::DueTomorrow), "tomorrow");
    assert_eq!(urgency_text(UrgencyBucket::DueWithinDays(4)), "in 4 days");
    assert_eq!(urgency_text(UrgencyBucket::Later), "later");
}

#[test]
fn test_overdue_badge_is_bold_red() {
    let badge = create_urgency_badge(UrgencyBucket::Overdue { days: 2 });
    assert_eq!(badge.style.fg, Some(Color::Red));
    assert!(badge.style.add_modifier.contains(Modifier::BOLD));

    let badge = create_urgency_badge(UrgencyBucket::DueTomorrow);
    assert!(!badge.style.add_modifier.contains(Modifier::BOLD));
}

#[test]
fn test_event_status_badge() {
    assert_eq!(create_event_status_badge(EventStatus::Cancelled).content, " cancelled ");
    assert_eq!(create_event_status_badge(EventStatus::InProgress).content, " in progress ");
}

#[test]
fn test_status_titles() {
    assert_eq!(status_title(TaskStatus::Open), "Open");
    assert_eq!(status_title(TaskStatus::InProgress), "In progress");
    assert_eq!(status_title(TaskStatus::Completed), "Completed");
    assert_ne!(status_color(TaskStatus::Open), status_color(TaskStatus::Completed));
}
