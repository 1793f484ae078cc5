use chrono::{DateTime, FixedOffset};
use taskboard::entities::{Event, EventStatus, Task, TaskStatus};
use taskboard::triage::{
    classify_deadlines, classify_deadlines_with, partition_by_status, recent_events, recent_events_by_date, summarize,
    urgency_bucket, urgency_bucket_within, DeadlinePolicy, UrgencyBucket, DEFAULT_BOARD_ORDER,
};
use taskboard::ui::components::badge::urgency_text;
use taskboard::utils::datetime::parse_timestamp;

fn at(value: &str) -> DateTime<FixedOffset> {
    parse_timestamp(value, FixedOffset::east_opt(0).unwrap()).unwrap()
}

fn task(id: &str, status: TaskStatus, deadline: Option<&str>) -> Task {
    let task = Task::new(id, format!("task {id}"), status);
    match deadline {
        Some(deadline) => task.with_deadline(at(deadline)),
        None => task,
    }
}

fn ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|task| task.id.to_string()).collect()
}

#[test]
fn test_boundary_example() {
    let now = at("2024-01-10T00:00");
    let tasks = vec![
        task("A", TaskStatus::Open, Some("2024-01-09")),
        task("B", TaskStatus::Open, Some("2024-01-10")),
        task("C", TaskStatus::Open, Some("2024-01-17")),
        task("D", TaskStatus::Completed, Some("2024-01-09")),
    ];

    let result = classify_deadlines(&tasks, now);
    assert_eq!(ids(&result), vec!["A", "B"]);

    let a = urgency_bucket(tasks[0].deadline.unwrap(), now);
    assert_eq!(a, UrgencyBucket::Overdue { days: 1 });
    assert_eq!(urgency_text(a), "overdue by 1 day");
    assert_eq!(urgency_bucket(tasks[1].deadline.unwrap(), now), UrgencyBucket::DueToday);
}

#[test]
fn test_limit_keeps_all_overdue_and_earliest_upcoming() {
    let now = at("2024-01-10T12:00");
    // Deliberately out of order
    let tasks = vec![
        task("up5", TaskStatus::Open, Some("2024-01-16T09:00")),
        task("od2", TaskStatus::InProgress, Some("2024-01-08T09:00")),
        task("up1", TaskStatus::Open, Some("2024-01-10T13:00")),
        task("up4", TaskStatus::Open, Some("2024-01-15T09:00")),
        task("od1", TaskStatus::Open, Some("2024-01-01T09:00")),
        task("up2", TaskStatus::InProgress, Some("2024-01-11T09:00")),
        task("od3", TaskStatus::Open, Some("2024-01-10T11:59")),
        task("up3", TaskStatus::Open, Some("2024-01-12T09:00")),
    ];

    let result = classify_deadlines(&tasks, now);
    assert_eq!(result.len(), 5);
    assert_eq!(ids(&result), vec!["od1", "od2", "od3", "up1", "up2"]);
}

#[test]
fn test_overdue_precedes_upcoming_regardless_of_distance() {
    let now = at("2024-06-01T00:00");
    let tasks = vec![
        task("soon", TaskStatus::Open, Some("2024-06-01T00:30")),
        task("ancient", TaskStatus::Open, Some("2023-01-01")),
    ];

    let result = classify_deadlines(&tasks, now);
    assert_eq!(ids(&result), vec!["ancient", "soon"]);
}

#[test]
fn test_equal_deadlines_keep_input_order() {
    let now = at("2024-01-10T00:00");
    let tasks = vec![
        task("second-late", TaskStatus::Open, Some("2024-01-12")),
        task("first", TaskStatus::Open, Some("2024-01-11")),
        task("second-early", TaskStatus::Open, Some("2024-01-12")),
        task("past-b", TaskStatus::Open, Some("2024-01-05")),
        task("past-a", TaskStatus::Open, Some("2024-01-05")),
    ];

    let result = classify_deadlines(&tasks, now);
    assert_eq!(
        ids(&result),
        vec!["past-b", "past-a", "first", "second-late", "second-early"]
    );
}

#[test]
fn test_deadlines_ascend_within_each_group() {
    let now = at("2024-03-15T08:00");
    let tasks: Vec<Task> = [
        "2024-03-20", "2024-03-01", "2024-03-16", "2024-02-10", "2024-03-15T09:00", "2024-03-14",
    ]
    .iter()
    .enumerate()
    .map(|(i, deadline)| task(&i.to_string(), TaskStatus::Open, Some(*deadline)))
    .collect();

    let policy = DeadlinePolicy { window_days: 7, limit: 100 };
    let result = classify_deadlines_with(&tasks, now, &policy);
    let deadlines: Vec<_> = result.iter().map(|task| task.deadline.unwrap()).collect();

    let split = deadlines.iter().position(|deadline| *deadline >= now).unwrap();
    assert!(deadlines[..split].windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(deadlines[split..].windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(result.len(), 6);
}

#[test]
fn test_tasks_without_deadline_are_ignored() {
    let now = at("2024-01-10T00:00");
    let tasks = vec![task("none", TaskStatus::Open, None), task("done", TaskStatus::Completed, None)];
    assert!(classify_deadlines(&tasks, now).is_empty());
}

#[test]
fn test_empty_input_returns_empty() {
    let tasks: Vec<Task> = Vec::new();
    assert!(classify_deadlines(&tasks, at("2024-01-10T00:00")).is_empty());
}

#[test]
fn test_classification_is_idempotent() {
    let now = at("2024-01-10T00:00");
    let tasks = vec![
        task("1", TaskStatus::Open, Some("2024-01-12")),
        task("2", TaskStatus::Open, Some("2024-01-02")),
        task("3", TaskStatus::InProgress, Some("2024-01-11")),
    ];
    let snapshot = tasks.clone();

    let first = ids(&classify_deadlines(&tasks, now));
    let second = ids(&classify_deadlines(&tasks, now));
    assert_eq!(first, second);
    assert_eq!(tasks, snapshot);
}

#[test]
fn test_custom_window_widens_upcoming() {
    let now = at("2024-01-10T00:00");
    let tasks = vec![task("C", TaskStatus::Open, Some("2024-01-17"))];

    let policy = DeadlinePolicy { window_days: 14, limit: 5 };
    assert_eq!(ids(&classify_deadlines_with(&tasks, now, &policy)), vec!["C"]);
}

#[test]
fn test_urgency_uses_calendar_days() {
    let now = at("2024-01-10T10:00");
    // 20 hours away, across midnight
    assert_eq!(urgency_bucket(at("2024-01-11T06:00"), now), UrgencyBucket::DueTomorrow);
    assert_eq!(urgency_bucket(at("2024-01-10T23:59"), now), UrgencyBucket::DueToday);
    assert_eq!(urgency_bucket(at("2024-01-14T00:00"), now), UrgencyBucket::DueWithinDays(4));
    assert_eq!(urgency_bucket(at("2024-01-07T23:00"), now), UrgencyBucket::Overdue { days: 3 });
}

#[test]
fn test_urgency_within_horizon() {
    let now = at("2024-01-10T10:00");
    assert_eq!(urgency_bucket_within(at("2024-01-20"), now, 7), UrgencyBucket::Later);
    assert_eq!(
        urgency_bucket_within(at("2024-01-15"), now, 7),
        UrgencyBucket::DueWithinDays(5)
    );
    assert_eq!(urgency_bucket_within(at("2024-01-11"), now, 1), UrgencyBucket::DueTomorrow);
}

#[test]
fn test_urgency_text_formats() {
    assert_eq!(urgency_text(UrgencyBucket::Overdue { days: 3 }), "overdue by 3 days");
    assert_eq!(urgency_text(UrgencyBucket::DueToday), "today");
    assert_eq!(urgency_text(UrgencyBucket::DueTomorrow), "tomorrow");
    assert_eq!(urgency_text(UrgencyBucket::DueWithinDays(4)), "in 4 days");
}

#[test]
fn test_partition_places_every_listed_task_once() {
    let tasks = vec![
        task("1", TaskStatus::Open, None),
        task("2", TaskStatus::Completed, None),
        task("3", TaskStatus::InProgress, None),
        task("4", TaskStatus::Open, None),
        task("5", TaskStatus::Completed, None),
    ];

    let partition = partition_by_status(&tasks, &DEFAULT_BOARD_ORDER);
    let order: Vec<_> = partition.columns().iter().map(|column| column.status).collect();
    assert_eq!(order, vec![TaskStatus::Completed, TaskStatus::InProgress, TaskStatus::Open]);

    assert_eq!(ids(partition.get(TaskStatus::Open).unwrap()), vec!["1", "4"]);
    assert_eq!(ids(partition.get(TaskStatus::Completed).unwrap()), vec!["2", "5"]);
    assert_eq!(ids(partition.get(TaskStatus::InProgress).unwrap()), vec!["3"]);
    assert_eq!(partition.placed(), tasks.len());
    assert_eq!(partition.dropped(), 0);
}

#[test]
fn test_partition_drops_unlisted_statuses() {
    let tasks = vec![
        task("1", TaskStatus::Open, None),
        task("2", TaskStatus::Completed, None),
        task("3", TaskStatus::Open, None),
    ];

    let partition = partition_by_status(&tasks, &[TaskStatus::Open]);
    assert_eq!(partition.columns().len(), 1);
    assert_eq!(partition.placed(), 2);
    assert_eq!(partition.dropped(), 1);
    assert!(partition.get(TaskStatus::Completed).is_none());
}

#[test]
fn test_partition_collapses_repeated_statuses() {
    let tasks = vec![task("1", TaskStatus::Open, None), task("2", TaskStatus::InProgress, None)];

    let partition = partition_by_status(
        &tasks,
        &[TaskStatus::InProgress, TaskStatus::Open, TaskStatus::InProgress],
    );
    assert_eq!(partition.columns().len(), 2);
    assert_eq!(partition.columns()[0].status, TaskStatus::InProgress);
    assert_eq!(partition.placed(), 2);
}

fn events(count: usize) -> Vec<Event> {
    (0..count)
        .map(|i| Event::new(i.to_string(), format!("event {i}"), at(&format!("2024-01-{:02}", i + 1))))
        .collect()
}

#[test]
fn test_recent_events_takes_first_entries_unsorted() {
    let events = events(10);
    let recent = recent_events(&events, 5);
    let names: Vec<_> = recent.iter().map(|event| event.name.as_str()).collect();
    assert_eq!(names, vec!["event 0", "event 1", "event 2", "event 3", "event 4"]);
}

#[test]
fn test_recent_events_by_date_sorts_newest_first() {
    let events = events(10);
    let recent = recent_events_by_date(&events, 3);
    let names: Vec<_> = recent.iter().map(|event| event.name.as_str()).collect();
    assert_eq!(names, vec!["event 9", "event 8", "event 7"]);
}

#[test]
fn test_recent_events_with_fewer_events_than_limit() {
    let events = events(2);
    assert_eq!(recent_events(&events, 5).len(), 2);
}

#[test]
fn test_summary_counts() {
    let now = at("2024-01-10T09:00");
    let tasks = vec![
        task("overdue", TaskStatus::Open, Some("2024-01-09")),
        task("today", TaskStatus::InProgress, Some("2024-01-10T17:00")),
        task("later", TaskStatus::Open, Some("2024-01-20")),
        task("done", TaskStatus::Completed, Some("2024-01-01")),
    ];
    let events = vec![
        Event::new("e1", "past", at("2024-01-01")),
        Event::new("e2", "planned", at("2024-01-12")).with_status(EventStatus::Approved),
        Event::new("e3", "called off", at("2024-01-12")).with_status(EventStatus::Cancelled),
    ];

    let summary = summarize(&tasks, &events, now);
    assert_eq!(summary.total_tasks, 4);
    assert_eq!(summary.open, 2);
    assert_eq!(summary.in_progress, 1);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.overdue, 1);
    assert_eq!(summary.due_today, 1);
    assert_eq!(summary.total_events, 3);
    assert_eq!(summary.upcoming_events, 1);
    assert_eq!(summary.completion_percent(), 25);
}

#[test]
fn test_summary_of_empty_snapshot() {
    let tasks: Vec<Task> = Vec::new();
    let summary = summarize(&tasks, &[], at("2024-01-10T09:00"));
    assert_eq!(summary.total_tasks, 0);
    assert_eq!(summary.completion_percent(), 0);
}
