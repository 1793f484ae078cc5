use super::{normalize_label, RecordId};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Workflow stage of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Open,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Canonical wire label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Open => "open",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Match a wire label against the closed set, accepting a few aliases.
    ///
    /// Returns `None` for anything outside the set; the caller decides the
    /// fallback.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "open" | "todo" | "to_do" => Some(TaskStatus::Open),
            "in_progress" | "inprogress" | "doing" => Some(TaskStatus::InProgress),
            "completed" | "complete" | "done" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

/// Task priority, ordered from least to most pressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Normal,
    High,
    Critical,
}

impl Priority {
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "low" => Some(Priority::Low),
            "normal" | "medium" => Some(Priority::Normal),
            "high" => Some(Priority::High),
            "critical" | "urgent" => Some(Priority::Critical),
            _ => None,
        }
    }
}

/// A sub-item of a task's checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// Completed vs. total checklist items, as shown on a board card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistProgress {
    pub done: usize,
    pub total: usize,
}

impl ChecklistProgress {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.done == self.total
    }
}

/// A unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: RecordId,
    pub description: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub deadline: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub assigned_user: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Display order only.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub checklist: Option<Vec<ChecklistItem>>,
}

impl Task {
    /// Create a task with every optional field empty.
    pub fn new(id: impl Into<RecordId>, description: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            status,
            deadline: None,
            assigned_user: None,
            priority: None,
            tags: Vec::new(),
            checklist: None,
        }
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: DateTime<FixedOffset>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    #[must_use]
    pub fn with_checklist(mut self, items: Vec<ChecklistItem>) -> Self {
        self.checklist = Some(items);
        self
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Checklist completion, or `None` when the task has no checklist.
    ///
    /// An empty checklist reports `0/0`.
    #[must_use]
    pub fn checklist_progress(&self) -> Option<ChecklistProgress> {
        self.checklist.as_ref().map(|items| ChecklistProgress {
            done: items.iter().filter(|item| item.completed).count(),
            total: items.len(),
        })
    }
}
