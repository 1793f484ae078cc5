use super::{normalize_label, RecordId};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Lifecycle stage of a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Planning,
    Approved,
    InProgress,
    Completed,
    Cancelled,
}

impl EventStatus {
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "planning" | "planned" => Some(EventStatus::Planning),
            "approved" => Some(EventStatus::Approved),
            "in_progress" | "inprogress" | "ongoing" => Some(EventStatus::InProgress),
            "completed" | "done" => Some(EventStatus::Completed),
            "cancelled" | "canceled" => Some(EventStatus::Cancelled),
            _ => None,
        }
    }

    /// Whether the event is finished or called off.
    #[must_use]
    pub fn is_closed(self) -> bool {
        matches!(self, EventStatus::Completed | EventStatus::Cancelled)
    }
}

/// A calendar occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: RecordId,
    pub name: String,
    pub date: DateTime<FixedOffset>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: Option<EventStatus>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub resource_url: Option<String>,
}

impl Event {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>, date: DateTime<FixedOffset>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date,
            location: None,
            status: None,
            tags: Vec::new(),
            description: None,
            resource_url: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.status = Some(status);
        self
    }
}
