//! Domain records consumed by the triage engine and the dashboard.
//!
//! Records are plain values: the data collaborator builds them (usually via
//! [`crate::snapshot`]) and every consumer borrows them immutably.

pub mod event;
pub mod task;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use event::{Event, EventStatus};
pub use task::{ChecklistItem, ChecklistProgress, Priority, Task, TaskStatus};

/// Opaque identifier shared by tasks and events.
///
/// The wire format sometimes carries numeric ids; they are kept as their
/// decimal text so that ids compare uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "IdRepr", into = "String")]
pub struct RecordId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl From<IdRepr> for RecordId {
    fn from(repr: IdRepr) -> Self {
        match repr {
            IdRepr::Text(text) => Self(text),
            IdRepr::Unsigned(n) => Self(n.to_string()),
            IdRepr::Signed(n) => Self(n.to_string()),
        }
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl RecordId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a free-form label before matching it against a closed set.
///
/// Trims, lowercases and folds spaces and hyphens into underscores, so
/// "In Progress", "in-progress" and "IN_PROGRESS" all become "in_progress".
pub(crate) fn normalize_label(label: &str) -> String {
    label
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}
