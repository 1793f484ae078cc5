//! Error types for snapshot loading and record validation.

use crate::entities::RecordId;
use std::path::PathBuf;

/// A data-quality problem found on one record during ingestion.
///
/// Issues are collected, never fatal: the record is kept (or, for an event
/// without a usable date or a record without a usable id, dropped) and the
/// rest of the snapshot still loads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("{kind} '{id}': {field} '{value}' is not a valid timestamp")]
    InvalidTimestamp {
        kind: RecordKind,
        id: RecordId,
        field: &'static str,
        value: String,
    },

    #[error("{kind} '{id}': unknown status '{value}'")]
    UnknownStatus { kind: RecordKind, id: RecordId, value: String },

    #[error("task '{id}': unknown priority '{value}'")]
    UnknownPriority { id: RecordId, value: String },

    #[error("{kind} '{id}': unexpected {field} value {value}")]
    InvalidField {
        kind: RecordKind,
        id: RecordId,
        field: &'static str,
        value: String,
    },

    #[error("{kind} '{id}': duplicate id")]
    DuplicateId { kind: RecordKind, id: RecordId },

    #[error("{kind} #{index}: unreadable record ({reason})")]
    MalformedRecord {
        kind: RecordKind,
        index: usize,
        reason: String,
    },
}

impl ValidationIssue {
    /// Id of the record the issue was raised on, when it had one.
    #[must_use]
    pub fn record_id(&self) -> Option<&RecordId> {
        match self {
            Self::InvalidTimestamp { id, .. }
            | Self::UnknownStatus { id, .. }
            | Self::UnknownPriority { id, .. }
            | Self::InvalidField { id, .. }
            | Self::DuplicateId { id, .. } => Some(id),
            Self::MalformedRecord { .. } => None,
        }
    }
}

/// Which kind of record a [`ValidationIssue`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Task,
    Event,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Task => f.write_str("task"),
            RecordKind::Event => f.write_str("event"),
        }
    }
}

/// Failure to read or decode a snapshot as a whole.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}
