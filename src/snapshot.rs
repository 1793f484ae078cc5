//! Snapshot ingestion.
//!
//! A snapshot is the set of tasks and events the data collaborator hands
//! over for one render. The wire shape is loose: labels are free text and
//! timestamps are strings. This module turns it into typed records and
//! collects a [`ValidationIssue`] for every record that needed a fallback,
//! so that one malformed record never blanks the whole dashboard.
//!
//! Fallbacks:
//! - unknown, missing or non-text task status: kept as [`TaskStatus::Open`]
//! - unknown priority or event status: `None`
//! - unparseable deadline: `None`, so the task is left out of deadline lists
//! - unparseable or missing event date: the event is dropped
//! - wrongly typed text, tag or checklist item: that value is left out
//! - record without a usable id, or not an object: the record is dropped
//! - duplicate id: kept

use crate::entities::{ChecklistItem, Event, EventStatus, Priority, RecordId, Task, TaskStatus};
use crate::error::{RecordKind, SnapshotError, ValidationIssue};
use crate::utils::datetime::parse_timestamp;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

/// Task as it arrives on the wire.
///
/// Only `id` is typed. Every other field is kept as raw JSON and checked
/// during ingestion, so a wrongly typed value costs one field, not the
/// document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTask {
    pub id: RecordId,
    #[serde(default, alias = "title")]
    pub description: Value,
    #[serde(default)]
    pub status: Value,
    #[serde(default, alias = "due_date")]
    pub deadline: Value,
    #[serde(default, alias = "assignedUser")]
    pub assigned_user: Value,
    #[serde(default)]
    pub priority: Value,
    #[serde(default)]
    pub tags: Value,
    #[serde(default)]
    pub checklist: Value,
}

/// Event as it arrives on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    pub id: RecordId,
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub date: Value,
    #[serde(default)]
    pub location: Value,
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    pub tags: Value,
    #[serde(default)]
    pub description: Value,
    #[serde(default, alias = "resourceUrl", alias = "url")]
    pub resource_url: Value,
}

/// Top-level snapshot document: `{ "tasks": [...], "events": [...] }`.
///
/// Records stay untyped until [`Snapshot::from_raw`] reads them one by one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSnapshot {
    #[serde(default)]
    pub tasks: Option<Vec<Value>>,
    #[serde(default)]
    pub events: Option<Vec<Value>>,
}

/// Settings applied while converting raw records.
#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    /// Offset given to timestamps that carry none.
    pub offset: FixedOffset,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }
}

/// Typed records ready for the triage engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    /// In the order supplied, which callers treat as most recent first.
    pub events: Vec<Event>,
}

/// Result of ingestion: the snapshot plus every issue found on the way.
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    pub snapshot: Snapshot,
    pub warnings: Vec<ValidationIssue>,
}

impl Snapshot {
    /// Read and ingest a snapshot file.
    ///
    /// # Errors
    /// Fails only when the file cannot be read or is not valid snapshot JSON.
    pub fn load<P: AsRef<Path>>(path: P, options: &IngestOptions) -> Result<Ingested, SnapshotError> {
        let content = std::fs::read_to_string(&path).map_err(|source| SnapshotError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        let ingested = Self::from_json_str(&content, options)?;

        log::info!(
            "{}: {} ({} tasks, {} events, {} warnings)",
            crate::constants::LOG_SNAPSHOT_LOADED,
            path.as_ref().display(),
            ingested.snapshot.tasks.len(),
            ingested.snapshot.events.len(),
            ingested.warnings.len()
        );
        Ok(ingested)
    }

    /// Parse and ingest a snapshot document.
    ///
    /// # Errors
    /// Fails when `json` is not a snapshot document. Bad values inside
    /// individual records are reported as warnings instead.
    pub fn from_json_str(json: &str, options: &IngestOptions) -> Result<Ingested, SnapshotError> {
        let raw: RawSnapshot = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw, options))
    }

    /// Convert raw records, applying the fallbacks listed in the module docs.
    pub fn from_raw(raw: RawSnapshot, options: &IngestOptions) -> Ingested {
        let mut warnings = Vec::new();

        let mut seen = HashSet::new();
        let tasks = raw
            .tasks
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                let raw_task: RawTask = read_record(RecordKind::Task, index, value, &mut warnings)?;
                if !seen.insert(raw_task.id.clone()) {
                    warnings.push(ValidationIssue::DuplicateId {
                        kind: RecordKind::Task,
                        id: raw_task.id.clone(),
                    });
                }
                Some(ingest_task(raw_task, options, &mut warnings))
            })
            .collect();

        let mut seen = HashSet::new();
        let events = raw
            .events
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                let raw_event: RawEvent = read_record(RecordKind::Event, index, value, &mut warnings)?;
                if !seen.insert(raw_event.id.clone()) {
                    warnings.push(ValidationIssue::DuplicateId {
                        kind: RecordKind::Event,
                        id: raw_event.id.clone(),
                    });
                }
                ingest_event(raw_event, options, &mut warnings)
            })
            .collect();

        for warning in &warnings {
            log::warn!("Snapshot record issue: {warning}");
        }

        Ingested {
            snapshot: Snapshot { tasks, events },
            warnings,
        }
    }
}

/// Decode one array element, dropping it with a warning when it has no usable id
fn read_record<R: DeserializeOwned>(
    kind: RecordKind,
    index: usize,
    value: Value,
    warnings: &mut Vec<ValidationIssue>,
) -> Option<R> {
    match serde_json::from_value(value) {
        Ok(record) => Some(record),
        Err(e) => {
            warnings.push(ValidationIssue::MalformedRecord {
                kind,
                index,
                reason: e.to_string(),
            });
            None
        }
    }
}

/// A string value as is; any other JSON as written
fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Reads the loosely typed fields of one record, reporting what it rejects
struct FieldReader<'w> {
    kind: RecordKind,
    id: RecordId,
    warnings: &'w mut Vec<ValidationIssue>,
}

impl FieldReader<'_> {
    fn reject(&mut self, field: &'static str, value: &Value) {
        self.warnings.push(ValidationIssue::InvalidField {
            kind: self.kind,
            id: self.id.clone(),
            field,
            value: value_text(value),
        });
    }

    fn unknown_status(&mut self, value: &Value) {
        self.warnings.push(ValidationIssue::UnknownStatus {
            kind: self.kind,
            id: self.id.clone(),
            value: value_text(value),
        });
    }

    /// Optional text; null is absent, other non-strings are rejected
    fn text(&mut self, field: &'static str, value: Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(text) => Some(text),
            other => {
                self.reject(field, &other);
                None
            }
        }
    }

    /// A timestamp that must be present and parseable
    fn timestamp(&mut self, field: &'static str, value: &Value, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
        let parsed = value.as_str().and_then(|text| parse_timestamp(text, offset));
        if parsed.is_none() {
            self.warnings.push(ValidationIssue::InvalidTimestamp {
                kind: self.kind,
                id: self.id.clone(),
                field,
                value: value_text(value),
            });
        }
        parsed
    }

    /// A timestamp that may be absent
    fn optional_timestamp(
        &mut self,
        field: &'static str,
        value: &Value,
        offset: FixedOffset,
    ) -> Option<DateTime<FixedOffset>> {
        if value.is_null() {
            return None;
        }
        self.timestamp(field, value, offset)
    }

    /// String tags; other elements are rejected one by one
    fn tags(&mut self, value: Value) -> Vec<String> {
        match value {
            Value::Null => Vec::new(),
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(tag) => Some(tag),
                    other => {
                        self.reject("tags", &other);
                        None
                    }
                })
                .collect(),
            other => {
                self.reject("tags", &other);
                Vec::new()
            }
        }
    }

    /// Checklist items; an unreadable item is rejected and the rest kept
    fn checklist(&mut self, value: Value) -> Option<Vec<ChecklistItem>> {
        match value {
            Value::Null => None,
            Value::Array(items) => Some(
                items
                    .into_iter()
                    .filter_map(|item| match ChecklistItem::deserialize(&item) {
                        Ok(item) => Some(item),
                        Err(_) => {
                            self.reject("checklist", &item);
                            None
                        }
                    })
                    .collect(),
            ),
            other => {
                self.reject("checklist", &other);
                None
            }
        }
    }
}

fn ingest_task(raw: RawTask, options: &IngestOptions, warnings: &mut Vec<ValidationIssue>) -> Task {
    let mut reader = FieldReader {
        kind: RecordKind::Task,
        id: raw.id.clone(),
        warnings,
    };

    let status = match raw.status.as_str().and_then(TaskStatus::from_label) {
        Some(status) => status,
        None => {
            reader.unknown_status(&raw.status);
            TaskStatus::Open
        }
    };

    let priority = if raw.priority.is_null() {
        None
    } else {
        let priority = raw.priority.as_str().and_then(Priority::from_label);
        if priority.is_none() {
            reader.warnings.push(ValidationIssue::UnknownPriority {
                id: raw.id.clone(),
                value: value_text(&raw.priority),
            });
        }
        priority
    };

    let deadline = reader.optional_timestamp("deadline", &raw.deadline, options.offset);
    let description = reader.text("description", raw.description).unwrap_or_default();
    let assigned_user = reader.text("assigned_user", raw.assigned_user);
    let tags = reader.tags(raw.tags);
    let checklist = reader.checklist(raw.checklist);

    Task {
        id: raw.id,
        description,
        status,
        deadline,
        assigned_user,
        priority,
        tags,
        checklist,
    }
}

fn ingest_event(raw: RawEvent, options: &IngestOptions, warnings: &mut Vec<ValidationIssue>) -> Option<Event> {
    let mut reader = FieldReader {
        kind: RecordKind::Event,
        id: raw.id.clone(),
        warnings,
    };

    let date = reader.timestamp("date", &raw.date, options.offset)?;

    let status = if raw.status.is_null() {
        None
    } else {
        let status = raw.status.as_str().and_then(EventStatus::from_label);
        if status.is_none() {
            reader.unknown_status(&raw.status);
        }
        status
    };

    Some(Event {
        name: reader.text("name", raw.name).unwrap_or_default(),
        date,
        location: reader.text("location", raw.location),
        status,
        tags: reader.tags(raw.tags),
        description: reader.text("description", raw.description),
        resource_url: reader.text("resource_url", raw.resource_url),
        id: raw.id,
    })
}
