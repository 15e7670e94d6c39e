//! Whole-store export document and import validation.
//!
//! The document is a single JSON object:
//! `{ goals, subtasks, ideas?, quotes?, journalEntries?, exportedAt, version }`.
//! Import validation is deliberately shallow: each entry must carry its key
//! fields, nothing more. Referential integrity between records is not checked.
//! `null` fields count as absent.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::EXPORT_FILE_PREFIX;
use crate::error::CoreError;
use crate::goal::Goal;
use crate::idea::Idea;
use crate::ids::today;
use crate::journal::JournalEntry;
use crate::quote::Quote;
use crate::subtask::Subtask;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archive {
    pub goals: Vec<Goal>,
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub ideas: Vec<Idea>,
    /// `None` on import keeps the quotes already in the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quotes: Option<Vec<Quote>>,
    #[serde(default)]
    pub journal_entries: Vec<JournalEntry>,
    /// Informational on import
    #[serde(default)]
    pub exported_at: Option<i64>,
    /// Informational on import
    #[serde(default)]
    pub version: Option<i32>,
}

/// Record counts written by an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveSummary {
    pub goals: usize,
    pub subtasks: usize,
    pub ideas: usize,
    pub quotes: usize,
    pub journal_entries: usize,
}

impl Archive {
    #[must_use]
    pub fn summary(&self) -> ArchiveSummary {
        ArchiveSummary {
            goals: self.goals.len(),
            subtasks: self.subtasks.len(),
            ideas: self.ideas.len(),
            quotes: self.quotes.as_ref().map_or(0, Vec::len),
            journal_entries: self.journal_entries.len(),
        }
    }
}

/// Required keys per collection, in document order.
const COLLECTIONS: &[(&str, bool, &[&str])] = &[
    ("goals", true, &["id", "title", "targetDate"]),
    ("subtasks", true, &["id", "goalId", "title"]),
    ("ideas", false, &["id", "content"]),
    ("quotes", false, &["id", "text"]),
    ("journalEntries", false, &["id", "goalId", "content"]),
];

fn check_collection(
    root: &Map<String, Value>,
    name: &str,
    required: bool,
    keys: &[&str],
) -> Result<(), CoreError> {
    let Some(value) = root.get(name) else {
        if required {
            return Err(CoreError::InvalidImport(format!("missing `{name}` array")));
        }
        return Ok(());
    };
    let entries = value
        .as_array()
        .ok_or_else(|| CoreError::InvalidImport(format!("`{name}` is not an array")))?;
    for (index, entry) in entries.iter().enumerate() {
        let object = entry
            .as_object()
            .ok_or_else(|| CoreError::InvalidImport(format!("{name}[{index}] is not an object")))?;
        if let Some(key) = keys.iter().find(|k| !object.contains_key(**k)) {
            return Err(CoreError::InvalidImport(format!("{name}[{index}] is missing `{key}`")));
        }
    }
    Ok(())
}

fn records_mut<'a>(
    root: &'a mut Map<String, Value>,
    name: &str,
) -> impl Iterator<Item = &'a mut Map<String, Value>> {
    root.get_mut(name)
        .and_then(Value::as_array_mut)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object_mut)
}

fn drop_null_fields(root: &mut Map<String, Value>) {
    for (name, _, _) in COLLECTIONS {
        for record in records_mut(root, name) {
            record.retain(|_, value| !value.is_null());
        }
    }
}

/// Rounds and clamps numeric goal progress into 0..=100.
fn clamp_progress(root: &mut Map<String, Value>) {
    for goal in records_mut(root, "goals") {
        let Some(raw) = goal.get("progress").and_then(Value::as_f64) else {
            continue;
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let clamped = raw.round().clamp(0.0, 100.0) as u8;
        if (f64::from(clamped) - raw).abs() > f64::EPSILON {
            tracing::warn!(
                goal = ?goal.get("id"),
                progress = raw,
                clamped,
                "clamping imported progress"
            );
        }
        goal.insert("progress".to_owned(), Value::from(clamped));
    }
}

/// A subtask without `targetDate` takes its goal's date, or today's when the
/// goal is not in the document.
fn backfill_subtask_dates(root: &mut Map<String, Value>) {
    let goal_dates: HashMap<String, Value> = records_mut(root, "goals")
        .filter_map(|goal| {
            let id = goal.get("id")?.as_str()?.to_owned();
            Some((id, goal.get("targetDate")?.clone()))
        })
        .collect();
    let fallback = Value::from(today().format("%Y-%m-%d").to_string());

    for subtask in records_mut(root, "subtasks") {
        if subtask.contains_key("targetDate") {
            continue;
        }
        let date = subtask
            .get("goalId")
            .and_then(Value::as_str)
            .and_then(|goal_id| goal_dates.get(goal_id))
            .unwrap_or(&fallback)
            .clone();
        subtask.insert("targetDate".to_owned(), date);
    }
}

/// Validates a parsed document and converts it, back-filling absent optional
/// fields with their defaults.
///
/// # Errors
/// Returns [`CoreError::InvalidImport`] if the shape is wrong anywhere; no
/// partial result is produced.
pub fn parse_import(mut document: Value) -> Result<Archive, CoreError> {
    let root = document
        .as_object_mut()
        .ok_or_else(|| CoreError::InvalidImport("document is not a JSON object".to_owned()))?;
    drop_null_fields(root);
    for (name, required, keys) in COLLECTIONS {
        check_collection(root, name, *required, keys)?;
    }
    clamp_progress(root);
    backfill_subtask_dates(root);

    serde_json::from_value(document)
        .map_err(|e| CoreError::InvalidImport(format!("malformed record: {e}")))
}

/// `goalflow_data_export_<YYYYMMDD>_<HHMMSS>.json` for the given instant.
#[must_use]
pub fn export_file_name<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{EXPORT_FILE_PREFIX}_{}.json", at.format("%Y%m%d_%H%M%S"))
}
