//! Checklist items scoped to a single goal.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::ids::now_millis;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    pub id: String,
    /// Parent goal
    pub goal_id: String,
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
    pub target_date: NaiveDate,
    #[serde(default = "now_millis")]
    pub created_at: i64,
}

impl Subtask {
    /// Display order: incomplete items first, then oldest first.
    #[must_use]
    pub fn display_order(a: &Self, b: &Self) -> Ordering {
        a.is_completed.cmp(&b.is_completed).then(a.created_at.cmp(&b.created_at))
    }
}

/// Input for creating a subtask under an existing goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubtask {
    pub goal_id: String,
    pub title: String,
    pub target_date: NaiveDate,
}

impl NewSubtask {
    #[must_use]
    pub fn new(goal_id: impl Into<String>, title: impl Into<String>, target_date: NaiveDate) -> Self {
        Self { goal_id: goal_id.into(), title: title.into(), target_date }
    }

    /// # Errors
    /// Returns [`CoreError::MissingField`] when the title is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::MissingField("title"));
        }
        Ok(())
    }

    #[must_use]
    pub fn into_subtask(self, id: String, now: i64) -> Subtask {
        Subtask {
            id,
            goal_id: self.goal_id,
            title: self.title,
            is_completed: false,
            target_date: self.target_date,
            created_at: now,
        }
    }
}

/// Partial update for a subtask. Subtasks carry no modification timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtaskPatch {
    pub title: Option<String>,
    pub is_completed: Option<bool>,
    pub target_date: Option<NaiveDate>,
}

impl SubtaskPatch {
    #[must_use]
    pub fn completed(value: bool) -> Self {
        Self { is_completed: Some(value), ..Self::default() }
    }

    /// # Errors
    /// Rejects a blank title.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(CoreError::MissingField("title"));
        }
        Ok(())
    }

    pub fn apply(self, subtask: &mut Subtask) {
        if let Some(v) = self.title {
            subtask.title = v;
        }
        if let Some(v) = self.is_completed {
            subtask.is_completed = v;
        }
        if let Some(v) = self.target_date {
            subtask.target_date = v;
        }
    }
}
