//! Free-form journal entries attached to a goal.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::ids::now_millis;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub goal_id: String,
    /// Rich text (HTML)
    pub content: String,
    #[serde(default = "now_millis")]
    pub created_at: i64,
    #[serde(default = "now_millis")]
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJournalEntry {
    pub goal_id: String,
    pub content: String,
}

impl NewJournalEntry {
    #[must_use]
    pub fn new(goal_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self { goal_id: goal_id.into(), content: content.into() }
    }

    /// # Errors
    /// Returns [`CoreError::MissingField`] for blank content.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.content.trim().is_empty() {
            return Err(CoreError::MissingField("content"));
        }
        Ok(())
    }

    #[must_use]
    pub fn into_entry(self, id: String, now: i64) -> JournalEntry {
        JournalEntry {
            id,
            goal_id: self.goal_id,
            content: self.content,
            created_at: now,
            updated_at: now,
        }
    }
}
