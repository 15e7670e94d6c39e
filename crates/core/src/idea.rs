//! Idea box entries and their promotion into goals.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::{
    CONVERSION_TARGET_DAYS, CONVERTED_GOAL_ICON, GOAL_SHORT_DESCRIPTION_MAX_CHARS,
    GOAL_TITLE_MAX_CHARS,
};
use crate::error::CoreError;
use crate::goal::{GoalStatus, NewGoal, Priority};
use crate::ids::now_millis;

/// Effort or impact estimate. `Unset` serializes as the empty string.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    #[default]
    #[serde(rename = "")]
    Unset,
    Low,
    Medium,
    High,
}

impl Rating {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Unset => "",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for Rating {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(Self::Unset),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(CoreError::InvalidValue { field: "rating", value: other.to_owned() }),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unstructured note that may later be promoted into a goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub effort: Rating,
    #[serde(default)]
    pub impact: Rating,
    /// Once true, never reverts
    #[serde(default)]
    pub is_converted: bool,
    #[serde(default = "now_millis")]
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converted_goal_id: Option<String>,
}

impl Idea {
    /// Display order: unconverted first, then newest first.
    #[must_use]
    pub fn display_order(a: &Self, b: &Self) -> Ordering {
        a.is_converted.cmp(&b.is_converted).then(b.created_at.cmp(&a.created_at))
    }

    /// Goal seeded from this idea's content, due [`CONVERSION_TARGET_DAYS`] after `today`.
    #[must_use]
    pub fn goal_draft(&self, today: NaiveDate) -> NewGoal {
        let target_date =
            today.checked_add_days(Days::new(CONVERSION_TARGET_DAYS)).unwrap_or(today);
        NewGoal::new(truncate_chars(&self.content, GOAL_TITLE_MAX_CHARS), target_date, Priority::Medium)
            .short_description(truncate_chars(&self.content, GOAL_SHORT_DESCRIPTION_MAX_CHARS))
            .status(GoalStatus::Active)
            .icon(CONVERTED_GOAL_ICON)
    }
}

/// First `max` characters of `text` (Unicode scalar values, not bytes).
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIdea {
    pub content: String,
    #[serde(default)]
    pub effort: Rating,
    #[serde(default)]
    pub impact: Rating,
}

impl NewIdea {
    #[must_use]
    pub fn new(content: impl Into<String>, effort: Rating, impact: Rating) -> Self {
        Self { content: content.into(), effort, impact }
    }

    /// # Errors
    /// Returns [`CoreError::MissingField`] for blank content.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.content.trim().is_empty() {
            return Err(CoreError::MissingField("content"));
        }
        Ok(())
    }

    /// New ideas are never converted.
    #[must_use]
    pub fn into_idea(self, id: String, now: i64) -> Idea {
        Idea {
            id,
            content: self.content,
            effort: self.effort,
            impact: self.impact,
            is_converted: false,
            created_at: now,
            converted_goal_id: None,
        }
    }
}

/// Partial update for an idea. The conversion flag and link are not patchable;
/// they change only through conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaPatch {
    pub content: Option<String>,
    pub effort: Option<Rating>,
    pub impact: Option<Rating>,
}

impl IdeaPatch {
    /// # Errors
    /// Rejects blank content.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.content.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(CoreError::MissingField("content"));
        }
        Ok(())
    }

    pub fn apply(self, idea: &mut Idea) {
        if let Some(v) = self.content {
            idea.content = v;
        }
        if let Some(v) = self.effort {
            idea.effort = v;
        }
        if let Some(v) = self.impact {
            idea.impact = v;
        }
    }
}
