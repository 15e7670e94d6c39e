//! Goal records, their enumerations and the create/patch inputs.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::ids::now_millis;

/// Priority level of a goal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL_VARIANTS_STR: &'static str = "low|medium|high";

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(CoreError::InvalidValue { field: "priority", value: other.to_owned() }),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a goal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    #[default]
    Active,
    Completed,
    Archived,
}

impl GoalStatus {
    pub const ALL_VARIANTS_STR: &'static str = "active|completed|archived";

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }

    /// Completed goals go back to active; anything else becomes completed.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Completed => Self::Active,
            Self::Active | Self::Archived => Self::Completed,
        }
    }
}

impl FromStr for GoalStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "archived" => Ok(Self::Archived),
            other => Err(CoreError::InvalidValue { field: "status", value: other.to_owned() }),
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level user objective.
///
/// Optional text fields default to the empty string so that documents
/// written before those fields existed still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    /// Rich text (HTML)
    #[serde(default)]
    pub description: String,
    pub target_date: NaiveDate,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: GoalStatus,
    /// Completion percentage, 0-100. Derived from subtasks once any exist.
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub icon: String,
    #[serde(default = "now_millis")]
    pub created_at: i64,
    #[serde(default = "now_millis")]
    pub updated_at: i64,
}

/// Input for creating a goal. Title, target date and priority are required;
/// the rest default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct NewGoal {
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub target_date: NaiveDate,
    pub category: String,
    pub priority: Priority,
    pub status: GoalStatus,
    pub icon: String,
}

impl NewGoal {
    #[must_use]
    pub fn new(title: impl Into<String>, target_date: NaiveDate, priority: Priority) -> Self {
        Self {
            title: title.into(),
            short_description: String::new(),
            description: String::new(),
            target_date,
            category: String::new(),
            priority,
            status: GoalStatus::Active,
            icon: String::new(),
        }
    }

    #[must_use]
    pub fn short_description(mut self, value: impl Into<String>) -> Self {
        self.short_description = value.into();
        self
    }

    #[must_use]
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = value.into();
        self
    }

    #[must_use]
    pub fn category(mut self, value: impl Into<String>) -> Self {
        self.category = value.into();
        self
    }

    #[must_use]
    pub const fn status(mut self, value: GoalStatus) -> Self {
        self.status = value;
        self
    }

    #[must_use]
    pub fn icon(mut self, value: impl Into<String>) -> Self {
        self.icon = value.into();
        self
    }

    /// # Errors
    /// Returns [`CoreError::MissingField`] when the title is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::MissingField("title"));
        }
        Ok(())
    }

    /// Materializes the record. New goals start at zero progress.
    #[must_use]
    pub fn into_goal(self, id: String, now: i64) -> Goal {
        Goal {
            id,
            title: self.title,
            short_description: self.short_description,
            description: self.description,
            target_date: self.target_date,
            category: self.category,
            priority: self.priority,
            status: self.status,
            progress: 0,
            icon: self.icon,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a goal. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPatch {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub target_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<GoalStatus>,
    pub progress: Option<u8>,
    pub icon: Option<String>,
}

impl GoalPatch {
    #[must_use]
    pub fn progress(value: u8) -> Self {
        Self { progress: Some(value), ..Self::default() }
    }

    #[must_use]
    pub fn status(value: GoalStatus) -> Self {
        Self { status: Some(value), ..Self::default() }
    }

    /// # Errors
    /// Rejects a blank title or a progress above 100.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(CoreError::MissingField("title"));
        }
        if let Some(p) = self.progress
            && p > 100
        {
            return Err(CoreError::InvalidValue { field: "progress", value: p.to_string() });
        }
        Ok(())
    }

    /// Merges the patch into `goal` and stamps `updated_at`.
    pub fn apply(self, goal: &mut Goal, now: i64) {
        if let Some(v) = self.title {
            goal.title = v;
        }
        if let Some(v) = self.short_description {
            goal.short_description = v;
        }
        if let Some(v) = self.description {
            goal.description = v;
        }
        if let Some(v) = self.target_date {
            goal.target_date = v;
        }
        if let Some(v) = self.category {
            goal.category = v;
        }
        if let Some(v) = self.priority {
            goal.priority = v;
        }
        if let Some(v) = self.status {
            goal.status = v;
        }
        if let Some(v) = self.progress {
            goal.progress = v;
        }
        if let Some(v) = self.icon {
            goal.icon = v;
        }
        goal.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" low ".parse::<Priority>().unwrap(), Priority::Low);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn status_toggle_flips_between_active_and_completed() {
        assert_eq!(GoalStatus::Active.toggled(), GoalStatus::Completed);
        assert_eq!(GoalStatus::Completed.toggled(), GoalStatus::Active);
        assert_eq!(GoalStatus::Archived.toggled(), GoalStatus::Completed);
    }

    #[test]
    fn blank_title_is_rejected() {
        let input = NewGoal::new("   ", date(2030, 1, 1), Priority::Low);
        assert_eq!(input.validate(), Err(CoreError::MissingField("title")));
    }

    #[test]
    fn new_goal_starts_at_zero_progress() {
        let goal = NewGoal::new("Run a marathon", date(2030, 1, 1), Priority::High)
            .category("Fitness")
            .into_goal("g1".to_owned(), 42);
        assert_eq!(goal.progress, 0);
        assert_eq!(goal.created_at, 42);
        assert_eq!(goal.updated_at, 42);
        assert_eq!(goal.status, GoalStatus::Active);
        assert_eq!(goal.icon, "");
    }

    #[test]
    fn patch_merges_only_present_fields_and_stamps_updated_at() {
        let mut goal = NewGoal::new("Learn Rust", date(2030, 1, 1), Priority::Medium)
            .short_description("ownership first")
            .into_goal("g1".to_owned(), 10);
        let patch = GoalPatch { title: Some("Learn Rust well".to_owned()), ..GoalPatch::default() };
        patch.apply(&mut goal, 20);
        assert_eq!(goal.title, "Learn Rust well");
        assert_eq!(goal.short_description, "ownership first");
        assert_eq!(goal.created_at, 10);
        assert_eq!(goal.updated_at, 20);
    }

    #[test]
    fn patch_rejects_progress_above_100() {
        assert!(GoalPatch::progress(101).validate().is_err());
        assert!(GoalPatch::progress(100).validate().is_ok());
    }

    #[test]
    fn goal_deserializes_from_older_document_without_icon() {
        let json = r#"{"id":"g1","title":"Old","targetDate":"2024-05-01","priority":"low",
            "status":"active","progress":50,"createdAt":1,"updatedAt":2}"#;
        let goal: Goal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.icon, "");
        assert_eq!(goal.short_description, "");
        assert_eq!(goal.progress, 50);
    }
}
