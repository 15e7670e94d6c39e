//! Goals with their subtasks and journal entries.
//!
//! Every subtask mutation is followed by a progress recomputation so the
//! stored percentage never lags behind the checklist.

mod journal;
mod subtasks;

use std::sync::Arc;

use chrono::NaiveDate;
use goalflow_core::env_config::due_soon_days;
use goalflow_core::{
    DeadlineState, Goal, GoalPatch, GoalQuery, JournalEntry, NewGoal, Subtask, today,
};
use goalflow_storage::traits::{GoalStore as _, JournalStore as _, RecordStore};
use serde::Serialize;

use crate::ServiceError;

/// One goal with everything shown on its detail page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDetail {
    pub goal: Goal,
    pub deadline: DeadlineState,
    pub deadline_label: String,
    pub subtasks: Vec<Subtask>,
    pub journal_entries: Vec<JournalEntry>,
}

pub struct GoalService {
    storage: Arc<dyn RecordStore>,
    due_soon_days: i64,
}

impl GoalService {
    #[must_use]
    pub fn new(storage: Arc<dyn RecordStore>) -> Self {
        Self { storage, due_soon_days: due_soon_days() }
    }

    #[must_use]
    pub const fn with_due_soon_days(mut self, days: i64) -> Self {
        self.due_soon_days = days;
        self
    }

    pub async fn create_goal(&self, input: NewGoal) -> Result<Goal, ServiceError> {
        input.validate()?;
        let goal = self.storage.add_goal(input).await?;
        tracing::info!(goal = %goal.id, title = %goal.title, "Goal created");
        Ok(goal)
    }

    /// Goals matching `query`, filtered and sorted. A status filter uses the
    /// status index instead of a full scan.
    pub async fn list_goals(&self, query: &GoalQuery) -> Result<Vec<Goal>, ServiceError> {
        let goals = match query.status {
            Some(status) => self.storage.get_goals_by_status(status).await?,
            None => self.storage.get_goals().await?,
        };
        Ok(query.apply(goals))
    }

    pub async fn get_goal(&self, id: &str) -> Result<Goal, ServiceError> {
        self.storage.get_goal(id).await?.ok_or_else(|| ServiceError::not_found("goal", id))
    }

    /// Goal, deadline, ordered subtasks (after a progress sync) and journal.
    pub async fn goal_detail(&self, id: &str, day: NaiveDate) -> Result<GoalDetail, ServiceError> {
        let subtasks = self.list_subtasks(id).await?;
        let goal = self.get_goal(id).await?;
        let journal_entries = self.storage.get_journal_entries(id).await?;
        let deadline = self.deadline(&goal, day);
        Ok(GoalDetail {
            deadline_label: deadline.label(),
            deadline,
            goal,
            subtasks,
            journal_entries,
        })
    }

    #[must_use]
    pub fn deadline(&self, goal: &Goal, day: NaiveDate) -> DeadlineState {
        DeadlineState::of(goal, day, self.due_soon_days)
    }

    /// Deadline relative to the local calendar date.
    #[must_use]
    pub fn deadline_today(&self, goal: &Goal) -> DeadlineState {
        self.deadline(goal, today())
    }

    /// Applies `patch` and returns the stored result. A progress patch is
    /// refused while the goal has subtasks.
    pub async fn update_goal(&self, id: &str, patch: GoalPatch) -> Result<Goal, ServiceError> {
        patch.validate()?;
        if self.storage.update_goal(id, patch).await? == 0 {
            return Err(ServiceError::not_found("goal", id));
        }
        self.get_goal(id).await
    }

    /// Completed goals become active; active and archived goals become completed.
    pub async fn toggle_status(&self, id: &str) -> Result<Goal, ServiceError> {
        let goal = self.get_goal(id).await?;
        let status = goal.status.toggled();
        tracing::info!(goal = %id, from = %goal.status, to = %status, "Goal status toggled");
        self.update_goal(id, GoalPatch::status(status)).await
    }

    /// Removes the goal with its subtasks and journal entries.
    pub async fn delete_goal(&self, id: &str) -> Result<(), ServiceError> {
        if !self.storage.delete_goal(id).await? {
            return Err(ServiceError::not_found("goal", id));
        }
        tracing::info!(goal = %id, "Goal deleted");
        Ok(())
    }

    async fn sync_progress(&self, goal_id: &str) -> Result<(), ServiceError> {
        if let Some(sync) = self.storage.recompute_goal_progress(goal_id).await?
            && sync.written
        {
            tracing::debug!(goal = %goal_id, progress = sync.progress, "Progress synced");
        }
        Ok(())
    }
}
