use async_trait::async_trait;
use goalflow_core::{Goal, GoalPatch, GoalStatus, NewGoal, NewSubtask, Subtask, SubtaskPatch};

use crate::error::StorageError;
use crate::storage::ProgressSync;

/// Goal lifecycle operations.
#[async_trait]
pub trait GoalStore: Send + Sync {
    /// Persist a new goal with a fresh id and timestamps.
    async fn add_goal(&self, input: NewGoal) -> Result<Goal, StorageError>;

    async fn get_goals(&self) -> Result<Vec<Goal>, StorageError>;

    async fn get_goals_by_status(&self, status: GoalStatus) -> Result<Vec<Goal>, StorageError>;

    async fn get_goal(&self, id: &str) -> Result<Option<Goal>, StorageError>;

    /// Merge a patch. Returns rows affected (0 for an unknown id).
    async fn update_goal(&self, id: &str, patch: GoalPatch) -> Result<usize, StorageError>;

    /// Delete goal, subtasks and journal entries. Returns `true` if the goal existed.
    async fn delete_goal(&self, id: &str) -> Result<bool, StorageError>;

    /// Re-derive progress from subtasks. `None` for an unknown goal.
    async fn recompute_goal_progress(
        &self,
        goal_id: &str,
    ) -> Result<Option<ProgressSync>, StorageError>;
}

/// Subtask operations.
#[async_trait]
pub trait SubtaskStore: Send + Sync {
    async fn add_subtask(&self, input: NewSubtask) -> Result<Subtask, StorageError>;

    async fn get_subtask(&self, id: &str) -> Result<Option<Subtask>, StorageError>;

    async fn get_subtasks_for_goal(&self, goal_id: &str) -> Result<Vec<Subtask>, StorageError>;

    async fn update_subtask(&self, id: &str, patch: SubtaskPatch) -> Result<usize, StorageError>;

    async fn delete_subtask(&self, id: &str) -> Result<usize, StorageError>;
}
