use goalflow_core::{NewSubtask, Subtask, SubtaskPatch};
use goalflow_storage::traits::{GoalStore as _, SubtaskStore as _};

use super::GoalService;
use crate::ServiceError;

impl GoalService {
    pub async fn add_subtask(&self, input: NewSubtask) -> Result<Subtask, ServiceError> {
        input.validate()?;
        let subtask = self.storage.add_subtask(input).await?;
        self.sync_progress(&subtask.goal_id).await?;
        Ok(subtask)
    }

    /// Incomplete first, then oldest first. Loading the list also brings the
    /// goal's stored progress back in line with it.
    pub async fn list_subtasks(&self, goal_id: &str) -> Result<Vec<Subtask>, ServiceError> {
        if self.storage.get_goal(goal_id).await?.is_none() {
            return Err(ServiceError::not_found("goal", goal_id));
        }
        let mut subtasks = self.storage.get_subtasks_for_goal(goal_id).await?;
        self.sync_progress(goal_id).await?;
        subtasks.sort_by(Subtask::display_order);
        Ok(subtasks)
    }

    pub async fn update_subtask(
        &self,
        id: &str,
        patch: SubtaskPatch,
    ) -> Result<Subtask, ServiceError> {
        patch.validate()?;
        let existing = self.require_subtask(id).await?;
        if self.storage.update_subtask(id, patch).await? == 0 {
            return Err(ServiceError::not_found("subtask", id));
        }
        self.sync_progress(&existing.goal_id).await?;
        self.require_subtask(id).await
    }

    pub async fn set_subtask_completed(
        &self,
        id: &str,
        completed: bool,
    ) -> Result<Subtask, ServiceError> {
        self.update_subtask(id, SubtaskPatch::completed(completed)).await
    }

    pub async fn rename_subtask(&self, id: &str, title: &str) -> Result<Subtask, ServiceError> {
        let patch = SubtaskPatch { title: Some(title.to_owned()), ..SubtaskPatch::default() };
        self.update_subtask(id, patch).await
    }

    pub async fn delete_subtask(&self, id: &str) -> Result<(), ServiceError> {
        let existing = self.require_subtask(id).await?;
        self.storage.delete_subtask(id).await?;
        self.sync_progress(&existing.goal_id).await
    }

    async fn require_subtask(&self, id: &str) -> Result<Subtask, ServiceError> {
        self.storage.get_subtask(id).await?.ok_or_else(|| ServiceError::not_found("subtask", id))
    }
}
