use goalflow_core::{JournalEntry, NewJournalEntry};
use goalflow_storage::traits::JournalStore as _;

use super::GoalService;
use crate::ServiceError;

impl GoalService {
    pub async fn add_journal_entry(
        &self,
        input: NewJournalEntry,
    ) -> Result<JournalEntry, ServiceError> {
        input.validate()?;
        Ok(self.storage.add_journal_entry(input).await?)
    }

    /// Newest first.
    pub async fn list_journal_entries(
        &self,
        goal_id: &str,
    ) -> Result<Vec<JournalEntry>, ServiceError> {
        Ok(self.storage.get_journal_entries(goal_id).await?)
    }

    pub async fn edit_journal_entry(&self, id: &str, content: &str) -> Result<(), ServiceError> {
        if self.storage.update_journal_entry(id, content).await? == 0 {
            return Err(ServiceError::not_found("journal entry", id));
        }
        Ok(())
    }

    pub async fn delete_journal_entry(&self, id: &str) -> Result<(), ServiceError> {
        if self.storage.delete_journal_entry(id).await? == 0 {
            return Err(ServiceError::not_found("journal entry", id));
        }
        Ok(())
    }
}
