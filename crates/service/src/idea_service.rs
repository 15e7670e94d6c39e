use std::sync::Arc;

use chrono::NaiveDate;
use goalflow_core::{Goal, Idea, IdeaPatch, NewIdea, today};
use goalflow_storage::traits::{IdeaStore as _, RecordStore};

use crate::ServiceError;

pub struct IdeaService {
    storage: Arc<dyn RecordStore>,
}

impl IdeaService {
    #[must_use]
    pub fn new(storage: Arc<dyn RecordStore>) -> Self {
        Self { storage }
    }

    pub async fn add_idea(&self, input: NewIdea) -> Result<Idea, ServiceError> {
        input.validate()?;
        Ok(self.storage.add_idea(input).await?)
    }

    /// Unconverted first, then newest first.
    pub async fn list_ideas(&self) -> Result<Vec<Idea>, ServiceError> {
        let mut ideas = self.storage.get_ideas().await?;
        ideas.sort_by(Idea::display_order);
        Ok(ideas)
    }

    pub async fn update_idea(&self, id: &str, patch: IdeaPatch) -> Result<Idea, ServiceError> {
        patch.validate()?;
        if self.storage.update_idea(id, patch).await? == 0 {
            return Err(ServiceError::not_found("idea", id));
        }
        self.storage.get_idea(id).await?.ok_or_else(|| ServiceError::not_found("idea", id))
    }

    pub async fn delete_idea(&self, id: &str) -> Result<(), ServiceError> {
        if self.storage.delete_idea(id).await? == 0 {
            return Err(ServiceError::not_found("idea", id));
        }
        Ok(())
    }

    /// Promotes the idea into a goal due 30 days from today.
    pub async fn convert_idea(&self, id: &str) -> Result<(Idea, Goal), ServiceError> {
        self.convert_idea_on(id, today()).await
    }

    pub async fn convert_idea_on(
        &self,
        id: &str,
        day: NaiveDate,
    ) -> Result<(Idea, Goal), ServiceError> {
        Ok(self.storage.convert_idea(id, day).await?)
    }
}
