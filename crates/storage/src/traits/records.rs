use async_trait::async_trait;
use chrono::NaiveDate;
use goalflow_core::{
    Archive, ArchiveSummary, Goal, Idea, IdeaPatch, JournalEntry, NewIdea, NewJournalEntry, Quote,
};

use crate::error::StorageError;
use crate::storage::StorageStats;

/// Idea box operations.
#[async_trait]
pub trait IdeaStore: Send + Sync {
    async fn add_idea(&self, input: NewIdea) -> Result<Idea, StorageError>;

    async fn get_ideas(&self) -> Result<Vec<Idea>, StorageError>;

    async fn get_idea(&self, id: &str) -> Result<Option<Idea>, StorageError>;

    async fn update_idea(&self, id: &str, patch: IdeaPatch) -> Result<usize, StorageError>;

    async fn delete_idea(&self, id: &str) -> Result<usize, StorageError>;

    /// Atomically create a goal from the idea and link them.
    async fn convert_idea(
        &self,
        idea_id: &str,
        today: NaiveDate,
    ) -> Result<(Idea, Goal), StorageError>;
}

#[async_trait]
pub trait QuoteStore: Send + Sync {
    async fn get_quotes(&self) -> Result<Vec<Quote>, StorageError>;

    async fn get_quote(&self, id: &str) -> Result<Option<Quote>, StorageError>;
}

/// Per-goal journal operations.
#[async_trait]
pub trait JournalStore: Send + Sync {
    async fn add_journal_entry(&self, input: NewJournalEntry)
    -> Result<JournalEntry, StorageError>;

    /// Newest first.
    async fn get_journal_entries(&self, goal_id: &str) -> Result<Vec<JournalEntry>, StorageError>;

    async fn update_journal_entry(&self, id: &str, content: &str) -> Result<usize, StorageError>;

    async fn delete_journal_entry(&self, id: &str) -> Result<usize, StorageError>;
}

/// Whole-store export and import.
#[async_trait]
pub trait ArchiveStore: Send + Sync {
    async fn snapshot(&self) -> Result<Archive, StorageError>;

    /// Replace all records in one transaction.
    async fn replace_all(&self, archive: &Archive) -> Result<ArchiveSummary, StorageError>;

    async fn stats(&self) -> Result<StorageStats, StorageError>;
}
