//! Async trait implementations for SQLite `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use chrono::NaiveDate;
use goalflow_core::{
    Archive, ArchiveSummary, Goal, GoalPatch, GoalStatus, Idea, IdeaPatch, JournalEntry, NewGoal,
    NewIdea, NewJournalEntry, NewSubtask, Quote, Subtask, SubtaskPatch,
};

use crate::Storage;
use crate::error::StorageError;
use crate::storage::{ProgressSync, StorageStats};
use crate::traits::{
    ArchiveStore, GoalStore, IdeaStore, JournalStore, QuoteStore, SubtaskStore,
};

type Result<T> = std::result::Result<T, StorageError>;

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is annotated with a capture kind:
/// - `@ref arg`: `.clone()` a `&T`, pass as `&arg`
/// - `@str arg`: `.to_owned()` a `&str`, pass as `&arg`
/// - `@val arg`: move directly (Copy/owned types)
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture ref $arg:ident) => { let $arg = $arg.clone(); };
    (@capture str $arg:ident) => { let $arg = $arg.to_owned(); };
    (@capture val $arg:ident) => { };
    (@pass ref $arg:ident) => { &$arg };
    (@pass str $arg:ident) => { &$arg };
    (@pass val $arg:ident) => { $arg };
}

// ── GoalStore ────────────────────────────────────────────────────

#[async_trait]
impl GoalStore for Storage {
    async fn add_goal(&self, input: NewGoal) -> Result<Goal> {
        delegate!(self, add_goal, @val input)
    }
    async fn get_goals(&self) -> Result<Vec<Goal>> {
        delegate!(self, get_goals)
    }
    async fn get_goals_by_status(&self, status: GoalStatus) -> Result<Vec<Goal>> {
        delegate!(self, get_goals_by_status, @val status)
    }
    async fn get_goal(&self, id: &str) -> Result<Option<Goal>> {
        delegate!(self, get_goal, @str id)
    }
    async fn update_goal(&self, id: &str, patch: GoalPatch) -> Result<usize> {
        delegate!(self, update_goal, @str id, @val patch)
    }
    async fn delete_goal(&self, id: &str) -> Result<bool> {
        delegate!(self, delete_goal, @str id)
    }
    async fn recompute_goal_progress(&self, goal_id: &str) -> Result<Option<ProgressSync>> {
        delegate!(self, recompute_goal_progress, @str goal_id)
    }
}

// ── SubtaskStore ─────────────────────────────────────────────────

#[async_trait]
impl SubtaskStore for Storage {
    async fn add_subtask(&self, input: NewSubtask) -> Result<Subtask> {
        delegate!(self, add_subtask, @val input)
    }
    async fn get_subtask(&self, id: &str) -> Result<Option<Subtask>> {
        delegate!(self, get_subtask, @str id)
    }
    async fn get_subtasks_for_goal(&self, goal_id: &str) -> Result<Vec<Subtask>> {
        delegate!(self, get_subtasks_for_goal, @str goal_id)
    }
    async fn update_subtask(&self, id: &str, patch: SubtaskPatch) -> Result<usize> {
        delegate!(self, update_subtask, @str id, @val patch)
    }
    async fn delete_subtask(&self, id: &str) -> Result<usize> {
        delegate!(self, delete_subtask, @str id)
    }
}

// ── IdeaStore ────────────────────────────────────────────────────

#[async_trait]
impl IdeaStore for Storage {
    async fn add_idea(&self, input: NewIdea) -> Result<Idea> {
        delegate!(self, add_idea, @val input)
    }
    async fn get_ideas(&self) -> Result<Vec<Idea>> {
        delegate!(self, get_ideas)
    }
    async fn get_idea(&self, id: &str) -> Result<Option<Idea>> {
        delegate!(self, get_idea, @str id)
    }
    async fn update_idea(&self, id: &str, patch: IdeaPatch) -> Result<usize> {
        delegate!(self, update_idea, @str id, @val patch)
    }
    async fn delete_idea(&self, id: &str) -> Result<usize> {
        delegate!(self, delete_idea, @str id)
    }
    async fn convert_idea(&self, idea_id: &str, today: NaiveDate) -> Result<(Idea, Goal)> {
        delegate!(self, convert_idea, @str idea_id, @val today)
    }
}

// ── QuoteStore ───────────────────────────────────────────────────

#[async_trait]
impl QuoteStore for Storage {
    async fn get_quotes(&self) -> Result<Vec<Quote>> {
        delegate!(self, get_quotes)
    }
    async fn get_quote(&self, id: &str) -> Result<Option<Quote>> {
        delegate!(self, get_quote, @str id)
    }
}

// ── JournalStore ─────────────────────────────────────────────────

#[async_trait]
impl JournalStore for Storage {
    async fn add_journal_entry(&self, input: NewJournalEntry) -> Result<JournalEntry> {
        delegate!(self, add_journal_entry, @val input)
    }
    async fn get_journal_entries(&self, goal_id: &str) -> Result<Vec<JournalEntry>> {
        delegate!(self, get_journal_entries, @str goal_id)
    }
    async fn update_journal_entry(&self, id: &str, content: &str) -> Result<usize> {
        delegate!(self, update_journal_entry, @str id, @str content)
    }
    async fn delete_journal_entry(&self, id: &str) -> Result<usize> {
        delegate!(self, delete_journal_entry, @str id)
    }
}

// ── ArchiveStore ─────────────────────────────────────────────────

#[async_trait]
impl ArchiveStore for Storage {
    async fn snapshot(&self) -> Result<Archive> {
        delegate!(self, snapshot)
    }
    async fn replace_all(&self, archive: &Archive) -> Result<ArchiveSummary> {
        delegate!(self, replace_all, @ref archive)
    }
    async fn stats(&self) -> Result<StorageStats> {
        delegate!(self, stats)
    }
}
