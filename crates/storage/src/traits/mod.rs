//! Async store traits.
//!
//! One trait per record kind. `Storage` implements all of them by moving the
//! synchronous calls onto tokio's blocking pool.

pub mod goal;
pub mod records;

pub use goal::{GoalStore, SubtaskStore};
pub use records::{ArchiveStore, IdeaStore, JournalStore, QuoteStore};

/// Every store trait at once, for holding the backend as `Arc<dyn RecordStore>`.
pub trait RecordStore:
    GoalStore + SubtaskStore + IdeaStore + QuoteStore + JournalStore + ArchiveStore
{
}

impl<T> RecordStore for T where
    T: GoalStore + SubtaskStore + IdeaStore + QuoteStore + JournalStore + ArchiveStore
{
}
