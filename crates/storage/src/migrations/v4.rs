//! Migration v4: effort/impact on ideas, journal entries

pub(super) const EFFORT: &str = "effort";
pub(super) const IMPACT: &str = "impact";

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS journal_entries (
    id TEXT PRIMARY KEY,
    goal_id TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_journal_goal ON journal_entries(goal_id);
";
