//! Migration v3: ideas and quotes

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS ideas (
    id TEXT PRIMARY KEY,
    content TEXT NOT NULL,
    is_converted INTEGER NOT NULL DEFAULT 0,
    created_at INTEGER NOT NULL,
    converted_goal_id TEXT
);

CREATE TABLE IF NOT EXISTS quotes (
    id TEXT PRIMARY KEY,
    text TEXT NOT NULL,
    author TEXT,
    created_at INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_ideas_converted ON ideas(is_converted);
CREATE INDEX IF NOT EXISTS idx_ideas_created ON ideas(created_at);
";
