//! Shared constants for goalflow.

/// Characters of idea content kept as the converted goal's title.
pub const GOAL_TITLE_MAX_CHARS: usize = 100;

/// Characters of idea content kept as the converted goal's short description.
pub const GOAL_SHORT_DESCRIPTION_MAX_CHARS: usize = 150;

/// Days between conversion and the converted goal's target date.
pub const CONVERSION_TARGET_DAYS: u64 = 30;

/// Icon name given to goals created from ideas.
pub const CONVERTED_GOAL_ICON: &str = "Lightbulb";

/// Default window (in days) in which an active goal counts as due soon.
pub const DEFAULT_DUE_SOON_DAYS: i64 = 7;

/// Default `SQLite` connection pool size.
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;

/// Prefix of export file names.
pub const EXPORT_FILE_PREFIX: &str = "goalflow_data_export";
