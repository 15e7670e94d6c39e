//! Migration v2: `short_description` and `icon` columns on goals
//!
//! Column additions go through `add_column_if_not_exists`; existing rows are
//! backfilled with the empty string by the column default.

pub(super) const SHORT_DESCRIPTION: &str = "short_description";
pub(super) const ICON: &str = "icon";
pub(super) const TEXT_EMPTY_DEF: &str = "TEXT NOT NULL DEFAULT ''";
