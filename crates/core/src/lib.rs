//! Core types and rules for goalflow
//!
//! Domain records shared across all other crates, the derived-progress rule,
//! list ordering/filtering and the import/export document format.

pub mod archive;
pub mod constants;
mod deadline;
pub mod env_config;
mod error;
mod goal;
mod idea;
mod ids;
mod journal;
mod progress;
mod query;
mod quote;
mod subtask;

pub use archive::{Archive, ArchiveSummary, export_file_name, parse_import};
pub use deadline::DeadlineState;
pub use error::*;
pub use goal::*;
pub use idea::*;
pub use ids::{new_id, now_millis, today};
pub use journal::*;
pub use progress::{percent_of, progress_percent};
pub use query::*;
pub use quote::*;
pub use subtask::*;
