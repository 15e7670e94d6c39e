//! Storage layer for goalflow
//!
//! Embedded SQLite record store behind an r2d2 pool, with versioned schema
//! migrations and async store traits for the service layer.

mod error;
mod migrations;
mod sqlite_async;
mod storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use error::StorageError;
pub use migrations::SCHEMA_VERSION;
pub use storage::{ProgressSync, Storage, StorageStats, Table};
