//! Typed error enum for the service layer.
//!
//! Unifies validation, storage, serialization and file failures so callers
//! can match on the failure mode instead of downcasting.

use goalflow_core::CoreError;
use goalflow_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying validation, storage and IO failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller provided invalid input (blank title, malformed import).
    #[error("invalid input: {0}")]
    Invalid(#[from] CoreError),

    /// Storage operation failed (DB, not found, conflict, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Serialization/deserialization failed in the service layer.
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Export or import file could not be read or written.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl ServiceError {
    pub(crate) fn not_found(entity: &'static str, id: &str) -> Self {
        Self::Storage(StorageError::NotFound { entity, id: id.to_owned() })
    }

    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_transient())
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_not_found())
    }

    /// Whether the write was refused because the record was already in the target state.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Storage(StorageError::Conflict(_)))
    }

    /// Whether the input was rejected before anything was written.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_) | Self::Storage(StorageError::Invalid(_)))
    }
}
