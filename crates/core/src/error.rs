use std::result::Result as StdResult;

use thiserror::Error;

/// Validation failures raised before anything reaches the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Invalid import document: {0}")]
    InvalidImport(String),
}

pub type Result<T> = StdResult<T, CoreError>;
