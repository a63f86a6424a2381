use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize)]
pub enum SettleError {
    /// No balances have ever been recorded for the scope
    #[error("Scope {0} not found")]
    ScopeNotFound(String),

    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    /// Backend failure reported by a `BalanceStore`
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}

impl SettleError {
    pub fn invalid_input(field: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        SettleError::InvalidInput(
            field.to_string(),
            FieldError {
                field: field.to_string(),
                title: title.into(),
                description: description.into(),
            },
        )
    }
}
