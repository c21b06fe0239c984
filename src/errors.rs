//! Unified application error type.
//! Every layer (db, core, cli, ui) returns AppError so the binary can report
//! failures the same way regardless of where they happened.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database error during {operation} ({key}): {source}")]
    Storage {
        operation: &'static str,
        key: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("No {entity} found with id {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: String, end: String },

    #[error("Invalid budget: {0}")]
    InvalidBudget(String),

    #[error("Invalid detail: {0}")]
    InvalidDetail(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Interactive prompt
    // ---------------------------
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    /// Wrap a rusqlite error with the failing operation and its key.
    pub fn storage(operation: &'static str, key: impl ToString, source: rusqlite::Error) -> Self {
        AppError::Storage {
            operation,
            key: key.to_string(),
            source,
        }
    }

    /// True for validation failures the interactive layer can re-prompt on.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_)
                | AppError::InvalidDateRange { .. }
                | AppError::InvalidBudget(_)
                | AppError::InvalidDetail(_)
                | AppError::InvalidSelection(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
