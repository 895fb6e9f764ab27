//! Unified application error type.
//! All modules (db, core, api, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    /// An id-keyed update touched more than one row. Cannot happen while
    /// `id` is the table's primary key.
    #[error("Update of record {id} affected {affected} rows")]
    AnomalousUpdate { id: i64, affected: usize },

    // ---------------------------
    // Caller errors
    // ---------------------------
    #[error("Invalid {field}: {value}")]
    Encoding { field: &'static str, value: String },

    #[error("Unknown person: {0}")]
    UnknownPerson(String),

    #[error("Duplicate record for the same person and date: {detail}")]
    ConstraintViolation { detail: String },

    // ---------------------------
    // Config / transport
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    pub fn encoding(field: &'static str, value: impl ToString) -> Self {
        AppError::Encoding {
            field,
            value: value.to_string(),
        }
    }

    /// True for errors the caller can fix by changing its input.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            AppError::Encoding { .. }
                | AppError::UnknownPerson(_)
                | AppError::ConstraintViolation { .. }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
