//! Unified application error type.
//! All modules (db, storage, core, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Database / storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Storage write failed: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month format: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid time format: {0} (expected H:M:S, M:S or seconds)")]
    InvalidTime(String),

    #[error("Invalid measurement value: {0}")]
    InvalidValue(String),

    #[error("Invalid measurement unit: {0}")]
    InvalidUnit(String),

    #[error("Invalid habit type: {0} (expected 'good' or 'bad')")]
    InvalidHabitType(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Habit name cannot be empty")]
    EmptyName,

    #[error("No habit matches '{0}'")]
    HabitNotFound(String),

    #[error("'{0}' matches more than one habit, use a longer id")]
    AmbiguousHabit(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
