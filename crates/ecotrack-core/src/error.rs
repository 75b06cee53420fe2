//! Core error types for ecotrack-core.
//!
//! This module defines the error hierarchy using thiserror. Input errors are
//! not represented here: unparsable quantities are clamped to zero at the
//! input boundary and never surface as faults.

use std::path::PathBuf;
use thiserror::Error;

use crate::tracker::ResetLevel;

/// Core error type for ecotrack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// State store errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Persisted state that breaks an engine invariant
    #[error("State invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),

    /// Reset refused
    #[error("Reset refused: {0}")]
    Reset(#[from] ResetError),

    /// Export sink failures
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// State store errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open database connection
    #[error("Failed to open state store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("State store is locked")]
    Locked,

    /// Home/config directory could not be prepared
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Personal target must be a positive, finite number of kilograms
    #[error("Invalid personal target {0}: must be a positive number of kg")]
    InvalidTarget(f64),
}

/// Broken engine invariants, only reachable through decoding external data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Weekly window must hold exactly seven slots
    #[error("weekly window has {0} slots, expected 7")]
    WindowLength(usize),

    /// Weekly window slots must be consecutive days, oldest first
    #[error("weekly window slot {index} ({date}) does not follow the previous day")]
    WindowOrder { index: usize, date: chrono::NaiveDate },

    /// Ledger holds more than one entry for a date
    #[error("history ledger has duplicate entries for {0}")]
    DuplicateDate(chrono::NaiveDate),
}

/// Reset errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetError {
    /// Destructive reset requested without confirmation
    #[error("'{0}' requires explicit confirmation")]
    ConfirmationRequired(ResetLevel),
}

/// Export sink errors.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Destination refused the document (clipboard denied, directory missing)
    #[error("Export sink '{sink}' unavailable: {message}")]
    SinkUnavailable { sink: String, message: String },

    /// Writing the document failed
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _msg) => {
                if e.code == rusqlite::ErrorCode::DatabaseLocked {
                    StorageError::Locked
                } else {
                    StorageError::QueryFailed(err.to_string())
                }
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Storage(err.into())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
