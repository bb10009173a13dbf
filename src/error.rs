//! Error types for the tracker core

use crate::model::RecordKind;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Business-rule rejections. State is never touched when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Date {date} is outside {earliest}..={latest}")]
    DateOutOfRange {
        date: NaiveDate,
        earliest: NaiveDate,
        latest: NaiveDate,
    },

    #[error("Name must have at least {min} characters, got {actual}")]
    NameTooShort { min: usize, actual: usize },

    #[error("Amount must be greater than zero")]
    NotPositive,

    #[error("Salary cannot be negative")]
    Negative,

    #[error("Amount must not exceed {max}")]
    TooLarge { max: Decimal },

    #[error("Amount must have at most {max_scale} decimal places")]
    TooPrecise { max_scale: u32 },
}

/// Durable store failures
#[derive(Error, Debug)]
pub enum StorageError {
    /// The host refused to hand out a store (private mode, disabled storage, ...)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read '{key}': {reason}")]
    Read { key: String, reason: String },

    #[error("Failed to write '{key}': {reason}")]
    Write { key: String, reason: String },

    #[error("Failed to remove '{key}': {reason}")]
    Remove { key: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Ledger errors
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The target record vanished between read and mutate
    #[error("{kind} {id} not found")]
    NotFound { kind: RecordKind, id: u64 },

    /// The in-memory change was applied but could not be persisted
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl LedgerError {
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            LedgerError::Validation(err) => Some(err),
            _ => None,
        }
    }
}
