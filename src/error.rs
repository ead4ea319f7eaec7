//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur during record and directory operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number is already on the record
    #[error("Phone number '{0}' has already been added")]
    DuplicatePhone(String),

    /// The phone number is not on the record
    #[error("Phone number '{0}' is not on this record")]
    PhoneNotFound(String),

    /// A record with this name already exists in the directory
    #[error("Contact '{0}' is already in the book")]
    DuplicateName(String),

    /// No record with this name exists in the directory
    #[error("Contact '{0}' is not in the book")]
    NameNotFound(String),

    /// The record has no birthday set
    #[error("No birthday set for '{0}'")]
    NoBirthday(String),

    /// Page size for paged enumeration must be positive
    #[error("Page size must be greater than 0, got {0}")]
    InvalidPageSize(usize),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while loading or saving the contact file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading the contact file failed
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// Writing the contact file failed
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    /// The file content is not a valid snapshot
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot violates a book invariant (e.g. duplicate names)
    #[error(transparent)]
    Book(#[from] BookError),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;
