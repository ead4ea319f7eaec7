//! Personal contact book - a command-line address book with validated
//! fields, paged browsing, and JSON persistence.
//!
//! # Architecture
//!
//! - **domain**: validated value objects for names, phones, and birthdays
//! - **book**: the contact record aggregate and the directory that owns it
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **storage**: loading and saving the JSON contact file
//! - **repl**: command parsing and the interactive session handlers

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod repl;
pub mod storage;

pub use book::{ContactDirectory, ContactRecord, DirectorySnapshot, RecordSnapshot};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError, StorageError};
