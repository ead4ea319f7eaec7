//! The address-book data model: records and the directory that owns them.

pub mod directory;
pub mod record;

pub use directory::{ContactDirectory, DirectorySnapshot};
pub use record::{ContactRecord, RecordSnapshot};
