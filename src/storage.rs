//! JSON persistence for the contact book.
//!
//! The on-disk form is a single JSON object mapping contact names to
//! `{ "phones": [...], "birthday": ... }`, pretty-printed with 2-space
//! indentation and alphabetically sorted keys.

use crate::book::{ContactDirectory, DirectorySnapshot};
use crate::error::{StorageError, StorageResult};
use std::fs;
use std::path::Path;
use tracing::info;

/// Load the directory from `path`.
///
/// A missing file is not an error: a first run starts with an empty book.
pub fn load(path: &Path) -> StorageResult<ContactDirectory> {
    if !path.exists() {
        info!("no contact file at {}, starting empty", path.display());
        return Ok(ContactDirectory::new());
    }

    let text = fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let snapshot: DirectorySnapshot = serde_json::from_str(&text)?;
    Ok(ContactDirectory::load(snapshot)?)
}

/// Write the directory snapshot to `path`.
pub fn save(path: &Path, directory: &ContactDirectory) -> StorageResult<()> {
    let text = serde_json::to_string_pretty(&directory.dump())?;
    fs::write(path, text).map_err(|source| StorageError::Write {
        path: path.display().to_string(),
        source,
    })?;
    info!("saved {} contacts to {}", directory.len(), path.display());
    Ok(())
}
