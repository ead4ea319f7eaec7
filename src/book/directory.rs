//! The contact directory: an insertion-ordered collection of records.

use super::record::{ContactRecord, RecordSnapshot};
use crate::error::{BookError, BookResult};
use std::collections::BTreeMap;
use std::slice::Chunks;

/// Persisted form of a whole directory, keyed by contact name.
///
/// A `BTreeMap` keeps the persisted keys alphabetical; the in-memory
/// directory tracks insertion order independently.
pub type DirectorySnapshot = BTreeMap<String, RecordSnapshot>;

/// The contact book: records in insertion order, names unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDirectory {
    records: Vec<ContactRecord>,
}

impl ContactDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the directory.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }

    /// Add a record to the directory.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateName` if a record with the same name
    /// already exists; the directory is unchanged in that case.
    pub fn add_record(&mut self, record: ContactRecord) -> BookResult<()> {
        if self.position(record.name().as_str()).is_some() {
            return Err(BookError::DuplicateName(record.name().as_str().to_string()));
        }
        self.records.push(record);
        Ok(())
    }

    /// Retrieve a record by name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NameNotFound` if no record has that name.
    pub fn get(&self, name: &str) -> BookResult<&ContactRecord> {
        let index = self
            .position(name)
            .ok_or_else(|| BookError::NameNotFound(name.to_string()))?;
        Ok(&self.records[index])
    }

    /// Retrieve a record by name for mutation.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NameNotFound` if no record has that name.
    pub fn get_mut(&mut self, name: &str) -> BookResult<&mut ContactRecord> {
        let index = self
            .position(name)
            .ok_or_else(|| BookError::NameNotFound(name.to_string()))?;
        Ok(&mut self.records[index])
    }

    /// Remove and return the record with the given name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NameNotFound` if no record has that name.
    pub fn remove(&mut self, name: &str) -> BookResult<ContactRecord> {
        let index = self
            .position(name)
            .ok_or_else(|| BookError::NameNotFound(name.to_string()))?;
        Ok(self.records.remove(index))
    }

    /// Iterate over all records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    /// Records whose name, phones or birthday contain `term`, in directory
    /// order. Matching is case-insensitive.
    pub fn search(&self, term: &str) -> Vec<&ContactRecord> {
        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.search_text().to_lowercase().contains(&needle))
            .collect()
    }

    /// Partition the records into consecutive groups of `page_size` in
    /// insertion order; the last group may be smaller. Each call starts a
    /// fresh enumeration.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidPageSize` if `page_size` is zero.
    pub fn paginate(&self, page_size: usize) -> BookResult<Chunks<'_, ContactRecord>> {
        if page_size == 0 {
            return Err(BookError::InvalidPageSize(page_size));
        }
        Ok(self.records.chunks(page_size))
    }

    /// Rebuild a directory from its persisted form.
    ///
    /// Every entry goes through [`add_record`](Self::add_record), so a
    /// duplicate name inside the snapshot fails the same way a live
    /// duplicate add would.
    pub fn load(snapshot: DirectorySnapshot) -> BookResult<Self> {
        let mut directory = Self::new();
        for (name, record) in snapshot {
            directory.add_record(ContactRecord::from_snapshot(&name, record)?)?;
        }
        Ok(directory)
    }

    /// Flatten the directory into its persisted form.
    pub fn dump(&self) -> DirectorySnapshot {
        self.records
            .iter()
            .map(|r| (r.name().as_str().to_string(), r.to_snapshot()))
            .collect()
    }
}
