//! History listing use case

use crate::domain::{EntryFilter, JournalEntry};
use crate::error::{Result, TeachlogError};
use crate::infrastructure::KeyValueStore;

/// Service for reading the entry history
pub struct ListEntriesService<S> {
    store: S,
}

impl<S: KeyValueStore> ListEntriesService<S> {
    pub fn new(store: S) -> Self {
        ListEntriesService { store }
    }

    /// Entries matching the filter, newest first
    pub fn list(&self, filter: &EntryFilter) -> Result<Vec<JournalEntry>> {
        let entries = self.store.load_entries()?;
        Ok(filter.apply(&entries).into_iter().cloned().collect())
    }

    pub fn show(&self, id: i64) -> Result<JournalEntry> {
        self.store
            .load_entries()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or(TeachlogError::EntryNotFound(id))
    }
}
