//! Journal aggregate root

use crate::domain::date::DateStyle;
use crate::domain::entry::{EntryDraft, EntryPatch, JournalEntry};
use crate::domain::roster::SchoolData;
use crate::error::{Result, TeachlogError};
use chrono::{DateTime, Local};

/// Complete application state: entries (newest first) and the class roster map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    pub entries: Vec<JournalEntry>,
    pub school: SchoolData,
}

impl Journal {
    pub fn new(entries: Vec<JournalEntry>, school: SchoolData) -> Self {
        Journal { entries, school }
    }

    /// Millisecond timestamp id, bumped past the largest existing id on collision
    pub fn next_id(&self, now: DateTime<Local>) -> Result<i64> {
        let candidate = now.timestamp_millis();
        match self.entries.iter().map(|e| e.id).max() {
            Some(max) if max >= candidate => max.checked_add(1).ok_or_else(|| {
                TeachlogError::Validation(format!(
                    "No entry id left after {}; delete or re-import the entry with that id",
                    max
                ))
            }),
            _ => Ok(candidate),
        }
    }

    /// Validate and prepend a new entry. The list is untouched on error.
    pub fn add_entry(
        &mut self,
        draft: EntryDraft,
        now: DateTime<Local>,
        style: DateStyle,
    ) -> Result<&JournalEntry> {
        let id = self.next_id(now)?;
        let entry = draft.into_entry(id, style.format(now.date_naive()))?;
        self.entries.insert(0, entry);
        Ok(&self.entries[0])
    }

    pub fn get(&self, id: i64) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn position(&self, id: i64) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(TeachlogError::EntryNotFound(id))
    }

    /// Replace the entry with `id` by the merged fields, in place
    pub fn update_entry(&mut self, id: i64, patch: &EntryPatch) -> Result<&JournalEntry> {
        let index = self.position(id)?;
        let updated = patch.apply(&self.entries[index])?;
        self.entries[index] = updated;
        Ok(&self.entries[index])
    }

    /// Remove exactly the entry with `id`
    pub fn delete_entry(&mut self, id: i64) -> Result<JournalEntry> {
        let index = self.position(id)?;
        Ok(self.entries.remove(index))
    }
}
