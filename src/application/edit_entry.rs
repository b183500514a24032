//! Edit entry use case

use crate::application::add_entry::roster_attendance;
use crate::domain::{Attendance, EntryPatch, JournalEntry};
use crate::error::{Result, TeachlogError};
use crate::infrastructure::KeyValueStore;
use log::info;

/// What to do with the attendance of an edited entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AttendanceChange {
    #[default]
    Keep,
    Clear,
    /// Re-record from the roster of the (possibly new) class
    Record(Vec<(String, Attendance)>),
}

#[derive(Debug, Clone, Default)]
pub struct EditEntryRequest {
    pub class: Option<String>,
    pub subject: Option<String>,
    pub note: Option<String>,
    pub attendance: AttendanceChange,
}

/// Service for editing an existing entry in place
pub struct EditEntryService<S> {
    store: S,
}

impl<S: KeyValueStore> EditEntryService<S> {
    pub fn new(store: S) -> Self {
        EditEntryService { store }
    }

    pub fn execute(&self, id: i64, request: EditEntryRequest) -> Result<JournalEntry> {
        let mut journal = self.store.load_journal()?;

        let current = journal.get(id).ok_or(TeachlogError::EntryNotFound(id))?;
        let class = request
            .class
            .clone()
            .unwrap_or_else(|| current.class.clone());

        let attendance = match &request.attendance {
            AttendanceChange::Keep => None,
            AttendanceChange::Clear => Some(None),
            AttendanceChange::Record(overrides) => {
                Some(Some(roster_attendance(&journal, &class, overrides)?))
            }
        };

        let patch = EntryPatch {
            class: request.class,
            subject: request.subject,
            note: request.note,
            attendance,
        };
        if patch.is_empty() {
            return Err(TeachlogError::Validation(
                "Nothing to change; pass --class, --subject, --note or attendance options"
                    .to_string(),
            ));
        }

        let updated = journal.update_entry(id, &patch)?.clone();
        self.store.save_entries(&journal.entries)?;

        info!("Updated entry {}", id);
        Ok(updated)
    }
}
