//! Add entry use case

use crate::domain::entry::attendance_for_roster;
use crate::domain::{Attendance, AttendanceMap, DateStyle, EntryDraft, Journal, JournalEntry};
use crate::error::{Result, TeachlogError};
use crate::infrastructure::KeyValueStore;
use chrono::{DateTime, Local};
use log::info;

/// Form input for a new entry
#[derive(Debug, Clone, Default)]
pub struct AddEntryRequest {
    pub class: String,
    pub subject: String,
    pub note: String,
    /// Record attendance for the class roster
    pub record_attendance: bool,
    /// Students not present; implies `record_attendance`
    pub overrides: Vec<(String, Attendance)>,
}

/// Service for writing new journal entries
pub struct AddEntryService<S> {
    store: S,
    date_style: DateStyle,
}

impl<S: KeyValueStore> AddEntryService<S> {
    pub fn new(store: S, date_style: DateStyle) -> Self {
        AddEntryService { store, date_style }
    }

    /// Validate, prepend and persist a new entry
    pub fn execute(&self, request: AddEntryRequest, now: DateTime<Local>) -> Result<JournalEntry> {
        let mut journal = self.store.load_journal()?;

        let mut draft = EntryDraft::new(&request.class, &request.subject, &request.note);
        if request.record_attendance || !request.overrides.is_empty() {
            let attendance = roster_attendance(&journal, &request.class, &request.overrides)?;
            draft = draft.with_attendance(attendance);
        }

        let entry = journal.add_entry(draft, now, self.date_style)?.clone();
        self.store.save_entries(&journal.entries)?;

        info!("Added entry {} for class {}", entry.id, entry.class);
        Ok(entry)
    }
}

/// Attendance for the roster of `class`, which must exist and have students
pub(crate) fn roster_attendance(
    journal: &Journal,
    class: &str,
    overrides: &[(String, Attendance)],
) -> Result<AttendanceMap> {
    let class = class.trim();
    match journal.school.roster(class) {
        Some(roster) if !roster.is_empty() => attendance_for_roster(roster, overrides),
        _ => Err(TeachlogError::Validation(format!(
            "Class '{}' has no roster; set one with 'teachlog class roster'",
            class
        ))),
    }
}
