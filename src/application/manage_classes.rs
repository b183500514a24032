//! Class and roster management use case

use crate::application::pin::AdminSession;
use crate::domain::roster::parse_roster_text;
use crate::domain::SchoolData;
use crate::error::Result;
use crate::infrastructure::KeyValueStore;
use log::info;

/// Service for adding, deleting and rostering classes. Requires the PIN.
pub struct ClassService<S> {
    session: AdminSession<S>,
}

impl<S: KeyValueStore> ClassService<S> {
    pub fn new(session: AdminSession<S>) -> Self {
        ClassService { session }
    }

    /// Add an empty class; duplicate names are rejected
    pub fn add(&self, name: &str) -> Result<()> {
        let store = self.session.store();
        let mut school = store.load_school()?;
        school.add_class(name)?;
        store.save_school(&school)?;

        info!("Added class {}", name.trim());
        Ok(())
    }

    /// Delete a class and its roster. Historical entries are untouched.
    pub fn delete(&self, name: &str) -> Result<Vec<String>> {
        let store = self.session.store();
        let mut school = store.load_school()?;
        let removed = school.delete_class(name)?;
        store.save_school(&school)?;

        info!("Deleted class {} ({} students)", name.trim(), removed.len());
        Ok(removed)
    }

    /// Replace a class roster from newline-delimited text
    pub fn set_roster(&self, name: &str, text: &str) -> Result<Vec<String>> {
        let store = self.session.store();
        let mut school = store.load_school()?;
        let students = parse_roster_text(text);
        school.set_roster(name, students.clone())?;
        store.save_school(&school)?;

        info!("Saved roster of {} ({} students)", name.trim(), students.len());
        Ok(students)
    }
}

/// Read-only view of all classes
pub fn list_classes<S: KeyValueStore>(store: &S) -> Result<SchoolData> {
    store.load_school()
}
