//! Storage overview for the settings screen

use crate::error::Result;
use crate::infrastructure::KeyValueStore;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub entries: usize,
    pub classes: usize,
    pub students: usize,
    pub location: PathBuf,
}

/// Count what is stored
pub fn status<S: KeyValueStore>(store: &S, location: PathBuf) -> Result<Status> {
    let journal = store.load_journal()?;
    Ok(Status {
        entries: journal.entries.len(),
        classes: journal.school.len(),
        students: journal.school.iter().map(|(_, roster)| roster.len()).sum(),
        location,
    })
}
