//! Backup import use case

use crate::application::pin::AdminSession;
use crate::domain::Backup;
use crate::error::{Result, TeachlogError};
use crate::infrastructure::KeyValueStore;
use log::info;
use std::fs;
use std::path::Path;

/// Service for restoring a backup over the current state. Requires the PIN.
pub struct ImportService<S> {
    session: AdminSession<S>,
}

impl<S: KeyValueStore> ImportService<S> {
    pub fn new(session: AdminSession<S>) -> Self {
        ImportService { session }
    }

    /// Read and validate a backup file without touching stored state
    pub fn read(&self, path: &Path) -> Result<Backup> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TeachlogError::InvalidBackup(format!("file not found: {}", path.display()))
            } else {
                TeachlogError::Io(e)
            }
        })?;
        Backup::parse(&contents)
    }

    /// Overwrite entries and classes wholesale with a validated backup
    pub fn apply(&self, backup: Backup) -> Result<()> {
        let store = self.session.store();
        let journal = backup.into_journal();
        store.save_entries(&journal.entries)?;
        store.save_school(&journal.school)?;

        info!(
            "Restored backup with {} entries and {} classes",
            journal.entries.len(),
            journal.school.len()
        );
        Ok(())
    }
}
