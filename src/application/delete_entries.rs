//! Delete one or all entries

use crate::application::pin::AdminSession;
use crate::domain::JournalEntry;
use crate::error::Result;
use crate::infrastructure::store::ENTRIES_KEY;
use crate::infrastructure::KeyValueStore;
use log::info;

/// Service for removing a single entry by id
pub struct DeleteEntryService<S> {
    store: S,
}

impl<S: KeyValueStore> DeleteEntryService<S> {
    pub fn new(store: S) -> Self {
        DeleteEntryService { store }
    }

    /// Remove exactly the entry with `id`; irreversible
    pub fn execute(&self, id: i64) -> Result<JournalEntry> {
        let mut journal = self.store.load_journal()?;
        let removed = journal.delete_entry(id)?;
        self.store.save_entries(&journal.entries)?;

        info!("Deleted entry {}", id);
        Ok(removed)
    }
}

/// Remove every entry by dropping the stored key. Classes and the PIN are kept.
pub fn clear_entries<S: KeyValueStore>(session: &AdminSession<S>) -> Result<usize> {
    let store = session.store();
    let removed = store.load_entries()?.len();
    store.remove(ENTRIES_KEY)?;

    info!("Cleared {} entries", removed);
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::pin::PinService;
    use crate::domain::{DateStyle, EntryDraft, Journal};
    use crate::error::TeachlogError;
    use crate::infrastructure::MemoryStore;
    use chrono::Local;

    fn seeded(n: usize) -> (MemoryStore, Vec<i64>) {
        let store = MemoryStore::new();
        let mut journal = Journal::default();
        journal.school.add_class("X-1").unwrap();
        for i in 0..n {
            journal
                .add_entry(
                    EntryDraft::new("X-1", "", &format!("catatan {}", i)),
                    Local::now(),
                    DateStyle::Iso,
                )
                .unwrap();
        }
        store.save_entries(&journal.entries).unwrap();
        store.save_school(&journal.school).unwrap();
        let ids = journal.entries.iter().map(|e| e.id).collect();
        (store, ids)
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let (store, ids) = seeded(3);
        let removed = DeleteEntryService::new(&store).execute(ids[1]).unwrap();
        assert_eq!(removed.id, ids[1]);

        let remaining: Vec<i64> = store.load_entries().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2]]);
    }

    #[test]
    fn test_delete_unknown_id_keeps_list() {
        let (store, _) = seeded(2);
        let result = DeleteEntryService::new(&store).execute(-1);
        assert!(matches!(result, Err(TeachlogError::EntryNotFound(-1))));
        assert_eq!(store.load_entries().unwrap().len(), 2);
    }

    #[test]
    fn test_clear_entries_keeps_classes() {
        let (store, _) = seeded(4);
        let session = PinService::new(&store).unlock("1007").unwrap();

        assert_eq!(clear_entries(&session).unwrap(), 4);
        assert_eq!(store.get(ENTRIES_KEY).unwrap(), None);
        assert!(store.load_entries().unwrap().is_empty());
        assert!(store.load_school().unwrap().contains("X-1"));
    }
}
