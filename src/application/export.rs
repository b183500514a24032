//! CSV report and JSON backup export

use crate::domain::backup::backup_filename;
use crate::domain::csv::{csv_filename, render_csv};
use crate::domain::{Backup, EntryFilter};
use crate::error::Result;
use crate::infrastructure::KeyValueStore;
use chrono::NaiveDate;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of writing an export file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub entry_count: usize,
}

/// Service for writing report and backup files
pub struct ExportService<S> {
    store: S,
    export_dir: PathBuf,
}

impl<S: KeyValueStore> ExportService<S> {
    /// `export_dir` receives files written under a generated name
    pub fn new(store: S, export_dir: PathBuf) -> Self {
        ExportService { store, export_dir }
    }

    /// Write the filtered entries as a CSV report
    pub fn export_csv(
        &self,
        filter: &EntryFilter,
        out: Option<&Path>,
        today: NaiveDate,
    ) -> Result<ExportSummary> {
        let entries = self.store.load_entries()?;
        let selected = filter.apply(&entries);
        let entry_count = selected.len();

        let path = self.target(out, csv_filename(today));
        write_export(&path, &render_csv(selected))?;

        info!("Exported {} entries to {}", entry_count, path.display());
        Ok(ExportSummary { path, entry_count })
    }

    /// Write every entry and the roster map as one JSON document
    pub fn export_backup(&self, out: Option<&Path>, today: NaiveDate) -> Result<ExportSummary> {
        let journal = self.store.load_journal()?;
        let backup = Backup::from_journal(&journal);

        let path = self.target(out, backup_filename(today));
        write_export(&path, &backup.to_json()?)?;

        info!("Wrote backup to {}", path.display());
        Ok(ExportSummary {
            path,
            entry_count: backup.journals.len(),
        })
    }

    fn target(&self, out: Option<&Path>, generated: String) -> PathBuf {
        match out {
            Some(path) => path.to_path_buf(),
            None => self.export_dir.join(generated),
        }
    }
}

fn write_export(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating export directory {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DateStyle, EntryDraft, Journal};
    use crate::infrastructure::MemoryStore;
    use chrono::Local;
    use tempfile::TempDir;

    fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        let mut journal = Journal::default();
        journal.school.add_class("X-1").unwrap();
        journal
            .add_entry(
                EntryDraft::new("X-1", "IPA", "Praktikum, kelompok 2"),
                Local::now(),
                DateStyle::Iso,
            )
            .unwrap();
        journal
            .add_entry(EntryDraft::new("X-2", "IPS", "Diskusi"), Local::now(), DateStyle::Iso)
            .unwrap();
        store.save_entries(&journal.entries).unwrap();
        store.save_school(&journal.school).unwrap();
        store
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_csv_generated_name_in_export_dir() {
        let temp = TempDir::new().unwrap();
        let store = seeded();
        let service = ExportService::new(&store, temp.path().join("laporan"));

        let summary = service
            .export_csv(&EntryFilter::default(), None, today())
            .unwrap();

        assert_eq!(
            summary.path,
            temp.path().join("laporan").join("jurnal-guru-2026-10-19.csv")
        );
        assert_eq!(summary.entry_count, 2);
        let csv = fs::read_to_string(&summary.path).unwrap();
        assert!(csv.starts_with("Date,Class,Subject,Note,Attendance\n"));
        assert!(csv.contains("\"Praktikum, kelompok 2\""));
    }

    #[test]
    fn test_csv_respects_filter() {
        let temp = TempDir::new().unwrap();
        let store = seeded();
        let service = ExportService::new(&store, temp.path().to_path_buf());
        let filter = EntryFilter {
            class: Some("X-2".to_string()),
            ..Default::default()
        };
        let out = temp.path().join("x2.csv");

        let summary = service.export_csv(&filter, Some(out.as_path()), today()).unwrap();
        assert_eq!(summary.path, out);
        assert_eq!(summary.entry_count, 1);
        assert_eq!(fs::read_to_string(&out).unwrap().lines().count(), 2);
    }

    #[test]
    fn test_backup_file_parses_back() {
        let temp = TempDir::new().unwrap();
        let store = seeded();
        let service = ExportService::new(&store, temp.path().to_path_buf());

        let summary = service.export_backup(None, today()).unwrap();
        assert!(summary
            .path
            .ends_with("backup-jurnal-guru-2026-10-19.json"));

        let backup = Backup::parse(&fs::read_to_string(&summary.path).unwrap()).unwrap();
        assert_eq!(backup.into_journal(), store.load_journal().unwrap());
    }
}
