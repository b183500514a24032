//! Full backup document: every entry plus the roster map

use crate::domain::entry::JournalEntry;
use crate::domain::journal::Journal;
use crate::domain::roster::SchoolData;
use crate::error::{Result, TeachlogError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const JOURNALS_FIELD: &str = "journals";
const SCHOOL_FIELD: &str = "schoolData";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub journals: Vec<JournalEntry>,
    pub school_data: SchoolData,
}

impl Backup {
    pub fn from_journal(journal: &Journal) -> Self {
        Backup {
            journals: journal.entries.clone(),
            school_data: journal.school.clone(),
        }
    }

    pub fn into_journal(self) -> Journal {
        Journal::new(self.journals, self.school_data)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a backup document.
    ///
    /// Both top-level fields must be present and entry ids must be unique.
    pub fn parse(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| TeachlogError::InvalidBackup(format!("not valid JSON: {}", e)))?;

        let object = value
            .as_object()
            .ok_or_else(|| TeachlogError::InvalidBackup("expected a JSON object".to_string()))?;
        for field in [JOURNALS_FIELD, SCHOOL_FIELD] {
            if !object.contains_key(field) {
                return Err(TeachlogError::InvalidBackup(format!(
                    "missing \"{}\" field",
                    field
                )));
            }
        }

        let backup: Backup = serde_json::from_value(value)
            .map_err(|e| TeachlogError::InvalidBackup(e.to_string()))?;

        let mut seen = HashSet::new();
        if let Some(dup) = backup.journals.iter().find(|e| !seen.insert(e.id)) {
            return Err(TeachlogError::InvalidBackup(format!(
                "duplicate entry id {}",
                dup.id
            )));
        }

        Ok(backup)
    }
}

/// Generated backup filename for the given day
pub fn backup_filename(date: NaiveDate) -> String {
    format!("backup-jurnal-guru-{}.json", date.format("%Y-%m-%d"))
}
