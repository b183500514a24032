//! History filtering

use crate::domain::date::date_from_id;
use crate::domain::entry::JournalEntry;
use chrono::NaiveDate;

/// Criteria for selecting entries from the history. Empty matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Exact class name, case-insensitive
    pub class: Option<String>,
    /// Substring of the subject, case-insensitive
    pub subject: Option<String>,
    /// Substring of note or subject, case-insensitive
    pub text: Option<String>,
    /// Inclusive start date (from the entry id)
    pub from: Option<NaiveDate>,
    /// Inclusive end date (from the entry id)
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl EntryFilter {
    pub fn matches(&self, entry: &JournalEntry) -> bool {
        if let Some(class) = &self.class {
            if entry.class.to_lowercase() != class.trim().to_lowercase() {
                return false;
            }
        }

        if let Some(subject) = &self.subject {
            if !contains_ignore_case(&entry.subject, subject) {
                return false;
            }
        }

        if let Some(text) = &self.text {
            if !contains_ignore_case(&entry.note, text) && !contains_ignore_case(&entry.subject, text)
            {
                return false;
            }
        }

        if self.from.is_some() || self.to.is_some() {
            let Some(date) = date_from_id(entry.id) else {
                return false;
            };
            if self.from.is_some_and(|from| date < from) {
                return false;
            }
            if self.to.is_some_and(|to| date > to) {
                return false;
            }
        }

        true
    }

    /// Matching entries in list order (newest first), truncated to the limit
    pub fn apply<'a>(&self, entries: &'a [JournalEntry]) -> Vec<&'a JournalEntry> {
        let matched = entries.iter().filter(|e| self.matches(e));
        match self.limit {
            Some(n) => matched.take(n).collect(),
            None => matched.collect(),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
