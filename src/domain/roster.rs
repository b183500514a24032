//! Classes and their student rosters

use crate::error::{Result, TeachlogError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Mapping from class name to its ordered list of students
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchoolData {
    classes: BTreeMap<String, Vec<String>>,
}

impl SchoolData {
    pub fn new() -> Self {
        SchoolData::default()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    /// Students of a class, in roster order
    pub fn roster(&self, class: &str) -> Option<&[String]> {
        self.classes.get(class).map(Vec::as_slice)
    }

    /// Iterate classes by name
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.classes.iter()
    }

    /// Add an empty class; names are trimmed and must be unique
    pub fn add_class(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TeachlogError::Validation(
                "Class name is required".to_string(),
            ));
        }
        if self.classes.contains_key(name) {
            return Err(TeachlogError::DuplicateClass(name.to_string()));
        }
        self.classes.insert(name.to_string(), Vec::new());
        Ok(())
    }

    /// Remove a class and its roster, returning the removed students
    pub fn delete_class(&mut self, name: &str) -> Result<Vec<String>> {
        self.classes
            .remove(name.trim())
            .ok_or_else(|| TeachlogError::ClassNotFound(name.trim().to_string()))
    }

    /// Replace the roster of an existing class wholesale
    pub fn set_roster(&mut self, name: &str, students: Vec<String>) -> Result<()> {
        match self.classes.get_mut(name.trim()) {
            Some(roster) => {
                *roster = students;
                Ok(())
            }
            None => Err(TeachlogError::ClassNotFound(name.trim().to_string())),
        }
    }
}

/// Parse newline-delimited roster text: lines trimmed, blank lines and
/// repeated names dropped, first-seen order kept
pub fn parse_roster_text(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && seen.insert(*line))
        .map(str::to_string)
        .collect()
}
