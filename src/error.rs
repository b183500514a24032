//! Error types for teachlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for teachlog application
#[derive(Debug, Error)]
pub enum TeachlogError {
    #[error("Not a teachlog directory: {0}")]
    NotInitialized(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(i64),

    #[error("Class already exists: {0}")]
    DuplicateClass(String),

    #[error("Class not found: {0}")]
    ClassNotFound(String),

    #[error("Invalid backup file: {0}")]
    InvalidBackup(String),

    #[error("Incorrect PIN")]
    IncorrectPin,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TeachlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TeachlogError::NotInitialized(_) => 2,
            TeachlogError::Validation(_) => 3,
            TeachlogError::EntryNotFound(_) | TeachlogError::ClassNotFound(_) => 4,
            TeachlogError::DuplicateClass(_) => 5,
            TeachlogError::InvalidBackup(_) => 6,
            TeachlogError::IncorrectPin => 7,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TeachlogError::NotInitialized(path) => {
                format!(
                    "Not a teachlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'teachlog init' in this directory to create a new journal\n\
                    • Navigate to an existing teachlog directory\n\
                    • Set TEACHLOG_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            TeachlogError::Validation(msg) => {
                format!(
                    "{}\n\n\
                    Example:\n\
                    teachlog add --class \"XI RPL 1\" --subject Matematika --note \"Bab 3 selesai\"",
                    msg
                )
            }
            TeachlogError::EntryNotFound(id) => {
                format!(
                    "No entry with id {}\n\n\
                    Suggestions:\n\
                    • Use 'teachlog list' to see entry ids",
                    id
                )
            }
            TeachlogError::ClassNotFound(name) => {
                format!(
                    "Class not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'teachlog class list' to see existing classes\n\
                    • Add it first: teachlog class add '{}'",
                    name, name
                )
            }
            TeachlogError::InvalidBackup(msg) => {
                format!(
                    "Invalid backup file: {}\n\n\
                    A backup must be a JSON document with both \"journals\" and \"schoolData\" fields.\n\
                    Create one with: teachlog export backup",
                    msg
                )
            }
            TeachlogError::IncorrectPin => "Incorrect PIN\n\n\
                Management commands need the admin PIN (default 1007).\n\
                Pass it with --pin or type it when prompted."
                .to_string(),
            TeachlogError::Config(msg) => {
                if msg.contains("date style") {
                    format!(
                        "{}\n\n\
                        Valid date styles: long, iso\n\
                        Example: teachlog config date_style iso",
                        msg
                    )
                } else if msg.contains("date format") {
                    format!(
                        "{}\n\n\
                        Expected format: DD-MM-YYYY\n\
                        Example: teachlog list --from 01-10-2026 --to 31-10-2026",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TeachlogError
pub type Result<T> = std::result::Result<T, TeachlogError>;
