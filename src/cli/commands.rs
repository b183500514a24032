//! CLI command definitions

use crate::domain::date::parse_cli_date;
use crate::domain::{Attendance, EntryFilter};
use crate::error::{Result, TeachlogError};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "teachlog")]
#[command(about = "Daily class journal for teachers", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// How entry dates are written (long, iso)
        #[arg(long, default_value = "long")]
        date_style: String,
    },

    /// Write a new journal entry
    Add {
        /// Class name (e.g., "XI RPL 1")
        #[arg(short, long, default_value = "")]
        class: String,

        /// Subject or topic
        #[arg(short, long, default_value = "")]
        subject: String,

        /// What happened in class
        #[arg(short, long, default_value = "")]
        note: String,

        #[command(flatten)]
        attendance: AttendanceArgs,
    },

    /// Show entry history, newest first
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show one entry with full attendance
    Show {
        /// Entry id
        id: i64,
    },

    /// Change fields of an existing entry
    Edit {
        /// Entry id
        id: i64,

        /// New class name
        #[arg(short, long)]
        class: Option<String>,

        /// New subject
        #[arg(short, long)]
        subject: Option<String>,

        /// New note
        #[arg(short, long)]
        note: Option<String>,

        #[command(flatten)]
        attendance: AttendanceArgs,

        /// Remove recorded attendance
        #[arg(long, conflicts_with_all = ["attendance", "sick", "excused", "absent"])]
        clear_attendance: bool,
    },

    /// Delete one entry
    Delete {
        /// Entry id
        id: i64,
    },

    /// Delete all entries (requires PIN)
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Admin PIN (prompted when omitted)
        #[arg(long)]
        pin: Option<String>,
    },

    /// Manage classes and rosters
    Class {
        #[command(subcommand)]
        command: ClassCommands,
    },

    /// Export a CSV report or a full backup
    Export {
        #[command(subcommand)]
        command: ExportCommands,
    },

    /// Replace all entries and classes with a backup (requires PIN)
    Import {
        /// Backup JSON file
        file: PathBuf,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Admin PIN (prompted when omitted)
        #[arg(long)]
        pin: Option<String>,
    },

    /// Check or change the admin PIN
    Pin {
        #[command(subcommand)]
        command: PinCommands,
    },

    /// Show what is stored
    Status,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ClassCommands {
    /// Add a class (requires PIN)
    Add {
        name: String,

        #[arg(long)]
        pin: Option<String>,
    },

    /// Delete a class and its roster; entries are kept (requires PIN)
    Delete {
        name: String,

        #[arg(long)]
        pin: Option<String>,
    },

    /// Replace a class roster, one student per line (requires PIN)
    ///
    /// Names are read from --file, or from stdin after the PIN prompt.
    Roster {
        name: String,

        /// File with one student name per line
        #[arg(short, long)]
        file: Option<PathBuf>,

        #[arg(long)]
        pin: Option<String>,
    },

    /// List classes and their rosters
    List,
}

#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Write entries as a CSV report
    Csv {
        /// Output file (default: generated name in export_dir)
        #[arg(short, long)]
        out: Option<PathBuf>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Write all entries and classes as a JSON backup
    Backup {
        /// Output file (default: generated name in export_dir)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PinCommands {
    /// Check a PIN against the stored one
    Check {
        /// PIN to check (prompted when omitted)
        pin: Option<String>,
    },

    /// Set a new PIN
    Set {
        new_pin: String,

        /// Current PIN (prompted when omitted)
        #[arg(long)]
        pin: Option<String>,
    },
}

/// Per-student attendance options
#[derive(Args, Debug, Clone, Default)]
pub struct AttendanceArgs {
    /// Record attendance for the class roster (everyone present by default)
    #[arg(long)]
    pub attendance: bool,

    /// Student who is sick (repeatable)
    #[arg(long, value_name = "STUDENT")]
    pub sick: Vec<String>,

    /// Student who is excused (repeatable)
    #[arg(long, value_name = "STUDENT")]
    pub excused: Vec<String>,

    /// Student who is absent without notice (repeatable)
    #[arg(long, value_name = "STUDENT")]
    pub absent: Vec<String>,
}

impl AttendanceArgs {
    pub fn requested(&self) -> bool {
        self.attendance || !self.overrides().is_empty()
    }

    pub fn overrides(&self) -> Vec<(String, Attendance)> {
        let tagged = |names: &[String], status: Attendance| {
            names
                .iter()
                .map(|name| (name.clone(), status))
                .collect::<Vec<_>>()
        };

        let mut overrides = tagged(&self.sick, Attendance::Sick);
        overrides.extend(tagged(&self.excused, Attendance::Excused));
        overrides.extend(tagged(&self.absent, Attendance::Absent));
        overrides
    }
}

/// History filter options
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only this class
    #[arg(long)]
    pub class: Option<String>,

    /// Subject contains text
    #[arg(long)]
    pub subject: Option<String>,

    /// Note or subject contains text
    #[arg(long)]
    pub search: Option<String>,

    /// Start date (DD-MM-YYYY, inclusive)
    #[arg(long)]
    pub from: Option<String>,

    /// End date (DD-MM-YYYY, inclusive)
    #[arg(long)]
    pub to: Option<String>,

    /// Maximum number of entries
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> Result<EntryFilter> {
        let parse = |value: &Option<String>| {
            value
                .as_deref()
                .map(parse_cli_date)
                .transpose()
                .map_err(TeachlogError::Config)
        };

        Ok(EntryFilter {
            class: self.class.clone(),
            subject: self.subject.clone(),
            text: self.search.clone(),
            from: parse(&self.from)?,
            to: parse(&self.to)?,
            limit: self.limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_attendance_overrides_collected() {
        let args = AttendanceArgs {
            attendance: false,
            sick: vec!["Ani".to_string()],
            excused: vec![],
            absent: vec!["Budi".to_string(), "Citra".to_string()],
        };
        assert!(args.requested());
        assert_eq!(
            args.overrides(),
            vec![
                ("Ani".to_string(), Attendance::Sick),
                ("Budi".to_string(), Attendance::Absent),
                ("Citra".to_string(), Attendance::Absent),
            ]
        );
        assert!(!AttendanceArgs::default().requested());
    }

    #[test]
    fn test_filter_args_parse_dates() {
        let args = FilterArgs {
            from: Some("01-10-2026".to_string()),
            limit: Some(5),
            ..Default::default()
        };
        let filter = args.to_filter().unwrap();
        assert_eq!(filter.from, NaiveDate::from_ymd_opt(2026, 10, 1));
        assert_eq!(filter.to, None);
        assert_eq!(filter.limit, Some(5));
    }

    #[test]
    fn test_filter_args_bad_date() {
        let args = FilterArgs {
            to: Some("2026-10-01".to_string()),
            ..Default::default()
        };
        match args.to_filter() {
            Err(TeachlogError::Config(msg)) => assert!(msg.contains("date format")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
