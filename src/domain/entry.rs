//! Journal entries and attendance

use crate::error::{Result, TeachlogError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Attendance status of one student for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attendance {
    #[serde(rename = "Hadir")]
    Present,
    #[serde(rename = "Sakit")]
    Sick,
    #[serde(rename = "Izin")]
    Excused,
    #[serde(rename = "Alpha")]
    Absent,
}

impl Attendance {
    pub const ALL: [Attendance; 4] = [
        Attendance::Present,
        Attendance::Sick,
        Attendance::Excused,
        Attendance::Absent,
    ];

    /// Label used in stored data and summaries
    pub fn label(&self) -> &'static str {
        match self {
            Attendance::Present => "Hadir",
            Attendance::Sick => "Sakit",
            Attendance::Excused => "Izin",
            Attendance::Absent => "Alpha",
        }
    }
}

impl FromStr for Attendance {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "present" | "hadir" | "h" => Ok(Attendance::Present),
            "sick" | "sakit" | "s" => Ok(Attendance::Sick),
            "excused" | "izin" | "i" => Ok(Attendance::Excused),
            "absent" | "alpha" | "a" => Ok(Attendance::Absent),
            _ => Err(format!(
                "Invalid attendance status: '{}'. Valid statuses are: present, sick, excused, absent",
                s
            )),
        }
    }
}

/// Per-student attendance for one session
pub type AttendanceMap = BTreeMap<String, Attendance>;

/// Summarize an attendance map as "Hadir: N, Sakit: N, Izin: N, Alpha: N"
pub fn summarize_attendance(attendance: &AttendanceMap) -> String {
    Attendance::ALL
        .iter()
        .map(|status| {
            let count = attendance.values().filter(|s| *s == status).count();
            format!("{}: {}", status.label(), count)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// One journal record for a single class session.
///
/// Field names follow the stored data of the web version of the journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: i64,
    #[serde(rename = "tanggal")]
    pub date: String,
    #[serde(rename = "kelas")]
    pub class: String,
    #[serde(rename = "mapel", default)]
    pub subject: String,
    #[serde(rename = "catatan")]
    pub note: String,
    #[serde(rename = "absensi", default, skip_serializing_if = "Option::is_none")]
    pub attendance: Option<AttendanceMap>,
    #[serde(rename = "rekapAbsen", default, skip_serializing_if = "Option::is_none")]
    pub attendance_summary: Option<String>,
}

/// Input for a new entry, before an id and date are assigned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub class: String,
    pub subject: String,
    pub note: String,
    pub attendance: Option<AttendanceMap>,
}

impl EntryDraft {
    pub fn new(class: &str, subject: &str, note: &str) -> Self {
        EntryDraft {
            class: class.to_string(),
            subject: subject.to_string(),
            note: note.to_string(),
            attendance: None,
        }
    }

    pub fn with_attendance(mut self, attendance: AttendanceMap) -> Self {
        self.attendance = Some(attendance);
        self
    }

    /// Build the entry, rejecting an empty class or note
    pub fn into_entry(self, id: i64, date: String) -> Result<JournalEntry> {
        let class = self.class.trim().to_string();
        let note = self.note.trim().to_string();
        validate_required(&class, &note)?;

        let attendance_summary = self.attendance.as_ref().map(summarize_attendance);
        Ok(JournalEntry {
            id,
            date,
            class,
            subject: self.subject.trim().to_string(),
            note,
            attendance: self.attendance,
            attendance_summary,
        })
    }
}

/// Fields to replace on an existing entry; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub class: Option<String>,
    pub subject: Option<String>,
    pub note: Option<String>,
    /// `Some(None)` clears attendance
    pub attendance: Option<Option<AttendanceMap>>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        self.class.is_none()
            && self.subject.is_none()
            && self.note.is_none()
            && self.attendance.is_none()
    }

    /// Merge into a copy of `entry`, keeping its id and date
    pub fn apply(&self, entry: &JournalEntry) -> Result<JournalEntry> {
        let mut updated = entry.clone();

        if let Some(class) = &self.class {
            updated.class = class.trim().to_string();
        }
        if let Some(subject) = &self.subject {
            updated.subject = subject.trim().to_string();
        }
        if let Some(note) = &self.note {
            updated.note = note.trim().to_string();
        }
        if let Some(attendance) = &self.attendance {
            updated.attendance_summary = attendance.as_ref().map(summarize_attendance);
            updated.attendance = attendance.clone();
        }

        validate_required(&updated.class, &updated.note)?;
        Ok(updated)
    }
}

fn validate_required(class: &str, note: &str) -> Result<()> {
    if class.is_empty() || note.is_empty() {
        return Err(TeachlogError::Validation(
            "Class and note are required".to_string(),
        ));
    }
    Ok(())
}

/// Build an attendance map for a roster: everyone present, then overrides.
///
/// Overrides naming a student outside the roster are rejected.
pub fn attendance_for_roster(
    roster: &[String],
    overrides: &[(String, Attendance)],
) -> Result<AttendanceMap> {
    let mut attendance: AttendanceMap = roster
        .iter()
        .map(|student| (student.clone(), Attendance::Present))
        .collect();

    for (student, status) in overrides {
        match attendance.get_mut(student.trim()) {
            Some(slot) => *slot = *status,
            None => {
                return Err(TeachlogError::Validation(format!(
                    "Student '{}' is not in the class roster",
                    student
                )))
            }
        }
    }

    Ok(attendance)
}
