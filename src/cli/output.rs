//! Output formatting utilities

use crate::application::status::Status;
use crate::domain::{JournalEntry, SchoolData};

/// Format entries as history cards, newest first
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!("[{}] {}\n", entry.id, entry.date));
        output.push_str(&format_heading(entry));
        output.push('\n');
        output.push_str(&format!("{}\n", entry.note));
        if let Some(summary) = &entry.attendance_summary {
            output.push_str(&format!("Attendance: {}\n", summary));
        }
        output.push('\n');
    }
    output
}

/// Format a single entry including per-student attendance.
///
/// Students are listed in `roster` order; names no longer on the roster follow.
pub fn format_entry_detail(entry: &JournalEntry, roster: &[String]) -> String {
    let mut output = format!(
        "Id:       {}\nDate:     {}\nClass:    {}\nSubject:  {}\n\n{}\n",
        entry.id, entry.date, entry.class, entry.subject, entry.note
    );

    if let Some(attendance) = &entry.attendance {
        output.push_str("\nAttendance:\n");
        let rostered = roster
            .iter()
            .filter_map(|student| attendance.get_key_value(student));
        let others = attendance
            .iter()
            .filter(|(student, _)| !roster.contains(*student));
        for (student, status) in rostered.chain(others) {
            output.push_str(&format!("  {:<24} {}\n", student, status.label()));
        }
        if let Some(summary) = &entry.attendance_summary {
            output.push_str(&format!("  {}\n", summary));
        }
    }
    output
}

fn format_heading(entry: &JournalEntry) -> String {
    if entry.subject.is_empty() {
        entry.class.clone()
    } else {
        format!("{} - {}", entry.class, entry.subject)
    }
}

/// Format classes with their rosters
pub fn format_class_list(school: &SchoolData) -> String {
    if school.is_empty() {
        return "No classes found".to_string();
    }

    let mut output = String::new();
    for (class, students) in school.iter() {
        let noun = if students.len() == 1 { "student" } else { "students" };
        output.push_str(&format!("{} ({} {})\n", class, students.len(), noun));
        for student in students {
            output.push_str(&format!("  - {}\n", student));
        }
    }
    output
}

pub fn format_status(status: &Status) -> String {
    format!(
        "Entries stored: {}\nClasses: {}\nStudents: {}\nData: {}\n",
        status.entries,
        status.classes,
        status.students,
        status.location.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Attendance, AttendanceMap};
    use std::path::PathBuf;

    fn entry(subject: &str) -> JournalEntry {
        JournalEntry {
            id: 1760860800000,
            date: "Senin, 19 Oktober 2026".to_string(),
            class: "XI RPL 1".to_string(),
            subject: subject.to_string(),
            note: "Normalisasi tabel".to_string(),
            attendance: None,
            attendance_summary: None,
        }
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[]), "No entries found");
    }

    #[test]
    fn test_format_entry_card() {
        let output = format_entry_list(&[entry("Basis Data")]);
        assert!(output.contains("[1760860800000] Senin, 19 Oktober 2026\n"));
        assert!(output.contains("XI RPL 1 - Basis Data\n"));
        assert!(output.contains("Normalisasi tabel\n"));
        assert!(!output.contains("Attendance"));
    }

    #[test]
    fn test_format_entry_without_subject() {
        let output = format_entry_list(&[entry("")]);
        assert!(output.contains("XI RPL 1\n"));
        assert!(!output.contains(" - "));
    }

    #[test]
    fn test_format_detail_with_attendance() {
        let mut e = entry("Basis Data");
        let mut attendance = AttendanceMap::new();
        attendance.insert("Ani".to_string(), Attendance::Present);
        attendance.insert("Budi".to_string(), Attendance::Sick);
        e.attendance = Some(attendance);
        e.attendance_summary = Some("Hadir: 1, Sakit: 1, Izin: 0, Alpha: 0".to_string());

        let output = format_entry_detail(&e, &[]);
        assert!(output.contains("Budi"));
        assert!(output.contains("Sakit"));
        assert!(output.contains("Hadir: 1, Sakit: 1, Izin: 0, Alpha: 0"));
    }

    #[test]
    fn test_format_detail_follows_roster_order() {
        let mut e = entry("Basis Data");
        let mut attendance = AttendanceMap::new();
        attendance.insert("Ani".to_string(), Attendance::Present);
        attendance.insert("Zaki".to_string(), Attendance::Absent);
        attendance.insert("Budi".to_string(), Attendance::Sick);
        e.attendance = Some(attendance);

        let roster = vec!["Zaki".to_string(), "Budi".to_string()];
        let output = format_entry_detail(&e, &roster);
        let zaki = output.find("Zaki").unwrap();
        let budi = output.find("Budi").unwrap();
        let ani = output.find("Ani").unwrap();
        assert!(zaki < budi);
        assert!(budi < ani);
        assert_eq!(output.matches("Budi").count(), 1);
    }

    #[test]
    fn test_format_class_list() {
        let mut school = SchoolData::new();
        assert_eq!(format_class_list(&school), "No classes found");

        school.add_class("X-1").unwrap();
        school.set_roster("X-1", vec!["Ani".to_string()]).unwrap();
        school.add_class("X-2").unwrap();
        let output = format_class_list(&school);
        assert_eq!(output, "X-1 (1 student)\n  - Ani\nX-2 (0 students)\n");
    }

    #[test]
    fn test_format_status() {
        let status = Status {
            entries: 3,
            classes: 1,
            students: 30,
            location: PathBuf::from("/data/jurnal"),
        };
        let output = format_status(&status);
        assert!(output.contains("Entries stored: 3"));
        assert!(output.contains("/data/jurnal"));
    }
}
