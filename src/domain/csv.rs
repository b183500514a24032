//! CSV report of journal entries

use crate::domain::entry::JournalEntry;
use chrono::NaiveDate;

/// Fixed header row of the report
pub const CSV_HEADER: &str = "Date,Class,Subject,Note,Attendance";

/// Render entries as CSV text, one row per entry after the header
pub fn render_csv<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a JournalEntry>,
{
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for entry in entries {
        let row = [
            csv_quote(&entry.date),
            csv_quote(&entry.class),
            csv_quote(&entry.subject),
            csv_quote(&entry.note),
            csv_quote(entry.attendance_summary.as_deref().unwrap_or("")),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Quote a field when it holds a separator, quote or line break
fn csv_quote(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Generated report filename for the given day
pub fn csv_filename(date: NaiveDate) -> String {
    format!("jurnal-guru-{}.csv", date.format("%Y-%m-%d"))
}
