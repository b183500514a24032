//! Domain layer - Business logic and domain models

pub mod backup;
pub mod csv;
pub mod date;
pub mod entry;
pub mod filter;
pub mod journal;
pub mod pin;
pub mod roster;

pub use backup::Backup;
pub use date::DateStyle;
pub use entry::{Attendance, AttendanceMap, EntryDraft, EntryPatch, JournalEntry};
pub use filter::EntryFilter;
pub use journal::Journal;
pub use pin::AdminPin;
pub use roster::SchoolData;
