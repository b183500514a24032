//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod delete_entries;
pub mod edit_entry;
pub mod export;
pub mod import_backup;
pub mod init;
pub mod list_entries;
pub mod manage_classes;
pub mod manage_config;
pub mod pin;
pub mod status;

pub use add_entry::{AddEntryRequest, AddEntryService};
pub use delete_entries::{clear_entries, DeleteEntryService};
pub use edit_entry::{AttendanceChange, EditEntryRequest, EditEntryService};
pub use export::{ExportService, ExportSummary};
pub use import_backup::ImportService;
pub use list_entries::ListEntriesService;
pub use manage_classes::{list_classes, ClassService};
pub use manage_config::ConfigService;
pub use pin::{AdminSession, PinService};
