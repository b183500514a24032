//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod prompt;

pub use commands::{
    AttendanceArgs, ClassCommands, Cli, Commands, ExportCommands, FilterArgs, PinCommands,
};
pub use output::{format_class_list, format_entry_detail, format_entry_list, format_status};
pub use prompt::{confirm, resolve_pin};
