//! teachlog - Daily class journal for teachers
//!
//! Records class sessions (class, subject, notes, attendance), keeps a
//! roster of classes and students, and exports CSV reports and JSON backups.
//! All data lives in a local journal directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TeachlogError;
