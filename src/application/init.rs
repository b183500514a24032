//! Initialize journal use case

use crate::domain::DateStyle;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemStore};
use log::info;
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path, date_style: DateStyle) -> Result<FileSystemStore> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileSystemStore::new(path.to_path_buf());
    store.initialize()?;

    let config = Config {
        date_style,
        ..Config::default()
    };
    store.save_config(&config)?;

    info!("Initialized journal at {}", path.display());
    Ok(store)
}
