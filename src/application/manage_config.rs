//! Config management use case

use crate::domain::DateStyle;
use crate::error::{Result, TeachlogError};
use crate::infrastructure::{Config, FileSystemStore};
use std::path::PathBuf;
use std::str::FromStr;

/// Service for managing journal configuration
pub struct ConfigService {
    store: FileSystemStore,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(store: FileSystemStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load_config()?;

        match key {
            "date_style" => Ok(config.date_style.to_string()),
            "export_dir" => Ok(config.export_dir.display().to_string()),
            _ => Err(TeachlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: date_style, export_dir",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;

        match key {
            "date_style" => {
                config.date_style = DateStyle::from_str(value).map_err(TeachlogError::Config)?;
            }
            "export_dir" => {
                if value.trim().is_empty() {
                    return Err(TeachlogError::Config(
                        "export_dir cannot be empty".to_string(),
                    ));
                }
                config.export_dir = PathBuf::from(value);
            }
            _ => {
                return Err(TeachlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: date_style, export_dir",
                    key
                )));
            }
        }

        self.store.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.store.load_config()
    }
}
