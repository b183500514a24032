//! Configuration management

use crate::domain::DateStyle;
use crate::error::{Result, TeachlogError};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub date_style: DateStyle,
    /// Where generated export files go, relative to the journal root unless absolute
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            date_style: DateStyle::default(),
            export_dir: default_export_dir(),
        }
    }
}

impl Config {
    /// Load config from .teachlog/config.toml in the given directory.
    ///
    /// A missing file reads as the default config.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".teachlog").join("config.toml");

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("No config at {}, using defaults", config_path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(TeachlogError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| TeachlogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .teachlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let state_dir = path.join(".teachlog");
        let config_path = state_dir.join("config.toml");

        if !state_dir.exists() {
            fs::create_dir(&state_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TeachlogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Export directory resolved against the journal root
    pub fn resolve_export_dir(&self, root: &Path) -> PathBuf {
        if self.export_dir.is_absolute() {
            self.export_dir.clone()
        } else {
            root.join(&self.export_dir)
        }
    }
}
