//! Key-value persistence for journal state

use crate::domain::{AdminPin, Journal, JournalEntry, SchoolData};
use crate::error::{Result, TeachlogError};
use crate::infrastructure::Config;
use log::{debug, warn};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the state directory inside a journal root
pub const STATE_DIR: &str = ".teachlog";

/// Key holding the JSON array of entries
pub const ENTRIES_KEY: &str = "jurnal_guru_data";
/// Key holding the JSON object of class rosters
pub const SCHOOL_KEY: &str = "jurnal_guru_school";
/// Key holding the admin PIN as a plain string
pub const PIN_KEY: &str = "jurnal_guru_pin";

/// String key-value store. Values are overwritten wholesale.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;

    /// Entries, newest first; empty when never saved
    fn load_entries(&self) -> Result<Vec<JournalEntry>> {
        match self.get(ENTRIES_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save_entries(&self, entries: &[JournalEntry]) -> Result<()> {
        self.set(ENTRIES_KEY, &serde_json::to_string(entries)?)
    }

    fn load_school(&self) -> Result<SchoolData> {
        match self.get(SCHOOL_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(SchoolData::default()),
        }
    }

    fn save_school(&self, school: &SchoolData) -> Result<()> {
        self.set(SCHOOL_KEY, &serde_json::to_string(school)?)
    }

    /// Stored PIN, or the default when unset or blank
    fn load_pin(&self) -> Result<AdminPin> {
        match self.get(PIN_KEY)? {
            Some(raw) if !raw.is_empty() => AdminPin::new(&raw),
            Some(_) => {
                warn!("Stored PIN is empty, falling back to default");
                Ok(AdminPin::default())
            }
            None => Ok(AdminPin::default()),
        }
    }

    fn save_pin(&self, pin: &AdminPin) -> Result<()> {
        self.set(PIN_KEY, pin.as_str())
    }

    fn load_journal(&self) -> Result<Journal> {
        Ok(Journal::new(self.load_entries()?, self.load_school()?))
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Journal directory on disk; each key is a file under `.teachlog/`
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    pub root: PathBuf,
}

impl FileSystemStore {
    /// Create a new store with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemStore { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks TEACHLOG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("TEACHLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_state_dir(&path) {
                return Ok(FileSystemStore::new(path));
            } else {
                return Err(TeachlogError::Config(format!(
                    "TEACHLOG_ROOT is set to '{}' but no .teachlog directory found. \
                    Run 'teachlog init' in that directory or unset TEACHLOG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_state_dir(&current) {
                debug!("Using journal at {}", current.display());
                return Ok(FileSystemStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(TeachlogError::NotInitialized(start.to_path_buf())),
            }
        }
    }

    fn has_state_dir(path: &Path) -> bool {
        path.join(STATE_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn state_dir(&self) -> PathBuf {
        self.root.join(STATE_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_state_dir(&self.root)
    }

    /// Create the `.teachlog` directory; fails if it already exists
    pub fn initialize(&self) -> Result<()> {
        let state_dir = self.state_dir();

        if state_dir.exists() {
            return Err(TeachlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&state_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.state_dir().join(key)
    }
}

impl KeyValueStore for FileSystemStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        debug!("Reading {}", path.display());

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TeachlogError::Io(e)),
        }
    }

    /// Best-effort atomic replace: write a temp file next to the target, then rename.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let state_dir = self.state_dir();
        if !state_dir.is_dir() {
            return Err(TeachlogError::NotInitialized(self.root.clone()));
        }

        let path = self.key_path(key);
        let tmp_path = state_dir.join(format!("{}.tmp-{}", key, std::process::id()));
        debug!("Writing {} ({} bytes)", path.display(), value.len());

        fs::write(&tmp_path, value)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TeachlogError::Io(e)),
        }
    }
}

/// Volatile store, mainly for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
