//! Client-side preference slots (`preferences.toml`)
//!
//! A flat string key/value store with two well-known slots:
//! - `theme` - `"dark"` or `"light"`
//! - `tour_seen` - `"true"` once the feature tour was finished or skipped
//!
//! No schema versioning: absent keys mean "use the default".

use std::collections::{BTreeMap, HashMap};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use lockbox_core::prelude::*;

use super::settings::config_dir;

/// Slot holding the persisted [`lockbox_core::ThemePreference`]
pub const THEME_KEY: &str = "theme";

/// Slot holding the boolean-as-string "tour already seen" flag
pub const TOUR_SEEN_KEY: &str = "tour_seen";

const PREFERENCES_FILENAME: &str = "preferences.toml";

/// Sidecar file serialising writers across instances
const LOCK_FILENAME: &str = ".preferences.lock";

/// Durable key/value storage for UI preferences.
///
/// Implementations keep values in memory even when persisting fails, so a
/// failed write leaves the preference memory-only for the session.
pub trait PreferenceStore: std::fmt::Debug + Send {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;

    /// Read a boolean-as-string slot; anything but `"true"` is false
    fn get_flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| v.trim() == "true")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory store
// ─────────────────────────────────────────────────────────────────────────────

/// Volatile store for tests and `--ephemeral` runs
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
    read_only: bool,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, like storage disabled by the host
    pub fn read_only() -> Self {
        Self {
            values: HashMap::new(),
            read_only: true,
        }
    }

    /// Seed a value without going through `set`
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.read_only {
            return Err(Error::PreferencesReadOnly);
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.read_only {
            return Err(Error::PreferencesReadOnly);
        }
        self.values.remove(key);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File-backed store
// ─────────────────────────────────────────────────────────────────────────────

/// Preferences persisted to a TOML file of string values
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Default location: `<config_dir>/lockbox-landing/preferences.toml`
    pub fn default_path() -> PathBuf {
        config_dir().join(PREFERENCES_FILENAME)
    }

    /// Open the store, reading existing values.
    ///
    /// A missing or unreadable file yields an empty store; nothing here is fatal.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = load_values(&path);
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply one change to the file under an exclusive lock.
    ///
    /// The file is re-read inside the lock so slots written by another
    /// instance since `open` survive; the merged map becomes the new cache.
    fn update_file<F>(&mut self, change: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| Error::preferences("preferences path has no parent directory"))?;

        if !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|e| {
                Error::preferences(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }

        // Lock a sidecar file: the preferences file itself is replaced by rename
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(dir.join(LOCK_FILENAME))
            .map_err(|e| Error::preferences(format!("Failed to open lock file: {}", e)))?;
        lock.lock_exclusive()
            .map_err(|e| Error::preferences(format!("Failed to lock preferences: {}", e)))?;

        let mut merged = load_values(&self.path);
        change(&mut merged);

        let header = "# Lockbox landing page preferences (managed automatically)\n\n";
        let content = toml::to_string_pretty(&merged)
            .map_err(|e| Error::preferences(format!("Failed to serialize preferences: {}", e)))?;

        let temp_path = dir.join(format!(".{}.{}.tmp", PREFERENCES_FILENAME, std::process::id()));
        std::fs::write(&temp_path, format!("{}{}", header, content))
            .map_err(|e| Error::preferences(format!("Failed to write temp file: {}", e)))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::preferences(format!("Failed to rename temp file: {}", e)))?;

        // Lock is released when `lock` is dropped
        self.values = merged;
        debug!("Saved preferences to {:?}", self.path);
        Ok(())
    }
}

fn load_values(path: &Path) -> BTreeMap<String, String> {
    if !path.exists() {
        debug!("No preferences file at {:?}", path);
        return BTreeMap::new();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(values) => {
                debug!("Loaded preferences from {:?}", path);
                values
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                BTreeMap::new()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            BTreeMap::new()
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.update_file(|values| {
            values.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        self.update_file(|values| {
            values.remove(key);
        })
    }
}
