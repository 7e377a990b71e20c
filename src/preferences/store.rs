//! Key-value backing for appearance preferences
//!
//! Values are stored as strings under fixed keys. The JSON-file store loads
//! once when opened and writes the whole map back on every change.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ExpenseResult;
use crate::storage::file_io::{read_json, write_json_atomic};

/// String key-value store for preferences
pub trait PreferenceStore {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`
    fn set(&mut self, key: &str, value: &str) -> ExpenseResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> ExpenseResult<()>;

    /// Persist any pending changes
    fn flush(&mut self) -> ExpenseResult<()>;
}

/// In-memory store, used for tests and one-off sessions
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> ExpenseResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> ExpenseResult<()> {
        self.values.remove(key);
        Ok(())
    }

    fn flush(&mut self) -> ExpenseResult<()> {
        Ok(())
    }
}

/// Store persisted as a flat JSON object
#[derive(Debug)]
pub struct JsonPreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonPreferenceStore {
    /// Open the store at `path`, starting empty if the file does not exist
    pub fn open(path: impl Into<PathBuf>) -> ExpenseResult<Self> {
        let path = path.into();
        let values: BTreeMap<String, String> = read_json(&path)?;
        tracing::debug!(path = %path.display(), keys = values.len(), "Loaded preferences");
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> ExpenseResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> ExpenseResult<()> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn flush(&mut self) -> ExpenseResult<()> {
        write_json_atomic(&self.path, &self.values)
    }
}
