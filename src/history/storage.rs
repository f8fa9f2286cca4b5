// src/history/storage.rs
use std::cell::{Cell, RefCell};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::HistoryEntry;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Where the history list is persisted between sessions.
pub trait HistoryStorage {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<HistoryEntry>>>;

    fn save(&self, entries: &[HistoryEntry]) -> Result<()>;
}

impl<S: HistoryStorage + ?Sized> HistoryStorage for Box<S> {
    fn load(&self) -> Result<Option<Vec<HistoryEntry>>> {
        (**self).load()
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        (**self).save(entries)
    }
}

/// History kept as a JSON array in a single file.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<HistoryEntry>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let entries: Vec<HistoryEntry> = serde_json::from_str(&content)?;
        Ok(Some(entries))
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write next to the target, then rename over it.
        let tmp_path = self.path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

/// In-process storage. Lives as long as the store that owns it.
#[derive(Default)]
pub struct MemoryStorage {
    saved: RefCell<Option<Vec<HistoryEntry>>>,
    save_count: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<HistoryEntry>) -> Self {
        let storage = Self::default();
        storage.saved.replace(Some(entries));
        storage
    }

    /// Make subsequent saves fail, or succeed again.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }

    pub fn saved(&self) -> Option<Vec<HistoryEntry>> {
        self.saved.borrow().clone()
    }
}

impl HistoryStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<HistoryEntry>>> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        if self.fail_saves.get() {
            return Err(StorageError::Unavailable("memory storage is set to fail".into()));
        }
        self.saved.replace(Some(entries.to_vec()));
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}
