// src/history/mod.rs
//! Recently generated passwords.
//!
//! The in-memory list is authoritative for the session. Every mutation is
//! written through to a [`HistoryStorage`]; a failed write is logged and
//! flagged but never fails the mutation itself.

use thiserror::Error;

use crate::models::{ClearOutcome, HistoryEntry};

pub mod storage;

pub use storage::{HistoryStorage, JsonFileStorage, MemoryStorage, StorageError};

pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("History index {index} is out of range (history has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, HistoryError>;

pub struct HistoryStore<S: HistoryStorage> {
    entries: Vec<HistoryEntry>,
    capacity: usize,
    storage: S,
    degraded: bool,
}

impl<S: HistoryStorage> HistoryStore<S> {
    /// Empty store. Nothing is read from `storage`.
    pub fn new(storage: S, capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
            storage,
            degraded: false,
        }
    }

    /// Restore the list saved by a previous session.
    ///
    /// A missing or unreadable list starts the session empty.
    pub fn load(storage: S, capacity: usize) -> Self {
        let mut store = Self::new(storage, capacity);

        match store.storage.load() {
            Ok(Some(entries)) => {
                for entry in entries {
                    if store.entries.len() == capacity {
                        break;
                    }
                    if !store.entries.iter().any(|e| e.password == entry.password) {
                        store.entries.push(entry);
                    }
                }
                log::info!("Loaded {} history entries", store.entries.len());
            }
            Ok(None) => {
                log::debug!("No saved history found, starting empty");
            }
            Err(e) => {
                log::warn!("Failed to load history, starting empty: {}", e);
            }
        }

        store
    }

    /// Put `entry` at the front, replacing an entry with the same password
    /// and dropping the oldest entries beyond capacity.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.retain(|e| e.password != entry.password);
        self.entries.insert(0, entry);
        self.entries.truncate(self.capacity);
        self.persist();
    }

    pub fn remove_at(&mut self, index: usize) -> Result<HistoryEntry> {
        if index >= self.entries.len() {
            return Err(HistoryError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }

        let removed = self.entries.remove(index);
        self.persist();
        Ok(removed)
    }

    pub fn clear(&mut self) -> ClearOutcome {
        if self.entries.is_empty() {
            return ClearOutcome::AlreadyEmpty;
        }

        let removed = self.entries.len();
        self.entries.clear();
        self.persist();
        ClearOutcome::Cleared(removed)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// True when the most recent save failed.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    fn persist(&mut self) {
        match self.storage.save(&self.entries) {
            Ok(()) => {
                if self.degraded {
                    log::info!("History persistence recovered");
                }
                self.degraded = false;
            }
            Err(e) => {
                log::error!("Failed to save history: {}", e);
                self.degraded = true;
            }
        }
    }
}
