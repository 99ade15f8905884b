//! In-memory draft store.

use std::collections::HashMap;
use std::sync::Mutex;

use wikidraft_core::draft::DraftStore;
use wikidraft_core::error::{Result, WikidraftError};

/// Draft store held entirely in memory.
///
/// Drafts do not survive the process, so this backend is for tests and for
/// hosts without writable storage that still want draft recovery within a
/// single run.
#[derive(Default)]
pub struct MemoryDraftStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| WikidraftError::internal("draft store mutex poisoned"))
    }
}

impl DraftStore for MemoryDraftStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
