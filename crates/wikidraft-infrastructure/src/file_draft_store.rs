//! File-backed draft store.

use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use tracing::debug;
use wikidraft_core::draft::DraftStore;
use wikidraft_core::error::{Result, WikidraftError};

use crate::paths::WikidraftPaths;
use crate::storage::{AtomicDraftFile, DraftEntry};

/// Draft store backed by a single TOML file on disk.
///
/// Drafts written here survive process restarts, which is the whole point:
/// a new-page body typed before an accidental reload is recovered by the
/// next editing session.
///
/// Access is serialized two ways: a process-local `Mutex` (the draft file
/// key is process-wide shared state) and an on-disk lock file guarding
/// against other processes during read-modify-write updates.
pub struct FileDraftStore {
    file: AtomicDraftFile,
    guard: Mutex<()>,
}

impl FileDraftStore {
    /// Creates a store over the given draft file path.
    ///
    /// The file and its parent directories are created lazily on first
    /// write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            file: AtomicDraftFile::new(path.as_ref().to_path_buf()),
            guard: Mutex::new(()),
        }
    }

    /// Creates a store at the platform default location
    /// (`<config dir>/wikidraft/drafts.toml`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be
    /// determined.
    pub fn default_location() -> Result<Self> {
        let path = WikidraftPaths::drafts_file()
            .map_err(|e| WikidraftError::storage(e.to_string()))?;
        Ok(Self::new(path))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.guard
            .lock()
            .map_err(|_| WikidraftError::internal("draft store mutex poisoned"))
    }
}

impl DraftStore for FileDraftStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock()?;
        let data = self.file.load()?;
        Ok(data.and_then(|d| d.drafts.get(key).map(|entry| entry.body.clone())))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock()?;
        self.file.update(|data| {
            data.drafts.insert(
                key.to_string(),
                DraftEntry {
                    body: value.to_string(),
                    updated_at: Utc::now().to_rfc3339(),
                },
            );
            Ok(())
        })?;
        debug!(key, "draft written to disk");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock()?;
        self.file.update(|data| {
            data.drafts.remove(key);
            Ok(())
        })?;
        debug!(key, "draft removed from disk");
        Ok(())
    }
}
