//! Atomic draft file operations.
//!
//! Provides a thin layer for safe concurrent access to the on-disk draft
//! file shared by every editing surface on the machine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};
use wikidraft_core::WikidraftError;

/// Errors that can occur while reading or writing the draft file.
#[derive(Debug)]
pub enum DraftFileError {
    /// File I/O error.
    IoError(std::io::Error),
    /// TOML parsing error.
    TomlParseError(toml::de::Error),
    /// TOML serialization error.
    TomlSerError(toml::ser::Error),
    /// File locking error.
    LockError(String),
}

impl std::fmt::Display for DraftFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftFileError::IoError(e) => write!(f, "I/O error: {}", e),
            DraftFileError::TomlParseError(e) => write!(f, "TOML parse error: {}", e),
            DraftFileError::TomlSerError(e) => write!(f, "TOML serialization error: {}", e),
            DraftFileError::LockError(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for DraftFileError {}

impl From<std::io::Error> for DraftFileError {
    fn from(e: std::io::Error) -> Self {
        DraftFileError::IoError(e)
    }
}

impl From<toml::de::Error> for DraftFileError {
    fn from(e: toml::de::Error) -> Self {
        DraftFileError::TomlParseError(e)
    }
}

impl From<toml::ser::Error> for DraftFileError {
    fn from(e: toml::ser::Error) -> Self {
        DraftFileError::TomlSerError(e)
    }
}

impl From<DraftFileError> for WikidraftError {
    fn from(e: DraftFileError) -> Self {
        match e {
            DraftFileError::IoError(e) => e.into(),
            DraftFileError::TomlParseError(e) => e.into(),
            DraftFileError::TomlSerError(e) => e.into(),
            DraftFileError::LockError(msg) => WikidraftError::storage(msg),
        }
    }
}

/// One persisted draft entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftEntry {
    /// Draft body text
    pub body: String,
    /// RFC 3339 timestamp of the last write
    pub updated_at: String,
}

/// On-disk contents of the draft file: store key to draft entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftFileData {
    #[serde(default)]
    pub drafts: BTreeMap<String, DraftEntry>,
}

/// A handle to the draft file with ACID guarantees.
///
/// Provides:
/// - **Atomicity**: Updates are all-or-nothing via tmp file + atomic rename
/// - **Consistency**: TOML schema validation on load/save
/// - **Isolation**: File locking prevents concurrent modifications
/// - **Durability**: Explicit fsync before rename
pub struct AtomicDraftFile {
    path: PathBuf,
}

impl AtomicDraftFile {
    /// Creates a new draft file handle.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the draft TOML file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the path this handle operates on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the draft file and deserializes it.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(DraftFileData))`: Successfully loaded
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<DraftFileData>, DraftFileError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: DraftFileData = toml::from_str(&content)?;
        Ok(Some(data))
    }

    /// Saves the draft data atomically.
    ///
    /// Uses a temporary file + atomic rename to ensure durability.
    pub fn save(&self, data: &DraftFileData) -> Result<(), DraftFileError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml_string = toml::to_string_pretty(data)?;

        // Write to temporary file in the same directory
        let tmp_path = self.get_temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;

        // Ensure data is written to disk
        tmp_file.sync_all()?;
        drop(tmp_file);

        // Atomic rename
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Performs a transactional update with file locking.
    ///
    /// The update function receives the current data (or the default when
    /// the file does not exist yet) and can modify it. If the function
    /// returns `Ok(())`, the changes are atomically written back.
    pub fn update<F>(&self, f: F) -> Result<(), DraftFileError>
    where
        F: FnOnce(&mut DraftFileData) -> Result<(), DraftFileError>,
    {
        // Acquire exclusive lock
        let _lock = self.acquire_lock()?;

        // Load current data
        let mut data = self.load()?.unwrap_or_default();

        // Apply update function
        f(&mut data)?;

        // Save atomically
        self.save(&data)?;

        Ok(())
    }

    /// Gets a temporary file path for atomic writes.
    fn get_temp_path(&self) -> Result<PathBuf, DraftFileError> {
        let parent = self.path.parent().ok_or_else(|| {
            DraftFileError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no parent directory",
            ))
        })?;

        let file_name = self.path.file_name().ok_or_else(|| {
            DraftFileError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no file name",
            ))
        })?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }

    /// Acquires an exclusive file lock.
    ///
    /// Returns a lock guard that automatically releases the lock when dropped.
    fn acquire_lock(&self) -> Result<FileLock, DraftFileError> {
        FileLock::acquire(&self.path)
    }
}

/// A file lock guard that automatically releases the lock when dropped.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    /// Acquires an exclusive lock on the given path.
    fn acquire(path: &Path) -> Result<Self, DraftFileError> {
        let lock_path = path.with_extension("lock");

        // Ensure parent directory exists
        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        // Open or create lock file
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .open(&lock_path)?;

        // Try to acquire exclusive lock with fs2
        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| DraftFileError::LockError(format!("Failed to acquire lock: {}", e)))?;
        }

        #[cfg(not(unix))]
        {
            // On non-Unix systems, we don't have file locking
            // This is acceptable for single-user desktop apps
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock is automatic when the file handle is dropped
        // Try to remove lock file (best effort)
        let _ = fs::remove_file(&self.lock_path);
    }
}
