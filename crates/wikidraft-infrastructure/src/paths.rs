//! Unified path management for wikidraft storage files.
//!
//! All draft data lives under the platform config directory so it survives
//! restarts alongside the rest of the editor's local state.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for wikidraft.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/wikidraft/         # Config directory (platform-specific)
/// └── drafts.toml              # Persisted new-page drafts
/// ```
pub struct WikidraftPaths;

impl WikidraftPaths {
    /// Returns the wikidraft configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/wikidraft/`)
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("wikidraft"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the draft file.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to drafts.toml
    /// - `Err(PathError)`: Could not determine path
    pub fn drafts_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("drafts.toml"))
    }
}
