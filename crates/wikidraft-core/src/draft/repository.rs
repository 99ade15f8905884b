//! Draft store trait.
//!
//! Defines the interface for persisting unsaved new-page drafts.

use crate::error::Result;

/// Storage key under which the body of an unsaved new wiki page lives.
///
/// One fixed key, shared process-wide: the system keeps at most one
/// outstanding new-page draft at a time, not one per package or title.
pub const NEW_PAGE_DRAFT_KEY: &str = "wiki.new-page.draft";

/// An abstract key-value store for unsaved page drafts.
///
/// This trait decouples the draft manager from the concrete storage
/// mechanism (a TOML file, an in-memory map, or nothing at all), so tests
/// can substitute a fake and hosts without writable storage can plug in a
/// no-op backend.
///
/// # Implementation Notes
///
/// Implementations should handle:
/// - Concurrent access from multiple threads (the trait is `Send + Sync`)
/// - Durability appropriate to the backend (drafts must survive restarts
///   for the file-backed store)
///
/// Callers treat every error as best-effort: a failing store degrades the
/// draft feature, it never breaks the editing session.
pub trait DraftStore: Send + Sync {
    /// Reads the draft stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(body))`: A draft exists
    /// - `Ok(None)`: No draft stored under this key
    /// - `Err(_)`: The backend failed or is unavailable
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, overwriting any prior value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the draft stored under `key`.
    ///
    /// Removing a key that has no stored draft is a no-op, not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
