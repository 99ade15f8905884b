//! No-op draft store.

use wikidraft_core::draft::DraftStore;
use wikidraft_core::error::Result;

/// Draft store that stores nothing.
///
/// The substitute backend for environments where persistence is disabled
/// entirely: reads always find nothing, writes and removes succeed without
/// effect. Editing sessions behave normally, minus draft recovery.
#[derive(Default)]
pub struct NoopDraftStore;

impl NoopDraftStore {
    pub fn new() -> Self {
        Self
    }
}

impl DraftStore for NoopDraftStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_are_discarded() {
        let store = NoopDraftStore::new();

        store.set("key", "body").unwrap();
        assert_eq!(store.get("key").unwrap(), None);

        store.remove("key").unwrap();
    }
}
