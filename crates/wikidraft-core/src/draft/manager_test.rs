#[cfg(test)]
mod tests {
    use crate::draft::event::DraftEvent;
    use crate::draft::manager::DraftManager;
    use crate::draft::model::{EditMode, ExistingPage, PackageRef, DEFAULT_PAGE_BODY};
    use crate::draft::repository::{DraftStore, NEW_PAGE_DRAFT_KEY};
    use crate::error::{Result, WikidraftError};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // Mock store that records how often it is touched
    #[derive(Default)]
    struct RecordingStore {
        entries: Mutex<HashMap<String, String>>,
        reads: AtomicUsize,
        writes: AtomicUsize,
        removes: AtomicUsize,
    }

    impl RecordingStore {
        fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        fn with_draft(body: &str) -> Arc<Self> {
            let store = Self::default();
            store
                .entries
                .lock()
                .unwrap()
                .insert(NEW_PAGE_DRAFT_KEY.to_string(), body.to_string());
            Arc::new(store)
        }

        fn stored_draft(&self) -> Option<String> {
            self.entries.lock().unwrap().get(NEW_PAGE_DRAFT_KEY).cloned()
        }

        fn touch_count(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
                + self.writes.load(Ordering::SeqCst)
                + self.removes.load(Ordering::SeqCst)
        }
    }

    impl DraftStore for RecordingStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.removes.fetch_add(1, Ordering::SeqCst);
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }
    }

    // Mock store that fails every operation
    struct FailingStore;

    impl DraftStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(WikidraftError::storage("store disabled"))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(WikidraftError::storage("store disabled"))
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Err(WikidraftError::storage("store disabled"))
        }
    }

    fn package() -> PackageRef {
        PackageRef::new("SpaceTeam", "RocketMod")
    }

    fn existing_page(body: &str) -> ExistingPage {
        ExistingPage {
            id: "page-1".to_string(),
            title: "Install guide".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_stored_draft_wins_over_initial_body() {
        let store = RecordingStore::with_draft("draft body");

        let manager = DraftManager::new_page(Some("initial body".to_string()), package(), store);

        assert_eq!(manager.body(), "draft body");
    }

    #[test]
    fn test_initial_body_used_when_no_draft() {
        let store = RecordingStore::new();

        let manager = DraftManager::new_page(Some("initial body".to_string()), package(), store);

        assert_eq!(manager.body(), "initial body");
    }

    #[test]
    fn test_default_body_when_nothing_available() {
        let store = RecordingStore::new();

        let manager = DraftManager::new_page(None, package(), store);

        assert_eq!(manager.body(), DEFAULT_PAGE_BODY);
        assert_eq!(manager.title(), "");
        assert_eq!(manager.mode(), EditMode::NewPage);
    }

    #[test]
    fn test_new_page_persists_every_body_change() {
        let store = RecordingStore::new();
        let mut manager = DraftManager::new_page(None, package(), store.clone());

        manager.set_body("first");
        assert_eq!(store.stored_draft().as_deref(), Some("first"));

        manager.set_body("second");
        assert_eq!(store.stored_draft().as_deref(), Some("second"));
    }

    #[test]
    fn test_draft_survives_session_reconstruction() {
        let store = RecordingStore::new();

        let mut manager = DraftManager::new_page(None, package(), store.clone());
        manager.set_body("X");
        drop(manager);

        let manager = DraftManager::new_page(None, package(), store);
        assert_eq!(manager.body(), "X");
    }

    #[test]
    fn test_clear_cache_removes_draft() {
        let store = RecordingStore::new();

        let mut manager = DraftManager::new_page(None, package(), store.clone());
        manager.set_body("unsaved");
        manager.clear_cache();
        drop(manager);

        let manager = DraftManager::new_page(None, package(), store);
        assert_eq!(manager.body(), DEFAULT_PAGE_BODY);
    }

    #[test]
    fn test_clear_cache_is_idempotent() {
        let store = RecordingStore::new();
        let manager = DraftManager::new_page(None, package(), store);

        manager.clear_cache();
        manager.clear_cache();
    }

    #[test]
    fn test_existing_page_never_touches_store() {
        let store = RecordingStore::new();

        let mut manager =
            DraftManager::new(Some(existing_page("A")), package(), store.clone());
        manager.set_body("B");
        manager.set_body("C");
        manager.set_title("Renamed");

        assert_eq!(store.touch_count(), 0);
        assert_eq!(manager.mode(), EditMode::ExistingPage);

        // A later new-page session is unaffected by the existing-page edits
        let fresh = DraftManager::new_page(None, package(), store);
        assert_eq!(fresh.body(), DEFAULT_PAGE_BODY);
    }

    #[test]
    fn test_dirty_flag_tracks_divergence_from_baseline() {
        let store = RecordingStore::new();
        let mut manager = DraftManager::new(Some(existing_page("A")), package(), store);

        assert!(!manager.is_dirty());

        manager.set_body("B");
        assert!(manager.is_dirty());

        // Restoring the exact original value clears dirtiness
        manager.set_body("A");
        assert!(!manager.is_dirty());
    }

    #[test]
    fn test_title_changes_never_affect_dirty() {
        let store = RecordingStore::new();
        let mut manager = DraftManager::new(Some(existing_page("A")), package(), store);

        manager.set_title("Renamed");
        assert!(!manager.is_dirty());

        manager.set_body("B");
        manager.set_title("Renamed again");
        assert!(manager.is_dirty());
    }

    #[test]
    fn test_new_page_is_never_dirty() {
        let store = RecordingStore::new();
        let mut manager = DraftManager::new_page(None, package(), store);

        manager.set_body("edited");
        assert!(!manager.is_dirty());
    }

    #[test]
    fn test_mark_saved_resets_baseline() {
        let store = RecordingStore::new();
        let mut manager = DraftManager::new(Some(existing_page("A")), package(), store);

        manager.set_body("B");
        assert!(manager.is_dirty());

        manager.mark_saved();
        assert!(!manager.is_dirty());

        manager.set_body("A");
        assert!(manager.is_dirty());
    }

    #[test]
    fn test_set_body_survives_store_write_failure() {
        let mut manager = DraftManager::new_page(None, package(), Arc::new(FailingStore));

        manager.set_body("kept in memory");

        assert_eq!(manager.body(), "kept in memory");
    }

    #[test]
    fn test_seeding_falls_back_on_store_read_failure() {
        let manager = DraftManager::new_page(
            Some("initial body".to_string()),
            package(),
            Arc::new(FailingStore),
        );
        assert_eq!(manager.body(), "initial body");

        let manager = DraftManager::new_page(None, package(), Arc::new(FailingStore));
        assert_eq!(manager.body(), DEFAULT_PAGE_BODY);
    }

    #[test]
    fn test_clear_cache_survives_store_failure() {
        let manager = DraftManager::new_page(None, package(), Arc::new(FailingStore));
        manager.clear_cache();
    }

    #[test]
    fn test_snapshot_exposes_current_state() {
        let store = RecordingStore::new();
        let mut manager = DraftManager::new(Some(existing_page("A")), package(), store);
        manager.set_title("Install guide v2");

        let view = manager.snapshot();
        assert_eq!(view.page_id.as_deref(), Some("page-1"));
        assert_eq!(view.title, "Install guide v2");
        assert_eq!(view.body, "A");
        assert_eq!(view.package.full_name(), "SpaceTeam-RocketMod");
    }

    #[test]
    fn test_listeners_receive_body_and_title_events() {
        let store = RecordingStore::new();
        let mut manager = DraftManager::new_page(None, package(), store);

        let events: Arc<Mutex<Vec<DraftEvent>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        manager.subscribe(Box::new(move |event| {
            sink.lock().unwrap().push(event.clone());
        }));

        manager.set_title("Title");
        manager.set_body("Body");

        let events = events.lock().unwrap();
        assert!(matches!(&events[0], DraftEvent::TitleChanged { title } if title == "Title"));
        assert!(matches!(&events[1], DraftEvent::BodyChanged { body } if body == "Body"));
    }

    #[test]
    fn test_dirty_changed_fires_only_on_transitions() {
        let store = RecordingStore::new();
        let mut manager = DraftManager::new(Some(existing_page("A")), package(), store);

        let flips: Arc<Mutex<Vec<bool>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = flips.clone();
        manager.subscribe(Box::new(move |event| {
            if let DraftEvent::DirtyChanged { dirty } = event {
                sink.lock().unwrap().push(*dirty);
            }
        }));

        manager.set_body("B"); // clean -> dirty
        manager.set_body("C"); // still dirty, no event
        manager.set_body("A"); // dirty -> clean

        assert_eq!(*flips.lock().unwrap(), vec![true, false]);
    }
}
