use std::sync::Arc;

use tracing::{debug, warn};

use super::event::DraftEvent;
use super::model::{DraftView, EditMode, ExistingPage, PackageRef, DEFAULT_PAGE_BODY};
use super::repository::{DraftStore, NEW_PAGE_DRAFT_KEY};

/// Listener invoked after every state change with the event describing it.
pub type DraftListener = Box<dyn Fn(&DraftEvent) + Send>;

/// Tracks one in-progress wiki page edit.
///
/// `DraftManager` is responsible for:
/// - Holding the current title and body of the edit
/// - Persisting the body of an unsaved new page to the draft store on
///   every change, so it survives restarts
/// - Deriving the unsaved-changes flag for existing pages
/// - Notifying subscribers (preview pane, navigation guard) on change
///
/// The editing mode is fixed at construction: a session created with an
/// [`ExistingPage`] seed stays in existing-page mode for its entire
/// lifetime, and a session created without one stays in new-page mode.
///
/// Store access is strictly best-effort. A missing, disabled, or failing
/// backend downgrades draft persistence but never surfaces an error to the
/// editing surface; the in-memory state always updates.
pub struct DraftManager {
    /// Remote page identifier; `None` in new-page mode
    page_id: Option<String>,
    title: String,
    body: String,
    /// Body as last saved remotely; `Some` exactly when `page_id` is
    body_baseline: Option<String>,
    package: PackageRef,
    store: Arc<dyn DraftStore>,
    listeners: Vec<DraftListener>,
}

impl DraftManager {
    /// Creates a manager for the given seed.
    ///
    /// # Arguments
    ///
    /// * `seed` - The page as last saved remotely, or `None` to start a
    ///   new page
    /// * `package` - The package whose wiki is being edited
    /// * `store` - The draft store backend
    pub fn new(seed: Option<ExistingPage>, package: PackageRef, store: Arc<dyn DraftStore>) -> Self {
        match seed {
            Some(page) => Self::existing_page(page, package, store),
            None => Self::new_page(None, package, store),
        }
    }

    /// Starts an editing session for a page that does not exist remotely
    /// yet.
    ///
    /// The initial body is resolved exactly once, here: a previously
    /// persisted draft wins over `initial_body`, which wins over
    /// [`DEFAULT_PAGE_BODY`]. The draft wins because it is more recent
    /// user intent than whatever starting content the caller suggests.
    /// A store read failure falls through to the next candidate.
    pub fn new_page(
        initial_body: Option<String>,
        package: PackageRef,
        store: Arc<dyn DraftStore>,
    ) -> Self {
        let stored = store.get(NEW_PAGE_DRAFT_KEY).unwrap_or_else(|e| {
            warn!(error = %e, "failed to read persisted draft, falling back");
            None
        });
        let body = stored
            .or(initial_body)
            .unwrap_or_else(|| DEFAULT_PAGE_BODY.to_string());
        debug!(package = %package.full_name(), "new-page edit session started");

        Self {
            page_id: None,
            title: String::new(),
            body,
            body_baseline: None,
            package,
            store,
            listeners: Vec::new(),
        }
    }

    /// Starts an editing session for a page that already exists remotely.
    ///
    /// The draft store is not consulted; title and body come from the seed,
    /// and the seed body becomes the baseline the dirty flag compares
    /// against.
    pub fn existing_page(page: ExistingPage, package: PackageRef, store: Arc<dyn DraftStore>) -> Self {
        debug!(
            package = %package.full_name(),
            page_id = %page.id,
            "existing-page edit session started"
        );

        Self {
            page_id: Some(page.id),
            title: page.title,
            body_baseline: Some(page.body.clone()),
            body: page.body,
            package,
            store,
            listeners: Vec::new(),
        }
    }

    /// Updates the title. No persistence, no effect on the dirty flag.
    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
        self.emit(DraftEvent::TitleChanged {
            title: self.title.clone(),
        });
    }

    /// Updates the body.
    ///
    /// In new-page mode the value is also written to the draft store,
    /// overwriting any prior draft; a write failure is logged and the
    /// in-memory update is kept. In existing-page mode the store is never
    /// touched.
    pub fn set_body(&mut self, value: impl Into<String>) {
        let was_dirty = self.is_dirty();
        self.body = value.into();

        if self.mode() == EditMode::NewPage {
            if let Err(e) = self.store.set(NEW_PAGE_DRAFT_KEY, &self.body) {
                warn!(error = %e, "failed to persist draft, keeping in-memory state");
            }
        }

        self.emit(DraftEvent::BodyChanged {
            body: self.body.clone(),
        });
        self.emit_dirty_transition(was_dirty);
    }

    /// Removes the persisted new-page draft.
    ///
    /// The save consumer calls this right after a page is successfully
    /// created, so a stale draft does not resurface in the next new-page
    /// session. Removing an absent draft is a no-op.
    pub fn clear_cache(&self) {
        match self.store.remove(NEW_PAGE_DRAFT_KEY) {
            Ok(()) => debug!("persisted draft cleared"),
            Err(e) => warn!(error = %e, "failed to clear persisted draft"),
        }
        self.emit(DraftEvent::DraftCleared);
    }

    /// Resets the dirty baseline to the current body.
    ///
    /// Call after a successful save of an existing page so the unsaved-
    /// changes flag reflects the new remote state. The manager never
    /// resets the baseline on its own. No effect in new-page mode.
    pub fn mark_saved(&mut self) {
        let was_dirty = self.is_dirty();
        if self.body_baseline.is_some() {
            self.body_baseline = Some(self.body.clone());
        }
        self.emit_dirty_transition(was_dirty);
    }

    /// True when an existing page's body has diverged from its last saved
    /// value. Always false for new pages: their edits are covered by the
    /// persistent draft instead.
    pub fn is_dirty(&self) -> bool {
        match &self.body_baseline {
            Some(baseline) => self.body != *baseline,
            None => false,
        }
    }

    /// Returns the editing mode fixed at construction.
    pub fn mode(&self) -> EditMode {
        if self.page_id.is_some() {
            EditMode::ExistingPage
        } else {
            EditMode::NewPage
        }
    }

    /// Returns a read snapshot of the current state.
    pub fn snapshot(&self) -> DraftView {
        DraftView {
            page_id: self.page_id.clone(),
            title: self.title.clone(),
            body: self.body.clone(),
            package: self.package.clone(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn page_id(&self) -> Option<&str> {
        self.page_id.as_deref()
    }

    pub fn package(&self) -> &PackageRef {
        &self.package
    }

    /// Registers a listener invoked after every state change.
    pub fn subscribe(&mut self, listener: DraftListener) {
        self.listeners.push(listener);
    }

    fn emit(&self, event: DraftEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }

    /// Emits `DirtyChanged` only when the derived flag actually flipped.
    fn emit_dirty_transition(&self, was_dirty: bool) {
        let dirty = self.is_dirty();
        if dirty != was_dirty {
            self.emit(DraftEvent::DirtyChanged { dirty });
        }
    }
}
