use serde::{Deserialize, Serialize};

/// Change notifications published by the draft manager.
///
/// Consumers subscribe for the slice they care about: the preview pane
/// re-renders on `BodyChanged`, the navigation guard re-evaluates on
/// `DirtyChanged`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DraftEvent {
    /// The title text changed.
    TitleChanged { title: String },
    /// The body text changed.
    BodyChanged { body: String },
    /// The derived unsaved-changes flag flipped.
    DirtyChanged { dirty: bool },
    /// The persisted new-page draft was removed.
    DraftCleared,
}
