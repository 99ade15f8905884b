//! Draft domain models.
//!
//! This module contains the core entities of an editing session: the
//! package reference the page belongs to, the seed for editing an existing
//! page, and the read view exposed to consumers.

use serde::{Deserialize, Serialize};

/// Placeholder body for a brand-new page when neither a persisted draft nor
/// caller-supplied content exists.
pub const DEFAULT_PAGE_BODY: &str = "# New page";

/// Identifies the package whose wiki is being edited.
///
/// Supplied once at session construction and passed through unchanged to
/// consumers (preview, save calls). The draft core never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRef {
    /// Owning team namespace
    pub namespace: String,
    /// Package name within the namespace
    pub name: String,
}

impl PackageRef {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Returns the canonical `namespace-name` form used across the package
    /// index.
    pub fn full_name(&self) -> String {
        format!("{}-{}", self.namespace, self.name)
    }
}

/// Seed data for editing a page that already exists remotely.
///
/// `body` is the page content as last saved; it becomes the baseline the
/// dirty flag compares against for the whole session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistingPage {
    /// Remote page identifier
    pub id: String,
    /// Page title as last saved
    pub title: String,
    /// Page markdown body as last saved
    pub body: String,
}

/// The two editing modes of a session.
///
/// The mode is determined at construction by whether a remote page
/// identifier exists, and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    /// Creating a page that does not exist remotely yet; eligible for
    /// local draft persistence.
    NewPage,
    /// Editing a page that already exists remotely; never persisted
    /// locally, but tracked for unsaved-change warnings.
    ExistingPage,
}

/// Read snapshot of the current edit state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftView {
    /// Remote page identifier; `None` while the page is unsaved
    pub page_id: Option<String>,
    /// Current title text
    pub title: String,
    /// Current markdown body
    pub body: String,
    /// Package the page belongs to
    pub package: PackageRef,
}
