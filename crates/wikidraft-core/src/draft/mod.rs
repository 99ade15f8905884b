//! Draft domain module.
//!
//! This module contains the editing-session models, the draft store
//! interface, and the manager that ties them together.
//!
//! # Module Structure
//!
//! - `model`: Core domain models (`PackageRef`, `ExistingPage`, `DraftView`)
//! - `event`: Change notifications (`DraftEvent`)
//! - `repository`: Store trait for draft persistence (`DraftStore`)
//! - `manager`: Edit-session state machine (`DraftManager`)

mod event;
mod manager;
mod model;
mod repository;

#[cfg(test)]
mod manager_test;

// Re-export public API
pub use event::DraftEvent;
pub use manager::{DraftListener, DraftManager};
pub use model::{DraftView, EditMode, ExistingPage, PackageRef, DEFAULT_PAGE_BODY};
pub use repository::{DraftStore, NEW_PAGE_DRAFT_KEY};
