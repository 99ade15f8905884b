//! Storage backends for the wikidraft core.
//!
//! Concrete [`wikidraft_core::draft::DraftStore`] implementations plus the
//! path resolution they rely on.

pub mod file_draft_store;
pub mod memory_draft_store;
pub mod noop_draft_store;
pub mod paths;
pub mod storage;

pub use crate::file_draft_store::FileDraftStore;
pub use crate::memory_draft_store::MemoryDraftStore;
pub use crate::noop_draft_store::NoopDraftStore;
