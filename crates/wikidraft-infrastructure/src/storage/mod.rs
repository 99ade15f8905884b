//! Storage layer for atomic draft file operations.

mod draft_file;

pub use draft_file::{AtomicDraftFile, DraftEntry, DraftFileData, DraftFileError};
