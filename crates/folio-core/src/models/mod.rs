//! Data models for Folio

mod notes;
mod page;
mod unlock;

pub use notes::{NoteRegion, NotesStore};
pub use page::PageId;
pub use unlock::UnlockState;
