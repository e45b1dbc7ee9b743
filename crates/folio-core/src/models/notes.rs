//! Notes store and note region models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::PageId;

/// Saved note content keyed by page.
///
/// Serializes as a flat JSON object (`{"1": "<p>..</p>", ...}`) so the
/// persisted blob stays compatible with stores written by earlier builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotesStore {
    entries: BTreeMap<PageId, String>,
}

impl NotesStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the saved content for a page
    #[must_use]
    pub fn get(&self, page: &PageId) -> Option<&str> {
        self.entries.get(page).map(String::as_str)
    }

    /// Store content for a page, replacing any previous value
    pub fn insert(&mut self, page: PageId, content: impl Into<String>) {
        self.entries.insert(page, content.into());
    }

    /// Number of pages with saved content
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been saved
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over saved entries in page id order
    pub fn iter(&self) -> impl Iterator<Item = (&PageId, &str)> {
        self.entries.iter().map(|(page, content)| (page, content.as_str()))
    }

    /// Serialize the whole store to its persisted JSON form
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a persisted JSON blob
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

impl FromIterator<(PageId, String)> for NotesStore {
    fn from_iter<I: IntoIterator<Item = (PageId, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// An on-page note area that can be edited while notes are unlocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRegion {
    /// Page this region belongs to
    pub page: PageId,
    /// Current rendered content (rich text as HTML)
    pub content: String,
    /// Whether the region currently accepts edits
    pub editable: bool,
}

impl NoteRegion {
    /// Create a read-only region with its initial content
    pub fn new(page: impl Into<PageId>, content: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            content: content.into(),
            editable: false,
        }
    }
}
