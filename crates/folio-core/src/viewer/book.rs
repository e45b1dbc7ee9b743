//! Page navigation through the book

use super::PageNavigation;
use crate::config::{BookManifest, PageSpec};

/// Notification that the visible page changed.
///
/// The view plays the page-flip sound in response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTurn {
    pub from: usize,
    pub to: usize,
}

/// A book and the index of its visible page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    manifest: BookManifest,
    current: usize,
}

impl Book {
    /// Open a book on its first page
    #[must_use]
    pub const fn new(manifest: BookManifest) -> Self {
        Self {
            manifest,
            current: 0,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.manifest.title
    }

    #[must_use]
    pub fn pages(&self) -> &[PageSpec] {
        &self.manifest.pages
    }

    #[must_use]
    pub const fn manifest(&self) -> &BookManifest {
        &self.manifest
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// The visible page
    #[must_use]
    pub fn current_page(&self) -> Option<&PageSpec> {
        self.manifest.pages.get(self.current)
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.manifest.pages.len()
    }

    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.page_count()
    }

    /// Move one page; returns a turn only when the page changed
    pub fn turn(&mut self, navigation: PageNavigation) -> Option<PageTurn> {
        let target = match navigation {
            PageNavigation::Previous => self.current.checked_sub(1)?,
            PageNavigation::Next => self.current + 1,
        };
        self.go_to(target)
    }

    /// Jump to page `index`; out-of-range or same-page jumps do nothing
    pub fn go_to(&mut self, index: usize) -> Option<PageTurn> {
        if index >= self.page_count() || index == self.current {
            return None;
        }
        let turn = PageTurn {
            from: self.current,
            to: index,
        };
        self.current = index;
        tracing::debug!("Turned page {} -> {}", turn.from, turn.to);
        Some(turn)
    }
}
