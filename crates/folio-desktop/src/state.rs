//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use folio_core::viewer::{Book, BookSize, PointerSupport, ViewerState};
use folio_core::NotesController;

use crate::services::LocalStorage;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Notes lock, note regions, and the secret prompt
    pub notes: Signal<NotesController<LocalStorage>>,
    /// The book and its visible page
    pub book: Signal<Book>,
    /// Zoom, pan, sound, fullscreen, and cursor state
    pub viewer: Signal<ViewerState>,
    /// Book size for the current window width
    pub book_size: Signal<BookSize>,
    /// Last failed save, shown next to the trigger button
    pub save_error: Signal<Option<String>>,
    /// A save is reading regions back from the page
    pub saving: Signal<bool>,
    /// Pointer and touch support of the webview
    pub pointer: Signal<PointerSupport>,
}

impl AppState {
    /// Inline style for the book element
    #[must_use]
    pub fn book_style(&self) -> String {
        let size = (self.book_size)();
        let viewer = self.viewer.read();
        format!(
            "width: {}px; height: {}px; transform: {}; cursor: {};",
            size.width,
            size.height,
            viewer.book_transform(),
            viewer.drag.cursor(viewer.zoom),
        )
    }
}
