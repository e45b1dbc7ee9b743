//! Viewer state helpers
//!
//! Small state holders and pure functions behind the book view: zoom and
//! pan, responsive sizing, swipe navigation, sound, fullscreen, and the
//! custom cursor. None of these persist anything.

mod book;
mod cursor;
mod drag;
mod fullscreen;
mod gesture;
mod layout;
mod sound;
mod viewport;
mod zoom;

pub use book::{Book, PageTurn};
pub use cursor::{
    CursorTrail, PointerSupport, FINE_POINTER_CLASS, RING_TRAIL_DELAY, TOUCH_DEVICE_CLASS,
};
pub use drag::{DragState, Offset};
pub use fullscreen::{FullscreenRequest, FullscreenState, FULLSCREEN_BODY_CLASS};
pub use gesture::{PageNavigation, SwipeTracker, SWIPE_THRESHOLD_PX};
pub use layout::{book_dimensions, is_orientation_flip, BookSize, ORIENTATION_SETTLE_DELAY};
pub use sound::{PlaybackCommand, SoundState};
pub use viewport::{is_mobile_user_agent, MOBILE_VIEWPORT_CONTENT};
pub use zoom::Zoom;

/// All per-window viewer state, owned by the view root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerState {
    pub zoom: Zoom,
    pub drag: DragState,
    pub swipe: SwipeTracker,
    pub sound: SoundState,
    pub fullscreen: FullscreenState,
    pub cursor: CursorTrail,
}

impl ViewerState {
    /// React to a window resize: drop zoom and pan, then size the book
    pub fn resize(&mut self, window_width: f64) -> BookSize {
        self.zoom.reset();
        self.drag.reset();
        book_dimensions(window_width)
    }

    /// CSS transform for the book element
    #[must_use]
    pub fn book_transform(&self) -> String {
        self.drag.transform(self.zoom)
    }
}
