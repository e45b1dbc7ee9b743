//! UI Components
//!
//! Building blocks of the flipbook window.

mod button;
mod button_bar;
mod custom_cursor;
mod flipbook;
mod note_actions;
mod note_region;
mod secret_modal;

pub use button_bar::ButtonBar;
pub use custom_cursor::{trail_cursor_ring, CustomCursor};
pub use flipbook::Flipbook;
pub use secret_modal::SecretModal;
