//! Application services
//!
//! Local storage and the webview scripts the shell relies on.

mod local_storage;
mod media;
mod webview;

pub use local_storage::{open_local_storage, LocalStorage};
pub use media::{apply_playback, play_flip_sound, set_muted, BACKGROUND_MUSIC_ID, PAGE_FLIP_SOUND_ID};
pub use webview::{capture_note_regions, pointer_support, user_agent};
