//! Home view - the book and its controls

use dioxus::prelude::*;

use crate::components::{ButtonBar, Flipbook, SecretModal};
use crate::services::{BACKGROUND_MUSIC_ID, PAGE_FLIP_SOUND_ID};
use crate::state::AppState;

/// Home view component - the main application screen
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let title = state.book.read().title().to_string();
    let prompt_visible = state.notes.read().prompt().is_visible();

    rsx! {
        div {
            class: "home-container",

            header {
                class: "book-header",
                h1 { class: "book-title", "{title}" }
            }

            Flipbook {}
            ButtonBar {}

            if prompt_visible {
                SecretModal {}
            }

            audio {
                id: BACKGROUND_MUSIC_ID,
                src: "assets/audio/background-music.mp3",
                r#loop: true,
                muted: true,
                preload: "auto",
            }
            audio {
                id: PAGE_FLIP_SOUND_ID,
                src: "assets/audio/page-flip.mp3",
                muted: true,
                preload: "auto",
            }
        }
    }
}
