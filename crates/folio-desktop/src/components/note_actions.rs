//! Shared notes and navigation actions used by UI components.

use dioxus::prelude::*;
use folio_core::viewer::PageNavigation;

use crate::services::{capture_note_regions, play_flip_sound};
use crate::state::AppState;

/// Run the notes trigger button.
///
/// While locked this opens the secret prompt. While unlocked it reads the
/// edited regions back from the page, then saves and locks them. Clicks
/// while a save is being read back are ignored.
pub fn trigger_notes(mut state: AppState) {
    if !state.notes.read().state().is_unlocked() {
        if let Err(error) = state.notes.write().trigger() {
            tracing::error!("Notes trigger failed: {}", error);
        }
        return;
    }

    if *state.saving.peek() {
        tracing::debug!("Save already in progress");
        return;
    }
    state.saving.set(true);

    spawn(async move {
        save_captured_notes(state).await;
        state.saving.set(false);
    });
}

async fn save_captured_notes(mut state: AppState) {
    let captured = match capture_note_regions().await {
        Ok(captured) => captured,
        Err(error) => {
            tracing::error!("Failed to read notes before saving: {}", error);
            state.save_error.set(Some(error.to_string()));
            return;
        }
    };

    let result = {
        let mut notes = state.notes.write();
        if !notes.state().is_unlocked() {
            return;
        }
        for (page, content) in captured {
            if let Err(error) = notes.edit_region(&page, content) {
                tracing::warn!("Skipping note for page {}: {}", page, error);
            }
        }
        notes.save_notes()
    };

    match result {
        Ok(outcome) => {
            tracing::debug!("Notes save finished: {:?}", outcome);
            state.save_error.set(None);
        }
        Err(error) => {
            tracing::error!("Failed to save notes: {}", error);
            state.save_error.set(Some(format!("Could not save notes: {error}")));
        }
    }
}

/// Turn the page and play the flip sound when sound is on.
pub fn turn_page(mut state: AppState, navigation: PageNavigation) {
    let turn = state.book.write().turn(navigation);
    if turn.is_some() && state.viewer.read().sound.should_play_flip_sound() {
        play_flip_sound();
    }
}
