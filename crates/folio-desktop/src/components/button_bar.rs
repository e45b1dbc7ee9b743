//! Button bar with viewer and notes actions

use dioxus::desktop::window;
use dioxus::prelude::*;
use folio_core::viewer::FullscreenRequest;

use super::button::{Button, ButtonVariant};
use super::note_actions::trigger_notes;
use crate::services::{apply_playback, set_muted};
use crate::state::AppState;

/// Zoom, sound, fullscreen, and the unlock/save trigger
#[component]
pub fn ButtonBar() -> Element {
    let mut state = use_context::<AppState>();

    let (zoom, sound, fullscreen) = {
        let viewer = state.viewer.read();
        (viewer.zoom, viewer.sound, viewer.fullscreen)
    };
    let trigger_label = state.notes.read().trigger_label();
    let unlocked = state.notes.read().state().is_unlocked();
    let save_error = (state.save_error)();
    let sound_icon = sound.sound_icon();
    let playback_icon = sound.playback_icon();
    let fullscreen_icon = fullscreen.icon();

    let zoom_in = move |_: MouseEvent| {
        let mut viewer = state.viewer.write();
        if viewer.zoom.zoom_in() {
            tracing::debug!("Zoomed in to {}", viewer.zoom.factor());
        }
    };

    let zoom_out = move |_: MouseEvent| {
        let mut viewer = state.viewer.write();
        if viewer.zoom.zoom_out() {
            tracing::debug!("Zoomed out to {}", viewer.zoom.factor());
        }
        if !viewer.zoom.is_magnified() {
            viewer.drag.reset();
        }
    };

    let toggle_sound = move |_: MouseEvent| {
        let muted = state.viewer.write().sound.toggle_sound();
        set_muted(muted);
    };

    let toggle_playback = move |_: MouseEvent| {
        let command = state.viewer.write().sound.toggle_playback();
        apply_playback(command);
    };

    let toggle_fullscreen = move |_: MouseEvent| {
        let request = state.viewer.read().fullscreen.toggle();
        let enter = request == FullscreenRequest::Enter;
        window().set_fullscreen(enter);
        state.viewer.write().fullscreen.set_active(enter);
    };

    let on_trigger = move |_: MouseEvent| trigger_notes(state);

    let trigger_variant = if unlocked {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Secondary
    };

    rsx! {
        div {
            class: "button-bar",

            Button {
                variant: ButtonVariant::Icon,
                title: "Zoom in",
                disabled: !zoom.can_zoom_in(),
                onclick: zoom_in,
                span { class: "icon", "+" }
            }
            Button {
                variant: ButtonVariant::Icon,
                title: "Zoom out",
                disabled: !zoom.can_zoom_out(),
                onclick: zoom_out,
                span { class: "icon", "−" }
            }
            Button {
                variant: ButtonVariant::Icon,
                title: "Sound",
                active: sound.is_sound_on(),
                onclick: toggle_sound,
                span { class: "icon", "{sound_icon}" }
            }
            Button {
                variant: ButtonVariant::Icon,
                title: "Play music",
                active: sound.is_playing(),
                onclick: toggle_playback,
                span { class: "icon", "{playback_icon}" }
            }
            Button {
                variant: ButtonVariant::Icon,
                title: "Fullscreen",
                active: fullscreen.is_active(),
                onclick: toggle_fullscreen,
                span { class: "icon", "{fullscreen_icon}" }
            }

            // Spacer
            div { style: "flex: 1;" }

            if let Some(error) = save_error {
                span { class: "save-error", "{error}" }
            }

            Button {
                variant: trigger_variant,
                onclick: on_trigger,
                "{trigger_label}"
            }
        }
    }
}
