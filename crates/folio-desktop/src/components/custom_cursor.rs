//! Custom cursor with a trailing ring

use dioxus::prelude::*;
use folio_core::viewer::RING_TRAIL_DELAY;

use crate::state::AppState;

/// Move the ring to `target` after the trail delay
pub fn trail_cursor_ring(mut state: AppState, target: (f64, f64)) {
    spawn(async move {
        tokio::time::sleep(RING_TRAIL_DELAY).await;
        state.viewer.write().cursor.ring_arrived(target);
    });
}

/// Dot and ring drawn at the pointer position
#[component]
pub fn CustomCursor() -> Element {
    let state = use_context::<AppState>();
    let cursor = state.viewer.read().cursor;
    let (dot_x, dot_y) = cursor.dot();
    let (ring_x, ring_y) = cursor.ring();

    rsx! {
        div {
            id: "custom-cursor",
            div {
                class: "cursor-dot",
                style: "left: {dot_x}px; top: {dot_y}px;",
            }
            div {
                class: "cursor-ring",
                style: "left: {ring_x}px; top: {ring_y}px;",
            }
        }
    }
}
