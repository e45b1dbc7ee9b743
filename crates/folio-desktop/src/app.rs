//! Main application component

use std::time::Duration;

use dioxus::desktop::window;
use dioxus::prelude::*;

use folio_core::viewer::{
    book_dimensions, is_mobile_user_agent, is_orientation_flip, Book, PointerSupport,
    ViewerState, MOBILE_VIEWPORT_CONTENT, ORIENTATION_SETTLE_DELAY,
};
use folio_core::NotesController;

use crate::bootstrap_config::load_bootstrap_config;
use crate::components::{trail_cursor_ring, CustomCursor};
use crate::services::{open_local_storage, pointer_support, user_agent};
use crate::state::AppState;
use crate::views::Home;

/// How often the window is checked for resizes and fullscreen changes
const WINDOW_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Root application component
#[component]
pub fn App() -> Element {
    let bootstrap = use_hook(load_bootstrap_config);

    // State signals
    let book = use_signal(|| Book::new(bootstrap.load_book()));
    let notes = use_signal(|| {
        let mut controller = NotesController::for_book(
            &bootstrap.viewer_config(),
            book.peek().manifest(),
            open_local_storage(),
        );
        controller.load_notes();
        controller
    });
    let mut viewer = use_signal(ViewerState::default);
    let mut book_size = use_signal(|| book_dimensions(logical_window_width()));
    let save_error = use_signal(|| None::<String>);
    let saving = use_signal(|| false);
    let mut pointer = use_signal(PointerSupport::default);
    let mut is_mobile = use_signal(|| false);

    // Poll for window size and fullscreen changes
    use_future(move || async move {
        let mut last_size = physical_window_size();
        loop {
            tokio::time::sleep(WINDOW_POLL_INTERVAL).await;

            let mut current_size = physical_window_size();
            if current_size != last_size {
                if is_orientation_flip(last_size, current_size) {
                    // Let the window settle before measuring again
                    tokio::time::sleep(ORIENTATION_SETTLE_DELAY).await;
                    current_size = physical_window_size();
                }
                let size = viewer.write().resize(logical_window_width());
                tracing::debug!("Window resized, book is now {}x{}", size.width, size.height);
                book_size.set(size);
                last_size = current_size;
            }

            let fullscreen = window().fullscreen().is_some();
            if viewer.peek().fullscreen.is_active() != fullscreen {
                viewer.write().fullscreen.set_active(fullscreen);
            }
        }
    });

    // Detect mobile webviews and input devices once
    use_future(move || async move {
        match user_agent().await {
            Ok(agent) => {
                if is_mobile_user_agent(&agent) {
                    tracing::info!("Mobile user agent detected");
                    is_mobile.set(true);
                }
            }
            Err(error) => tracing::debug!("Could not read user agent: {}", error),
        }

        match pointer_support().await {
            Ok(support) => {
                tracing::debug!("Pointer support: {:?}", support);
                pointer.set(support);
            }
            Err(error) => tracing::debug!("Could not read pointer support: {}", error),
        }
    });

    let mut state = use_context_provider(|| AppState {
        notes,
        book,
        viewer,
        book_size,
        save_error,
        saving,
        pointer,
    });

    let container_class = format!(
        "app-container {} {}",
        viewer.read().fullscreen.body_class(),
        pointer.read().container_classes()
    );
    let custom_cursor = pointer.read().shows_custom_cursor();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/folio.css") }

        if is_mobile() {
            document::Meta { name: "viewport", content: MOBILE_VIEWPORT_CONTENT }
        }

        div {
            class: "{container_class}",
            onmousemove: move |evt: MouseEvent| {
                let point = evt.client_coordinates();
                let mut viewer = state.viewer.write();
                viewer.drag.move_to(point.x, point.y);
                let ring_target = viewer.cursor.pointer_moved(point.x, point.y);
                drop(viewer);
                if custom_cursor {
                    trail_cursor_ring(state, ring_target);
                }
            },
            onmouseup: move |_| {
                state.viewer.write().drag.end();
            },

            Home {}
            if custom_cursor {
                CustomCursor {}
            }
        }
    }
}

fn physical_window_size() -> (u32, u32) {
    let size = window().inner_size();
    (size.width, size.height)
}

fn logical_window_width() -> f64 {
    let desktop = window();
    desktop
        .inner_size()
        .to_logical::<f64>(desktop.scale_factor())
        .width
}
