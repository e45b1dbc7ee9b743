//! The book: pages, navigation, panning, and swipe gestures

use dioxus::prelude::*;
use folio_core::config::PageSpec;
use folio_core::viewer::PageNavigation;

use super::note_actions::turn_page;
use super::note_region::NoteRegionView;
use crate::state::AppState;

/// Book view.
///
/// Every page stays mounted and only the visible one is shown, so all note
/// regions can be read back when notes are saved.
#[component]
pub fn Flipbook() -> Element {
    let mut state = use_context::<AppState>();

    let (pages, current, is_first, is_last) = {
        let book = state.book.read();
        (
            book.pages().to_vec(),
            book.current_index(),
            book.is_first(),
            book.is_last(),
        )
    };
    let indicator = format!("{} / {}", current + 1, pages.len());
    let book_style = state.book_style();

    let on_mouse_down = move |evt: MouseEvent| {
        let point = evt.client_coordinates();
        let mut viewer = state.viewer.write();
        let zoom = viewer.zoom;
        viewer.drag.begin(point.x, point.y, zoom);
    };

    let on_touch_start = move |evt: TouchEvent| {
        if let Some(x) = evt.touches().first().map(|touch| touch.client_coordinates().x) {
            state.viewer.write().swipe.start(x);
        }
    };

    let on_touch_end = move |evt: TouchEvent| {
        let Some(x) = evt
            .touches_changed()
            .first()
            .map(|touch| touch.client_coordinates().x)
        else {
            return;
        };
        let navigation = state.viewer.write().swipe.end(x);
        if let Some(navigation) = navigation {
            turn_page(state, navigation);
        }
    };

    rsx! {
        div {
            class: "flipbook-viewport",

            button {
                class: "page-nav page-nav-prev",
                title: "Previous page",
                disabled: is_first,
                onclick: move |_| turn_page(state, PageNavigation::Previous),
                "‹"
            }

            div {
                class: "flipbook",
                style: "{book_style}",
                onmousedown: on_mouse_down,
                ontouchstart: on_touch_start,
                ontouchend: on_touch_end,

                for (index, page) in pages.into_iter().enumerate() {
                    PageView {
                        key: "{page.id}",
                        page,
                        number: index + 1,
                        visible: index == current,
                    }
                }
            }

            button {
                class: "page-nav page-nav-next",
                title: "Next page",
                disabled: is_last,
                onclick: move |_| turn_page(state, PageNavigation::Next),
                "›"
            }
        }

        div { class: "page-indicator", "{indicator}" }
    }
}

/// A single page with its note area
#[component]
fn PageView(page: PageSpec, number: usize, visible: bool) -> Element {
    let class = if visible { "page visible" } else { "page" };

    rsx! {
        section {
            class: "{class}",
            "data-page-number": "{number}",
            h2 { class: "page-title", "{page.title}" }
            p { class: "page-body", "{page.body}" }
            NoteRegionView { page: page.id.clone() }
        }
    }
}
