//! Editable note area on a page

use dioxus::prelude::*;
use folio_core::PageId;

use crate::state::AppState;

/// Note area for one page.
///
/// Content is rich text. While notes are unlocked the area is
/// `contenteditable` and the saved HTML is read back from the page on save.
#[component]
pub fn NoteRegionView(page: PageId) -> Element {
    let state = use_context::<AppState>();
    let Some(region) = state.notes.read().region(&page).cloned() else {
        return rsx! {};
    };

    let class = if region.editable {
        "note-content editable"
    } else {
        "note-content"
    };
    let editable = if region.editable { "true" } else { "false" };

    rsx! {
        div {
            class: "note-region",
            h3 { class: "note-heading", "Notes" }
            div {
                class: "{class}",
                "data-page": "{region.page}",
                contenteditable: "{editable}",
                dangerous_inner_html: "{region.content}",
            }
        }
    }
}
