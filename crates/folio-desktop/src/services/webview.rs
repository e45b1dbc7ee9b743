//! Reading state back out of the webview DOM.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use folio_core::viewer::PointerSupport;
use folio_core::PageId;
use thiserror::Error;

/// Collects the rendered HTML of every note region, keyed by page id.
const CAPTURE_NOTES_JS: &str = r"
const notes = {};
document.querySelectorAll('.note-content').forEach((note) => {
    notes[note.dataset.page] = note.innerHTML;
});
return notes;
";

const USER_AGENT_JS: &str = "return navigator.userAgent;";

const POINTER_SUPPORT_JS: &str = r"
return {
    finePointer: window.matchMedia('(pointer: fine)').matches,
    touch: 'ontouchstart' in window,
};
";

/// Errors reading from the webview
#[derive(Debug, Error)]
pub enum WebviewError {
    #[error("Webview script failed: {0}")]
    Eval(String),
    #[error("Unexpected webview result: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Read the current content of every rendered note region
pub async fn capture_note_regions() -> Result<Vec<(PageId, String)>, WebviewError> {
    let value = document::eval(CAPTURE_NOTES_JS)
        .join::<serde_json::Value>()
        .await
        .map_err(|error| WebviewError::Eval(error.to_string()))?;
    parse_captured_notes(value)
}

/// The webview's user agent string
pub async fn user_agent() -> Result<String, WebviewError> {
    document::eval(USER_AGENT_JS)
        .join::<String>()
        .await
        .map_err(|error| WebviewError::Eval(error.to_string()))
}

/// Which pointer inputs the webview offers
pub async fn pointer_support() -> Result<PointerSupport, WebviewError> {
    let value = document::eval(POINTER_SUPPORT_JS)
        .join::<serde_json::Value>()
        .await
        .map_err(|error| WebviewError::Eval(error.to_string()))?;
    Ok(serde_json::from_value(value)?)
}

fn parse_captured_notes(value: serde_json::Value) -> Result<Vec<(PageId, String)>, WebviewError> {
    let notes: BTreeMap<String, String> = serde_json::from_value(value)?;
    Ok(notes
        .into_iter()
        .map(|(page, content)| (PageId::from(page), content))
        .collect())
}
