//! Secret-entry prompt state.

use super::PinEntry;
use crate::auth::AuthError;
use crate::config::SecretKind;

/// Input widget state for the configured secret kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretEntry {
    Pin(PinEntry),
    Password(String),
}

impl SecretEntry {
    /// Empty entry matching `kind`
    #[must_use]
    pub fn for_kind(kind: SecretKind) -> Self {
        match kind {
            SecretKind::Pin { length } => Self::Pin(PinEntry::new(length)),
            SecretKind::Password => Self::Password(String::new()),
        }
    }

    /// Text entered so far
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Pin(entry) => entry.value(),
            Self::Password(text) => text.clone(),
        }
    }

    fn clear(&mut self) {
        match self {
            Self::Pin(entry) => entry.clear(),
            Self::Password(text) => text.clear(),
        }
    }
}

/// The modal asking for the secret.
///
/// `focus_generation` increases whenever the first input should take focus
/// again, so the view can react even when the focused slot did not change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockPrompt {
    visible: bool,
    entry: SecretEntry,
    error: Option<AuthError>,
    focus_generation: u64,
}

impl UnlockPrompt {
    /// Hidden, empty prompt for `kind`
    #[must_use]
    pub fn new(kind: SecretKind) -> Self {
        Self {
            visible: false,
            entry: SecretEntry::for_kind(kind),
            error: None,
            focus_generation: 0,
        }
    }

    /// Whether the modal is shown
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current input widget state
    #[must_use]
    pub const fn entry(&self) -> &SecretEntry {
        &self.entry
    }

    /// Mutable input widget state, for routing keystrokes
    pub fn entry_mut(&mut self) -> &mut SecretEntry {
        &mut self.entry
    }

    /// Inline error from the last failed attempt
    #[must_use]
    pub const fn error(&self) -> Option<AuthError> {
        self.error
    }

    /// Error text to show under the input, empty when there is none
    #[must_use]
    pub fn error_message(&self) -> String {
        self.error.map(|error| error.to_string()).unwrap_or_default()
    }

    #[must_use]
    pub const fn focus_generation(&self) -> u64 {
        self.focus_generation
    }

    pub(super) fn open(&mut self) {
        self.entry.clear();
        self.error = None;
        self.visible = true;
        self.request_focus();
    }

    pub(super) fn close(&mut self) {
        self.visible = false;
    }

    pub(super) fn fail(&mut self, error: AuthError) {
        self.error = Some(error);
        // Length errors keep the partial PIN so the user can finish it.
        if !matches!(error, AuthError::WrongLength { .. }) {
            self.entry.clear();
        }
        self.request_focus();
    }

    fn request_focus(&mut self) {
        self.focus_generation = self.focus_generation.wrapping_add(1);
    }
}
