//! Fullscreen toggle

/// Class added to the page body while fullscreen
pub const FULLSCREEN_BODY_CLASS: &str = "fullscreen-enabled";

/// What the host window should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenRequest {
    Enter,
    Exit,
}

/// Tracks whether the window is fullscreen as reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FullscreenState {
    active: bool,
}

impl FullscreenState {
    /// Request the opposite of the current state
    #[must_use]
    pub const fn toggle(self) -> FullscreenRequest {
        if self.active {
            FullscreenRequest::Exit
        } else {
            FullscreenRequest::Enter
        }
    }

    /// Record the host's fullscreen change notification
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        self.active
    }

    /// Button icon: enter while windowed, exit while fullscreen
    #[must_use]
    pub const fn icon(self) -> &'static str {
        if self.active {
            "⤓"
        } else {
            "⛶"
        }
    }

    /// Body class for the current state
    #[must_use]
    pub const fn body_class(self) -> &'static str {
        if self.active {
            FULLSCREEN_BODY_CLASS
        } else {
            ""
        }
    }
}
