//! Notes lock state.

/// Whether page notes are read-only or editable.
///
/// Never persisted: every launch starts `Locked`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnlockState {
    /// Notes are read-only and the secret prompt is available
    #[default]
    Locked,
    /// Notes are editable and saving is available
    Unlocked,
}

impl UnlockState {
    /// Check if notes are currently editable
    #[must_use]
    pub const fn is_unlocked(self) -> bool {
        matches!(self, Self::Unlocked)
    }
}
