//! One-digit-per-box PIN entry.

use crate::util::digits_only;

/// PIN input split into single-digit slots with a moving focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinEntry {
    slots: Vec<Option<char>>,
    focused: Option<usize>,
}

impl PinEntry {
    /// Create an empty entry with `length` slots, focused on the first
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            slots: vec![None; length],
            focused: (length > 0).then_some(0),
        }
    }

    /// Number of slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if there are no slots at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Digit currently held by a slot
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    /// Slot that should hold keyboard focus, `None` once the last digit is typed
    #[must_use]
    pub const fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Handle raw text typed into slot `index`.
    ///
    /// Non-digits are dropped. The last digit typed wins and focus moves to
    /// the next slot, or leaves the entry after the final slot.
    pub fn input(&mut self, index: usize, raw: &str) {
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };

        match digits_only(raw).chars().last() {
            Some(digit) => {
                *slot = Some(digit);
                self.focused = (index + 1 < self.slots.len()).then_some(index + 1);
            }
            None => *slot = None,
        }
    }

    /// Handle backspace in slot `index`: clear it and step focus back
    pub fn backspace(&mut self, index: usize) {
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };
        *slot = None;
        self.focused = Some(index.saturating_sub(1));
    }

    /// Move focus to slot `index` (clicked or tabbed into)
    pub fn focus(&mut self, index: usize) {
        if index < self.slots.len() {
            self.focused = Some(index);
        }
    }

    /// Concatenated digits entered so far
    #[must_use]
    pub fn value(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    /// Empty every slot and focus the first
    pub fn clear(&mut self) {
        self.slots.fill(None);
        self.focused = (!self.slots.is_empty()).then_some(0);
    }
}
