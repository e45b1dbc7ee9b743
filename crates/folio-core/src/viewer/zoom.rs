//! Book zoom level

/// Zoom level in tenths, so repeated steps never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zoom {
    tenths: u8,
}

impl Zoom {
    pub const MIN_TENTHS: u8 = 7;
    pub const MAX_TENTHS: u8 = 15;
    const DEFAULT_TENTHS: u8 = 10;

    /// Step in by 0.1 up to 1.5; returns whether the level changed
    pub fn zoom_in(&mut self) -> bool {
        if self.tenths < Self::MAX_TENTHS {
            self.tenths += 1;
            true
        } else {
            false
        }
    }

    /// Step out by 0.1 down to 0.7; returns whether the level changed
    pub fn zoom_out(&mut self) -> bool {
        if self.tenths > Self::MIN_TENTHS {
            self.tenths -= 1;
            true
        } else {
            false
        }
    }

    /// Back to 1.0
    pub fn reset(&mut self) {
        self.tenths = Self::DEFAULT_TENTHS;
    }

    /// Scale factor
    #[must_use]
    pub fn factor(self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    /// Whether the book is larger than its natural size (dragging allowed)
    #[must_use]
    pub const fn is_magnified(self) -> bool {
        self.tenths > Self::DEFAULT_TENTHS
    }

    /// Whether another zoom-in step is possible
    #[must_use]
    pub const fn can_zoom_in(self) -> bool {
        self.tenths < Self::MAX_TENTHS
    }

    /// Whether another zoom-out step is possible
    #[must_use]
    pub const fn can_zoom_out(self) -> bool {
        self.tenths > Self::MIN_TENTHS
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self {
            tenths: Self::DEFAULT_TENTHS,
        }
    }
}
