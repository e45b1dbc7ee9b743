//! Custom cursor with a trailing ring

use std::time::Duration;

use serde::Deserialize;

/// How far the outer ring lags behind the dot.
pub const RING_TRAIL_DELAY: Duration = Duration::from_millis(50);

/// Container class added when the webview supports touch input
pub const TOUCH_DEVICE_CLASS: &str = "touch-device";
/// Container class that hides the system cursor behind the custom one
pub const FINE_POINTER_CLASS: &str = "fine-pointer";

/// Input capabilities reported by the webview.
///
/// The default assumes neither until the webview has been asked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerSupport {
    /// A precise pointer such as a mouse is present
    pub fine_pointer: bool,
    /// Touch events are available
    pub touch: bool,
}

impl PointerSupport {
    /// The trailing cursor is only drawn for precise pointers
    #[must_use]
    pub const fn shows_custom_cursor(self) -> bool {
        self.fine_pointer
    }

    /// Classes for the app container, space separated
    #[must_use]
    pub fn container_classes(self) -> String {
        let mut classes = Vec::new();
        if self.fine_pointer {
            classes.push(FINE_POINTER_CLASS);
        }
        if self.touch {
            classes.push(TOUCH_DEVICE_CLASS);
        }
        classes.join(" ")
    }
}

/// Positions of the cursor dot and its trailing ring.
///
/// The dot moves on every pointer event; the ring is moved by the view
/// after `RING_TRAIL_DELAY`, which produces the trailing effect.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorTrail {
    dot: (f64, f64),
    ring: (f64, f64),
}

impl CursorTrail {
    /// Pointer moved; returns the ring target to apply after the delay
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> (f64, f64) {
        self.dot = (x, y);
        (x, y)
    }

    /// Apply a delayed ring position
    pub fn ring_arrived(&mut self, position: (f64, f64)) {
        self.ring = position;
    }

    #[must_use]
    pub const fn dot(self) -> (f64, f64) {
        self.dot
    }

    #[must_use]
    pub const fn ring(self) -> (f64, f64) {
        self.ring
    }
}
