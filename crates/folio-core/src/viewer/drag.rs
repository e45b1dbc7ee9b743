//! Panning a magnified book with the mouse

use super::Zoom;

/// Pan offset in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// Mouse-drag panning state.
///
/// Dragging only starts while the book is magnified. Each move adds the
/// pointer delta since the previous event to the pan offset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    last_pointer: Option<(f64, f64)>,
    offset: Offset,
}

impl DragState {
    /// Start dragging at the pointer position; returns whether dragging began
    pub fn begin(&mut self, x: f64, y: f64, zoom: Zoom) -> bool {
        if !zoom.is_magnified() {
            return false;
        }
        self.last_pointer = Some((x, y));
        true
    }

    /// Follow the pointer; returns whether the offset changed
    pub fn move_to(&mut self, x: f64, y: f64) -> bool {
        let Some((last_x, last_y)) = self.last_pointer else {
            return false;
        };
        self.offset.x += x - last_x;
        self.offset.y += y - last_y;
        self.last_pointer = Some((x, y));
        true
    }

    /// Release the pointer
    pub fn end(&mut self) {
        self.last_pointer = None;
    }

    /// Drop any pan and in-progress drag
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.last_pointer.is_some()
    }

    #[must_use]
    pub const fn offset(&self) -> Offset {
        self.offset
    }

    /// Cursor shown over the book
    #[must_use]
    pub const fn cursor(&self, zoom: Zoom) -> &'static str {
        if self.is_dragging() {
            "grabbing"
        } else if zoom.is_magnified() {
            "grab"
        } else {
            "default"
        }
    }

    /// CSS transform combining pan and zoom
    #[must_use]
    pub fn transform(&self, zoom: Zoom) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.offset.x,
            self.offset.y,
            zoom.factor()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn magnified() -> Zoom {
        let mut zoom = Zoom::default();
        zoom.zoom_in();
        zoom
    }

    #[test]
    fn drag_requires_magnification() {
        let mut drag = DragState::default();
        assert!(!drag.begin(10.0, 10.0, Zoom::default()));
        assert!(!drag.move_to(50.0, 50.0));
        assert_eq!(drag.offset(), Offset::default());
    }

    #[test]
    fn moves_accumulate_deltas() {
        let mut drag = DragState::default();
        let zoom = magnified();
        assert!(drag.begin(100.0, 100.0, zoom));
        assert_eq!(drag.cursor(zoom), "grabbing");

        drag.move_to(110.0, 95.0);
        drag.move_to(130.0, 90.0);
        drag.end();

        assert_eq!(drag.offset(), Offset { x: 30.0, y: -10.0 });
        assert_eq!(drag.cursor(zoom), "grab");
        assert_eq!(drag.transform(zoom), "translate(30px, -10px) scale(1.1)");
    }

    #[test]
    fn moves_after_release_are_ignored() {
        let mut drag = DragState::default();
        drag.begin(0.0, 0.0, magnified());
        drag.end();
        assert!(!drag.move_to(40.0, 40.0));
        assert!(!drag.is_dragging());
    }
}
