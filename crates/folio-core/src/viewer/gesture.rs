//! Touch swipe detection

/// Horizontal travel needed before a touch counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 20.0;

/// Direction to move through the book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNavigation {
    Previous,
    Next,
}

/// Remembers where the current touch started.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    /// First finger down at `x`
    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finger lifted at `x`.
    ///
    /// Swiping right goes back a page, swiping left goes forward.
    pub fn end(&mut self, x: f64) -> Option<PageNavigation> {
        let start = self.start_x.take()?;
        let diff = x - start;
        if diff.abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }
        if diff > 0.0 {
            Some(PageNavigation::Previous)
        } else {
            Some(PageNavigation::Next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(from: f64, to: f64) -> Option<PageNavigation> {
        let mut tracker = SwipeTracker::default();
        tracker.start(from);
        tracker.end(to)
    }

    #[test]
    fn right_swipe_goes_back() {
        assert_eq!(swipe(100.0, 150.0), Some(PageNavigation::Previous));
    }

    #[test]
    fn left_swipe_goes_forward() {
        assert_eq!(swipe(150.0, 100.0), Some(PageNavigation::Next));
    }

    #[test]
    fn short_moves_are_taps() {
        assert_eq!(swipe(100.0, 120.0), None);
        assert_eq!(swipe(100.0, 80.0), None);
        assert_eq!(swipe(100.0, 100.0), None);
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.end(500.0), None);
        tracker.start(0.0);
        tracker.end(100.0);
        assert_eq!(tracker.end(-100.0), None);
    }
}
