//! Responsive book sizing

use std::time::Duration;

/// Wait after an orientation change before measuring the window again.
pub const ORIENTATION_SETTLE_DELAY: Duration = Duration::from_millis(200);

/// Book size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookSize {
    pub width: u32,
    pub height: u32,
}

/// Breakpoints as (minimum exclusive window width, book size), widest first.
const BREAKPOINTS: [(f64, BookSize); 4] = [
    (1200.0, BookSize { width: 1000, height: 600 }),
    (900.0, BookSize { width: 800, height: 480 }),
    (650.0, BookSize { width: 600, height: 360 }),
    (450.0, BookSize { width: 400, height: 300 }),
];

const SMALLEST: BookSize = BookSize {
    width: 300,
    height: 225,
};

/// Whether a window resize swapped between landscape and portrait.
///
/// Sizes are `(width, height)` in any consistent unit.
#[must_use]
pub const fn is_orientation_flip(previous: (u32, u32), current: (u32, u32)) -> bool {
    (previous.0 > previous.1) != (current.0 > current.1)
}

/// Book size for a window `window_width` CSS pixels wide
#[must_use]
pub fn book_dimensions(window_width: f64) -> BookSize {
    BREAKPOINTS
        .iter()
        .find(|(min_width, _)| window_width > *min_width)
        .map_or(SMALLEST, |(_, size)| *size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_flip_needs_aspect_change() {
        assert!(is_orientation_flip((1024, 768), (768, 1024)));
        assert!(!is_orientation_flip((1024, 768), (1280, 800)));
        assert!(!is_orientation_flip((400, 800), (420, 900)));
    }

    #[test]
    fn breakpoints_are_exclusive_lower_bounds() {
        let cases = [
            (1920.0, (1000, 600)),
            (1201.0, (1000, 600)),
            (1200.0, (800, 480)),
            (901.0, (800, 480)),
            (900.0, (600, 360)),
            (651.0, (600, 360)),
            (650.0, (400, 300)),
            (451.0, (400, 300)),
            (450.0, (300, 225)),
            (320.0, (300, 225)),
            (0.0, (300, 225)),
        ];
        for (width, (w, h)) in cases {
            assert_eq!(
                book_dimensions(width),
                BookSize {
                    width: w,
                    height: h
                },
                "window width {width}"
            );
        }
    }
}
