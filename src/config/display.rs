//! Display geometry and text metrics.
//!
//! The panel is a 320x240 TFT mounted in portrait orientation, so the
//! drawable area is 240 pixels wide and 320 pixels tall. All text is drawn
//! in a fixed-width font scaled to 12x16 pixel cells, which lets every layout
//! position be derived from character counts at compile time.

use embedded_graphics::geometry::{Point, Size};

// =============================================================================
// Panel Configuration
// =============================================================================

/// Native panel width in pixels (landscape).
pub const PANEL_WIDTH: u32 = 320;

/// Native panel height in pixels (landscape).
pub const PANEL_HEIGHT: u32 = 240;

/// Drawable width in portrait orientation.
pub const DISPLAY_WIDTH: i32 = PANEL_HEIGHT as i32;

/// Drawable height in portrait orientation.
pub const DISPLAY_HEIGHT: i32 = PANEL_WIDTH as i32;

/// Last pixel column. Right-justified text ends just before this column + 1.
pub const RIGHT_EDGE: i32 = DISPLAY_WIDTH - 1;

// =============================================================================
// Font Metrics
// =============================================================================

/// Character cell width in pixels.
pub const FONT_WIDTH: i32 = 12;

/// Character cell height in pixels (one text row).
pub const FONT_HEIGHT: i32 = 16;

/// Character cell size for renderers working with `embedded-graphics` sizes.
pub const FONT_SIZE: Size = Size::new(FONT_WIDTH as u32, FONT_HEIGHT as u32);

/// Number of full text rows that fit on the display.
pub const TEXT_ROWS: i32 = DISPLAY_HEIGHT / FONT_HEIGHT;

const _: () = assert!(DISPLAY_WIDTH % FONT_WIDTH == 0);
const _: () = assert!(DISPLAY_HEIGHT % FONT_HEIGHT == 0);

// =============================================================================
// Alignment Helpers
// =============================================================================

/// X column at which a string of `chars` characters must start so that it ends
/// at column `edge`.
#[inline]
pub const fn right_align(
    edge: i32,
    chars: i32,
) -> i32 {
    edge - chars * FONT_WIDTH
}

/// X column that centers a string of `chars` characters on the display.
#[inline]
pub const fn center(chars: i32) -> i32 { (RIGHT_EDGE - chars * FONT_WIDTH) / 2 }

/// Check that a string of `chars` characters drawn at `origin` stays on screen.
pub const fn fits(
    origin: Point,
    chars: i32,
) -> bool {
    origin.x >= 0
        && origin.y >= 0
        && origin.x + chars * FONT_WIDTH <= DISPLAY_WIDTH
        && origin.y + FONT_HEIGHT <= DISPLAY_HEIGHT
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portrait_dimensions() {
        assert_eq!(DISPLAY_WIDTH, 240);
        assert_eq!(DISPLAY_HEIGHT, 320);
        assert_eq!(TEXT_ROWS, 20);
        assert_eq!(FONT_SIZE, Size::new(12, 16));
    }

    #[test]
    fn test_right_align() {
        // "100.1 " ends at the degrees column
        assert_eq!(right_align(191, 6), 119);
        // "Closed" ends at the right edge
        assert_eq!(right_align(RIGHT_EDGE, 6), 167);
    }

    #[test]
    fn test_center() {
        // 19-character time line leaves 11 spare pixels, 5 on the left
        assert_eq!(center(19), 5);
    }

    #[test]
    fn test_fits() {
        assert!(fits(Point::new(0, 0), 20));
        assert!(!fits(Point::new(1, 0), 20));
        assert!(fits(Point::new(0, 304), 1));
        assert!(!fits(Point::new(0, 305), 1));
        assert!(!fits(Point::new(-1, 0), 1));
    }
}
