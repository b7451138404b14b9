//! Application configuration.
//!
//! - `display`: Display dimensions, font metrics and text alignment helpers
//! - `region`: Time zone offsets and DST effective hour for the installation site

pub mod display;
pub mod region;

// Re-export display constants at config level for convenience
pub use display::{
    DISPLAY_HEIGHT,
    DISPLAY_WIDTH,
    FONT_HEIGHT,
    FONT_SIZE,
    FONT_WIDTH,
    RIGHT_EDGE,
    center,
    fits,
    right_align,
};
// Re-export region configuration at config level for convenience
pub use region::{ILLINOIS, Region, ZoneOffset};
