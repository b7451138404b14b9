//! Static text drawn on the display.
//!
//! Titles and subtitles are drawn at the matching [`crate::layout`] position;
//! unit strings follow their right-justified values.

// =============================================================================
// Group Titles
// =============================================================================

pub const WEATHER_TITLE: &str = "Weather";
pub const SENSOR3_TITLE: &str = "Sensor 3";
pub const SENSOR5_TITLE: &str = "Sensor 5";
pub const FISH_TITLE: &str = "Large Pond";
pub const SMALL_POND_TITLE: &str = "Small Pond";
pub const WORKSHOP_TITLE: &str = "Workshop";
pub const GARAGE_DOOR_TITLE: &str = "Garage Door";
pub const BATTERIES_TITLE: &str = "Batteries";
pub const TIME_AND_DATE_TITLE: &str = "Time and Date";

/// Shown next to the workshop temperature when its sensor battery is low.
pub const WORKSHOP_LOW_BATTERY: &str = "LoBat";

// =============================================================================
// Battery Subtitles
// =============================================================================

pub const OUTDOOR_SUBTITLE: &str = "Outdoor:";
pub const SENSOR3_SUBTITLE: &str = "Sensor 3:";
pub const SENSOR5_SUBTITLE: &str = "Sensor 5:";
pub const FISH_SUBTITLE: &str = "Large Pond:";
pub const SMALL_POND_SUBTITLE: &str = "Small Pond:";

// =============================================================================
// Units
// =============================================================================

/// Degrees Fahrenheit. The degree sign is a single glyph on the display font.
pub const DEGREES_F: &str = "\u{b0}F";
pub const LUX: &str = "LUX";
pub const RELATIVE_HUMIDITY: &str = "%RH";
pub const INCHES_HG: &str = "inHg";
pub const VOLTS: &str = "V";

// =============================================================================
// Garage Door States
// =============================================================================

pub const DOOR_OPEN: &str = "Open";
pub const DOOR_CLOSED: &str = "Closed";

// =============================================================================
// Calendar
// =============================================================================

/// Three-letter month names, January first.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Number of glyphs a label occupies on screen.
///
/// Counts characters rather than bytes so multi-byte glyphs such as the
/// degree sign take one cell.
pub fn glyph_count(label: &str) -> usize { label.chars().count() }

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_count() {
        assert_eq!(glyph_count(DEGREES_F), 2);
        assert_eq!(glyph_count(INCHES_HG), 4);
        assert_eq!(glyph_count(""), 0);
    }

    #[test]
    fn test_month_abbreviations() {
        assert_eq!(MONTH_ABBREVIATIONS[0], "Jan");
        assert_eq!(MONTH_ABBREVIATIONS[5], "Jun");
        assert_eq!(MONTH_ABBREVIATIONS[11], "Dec");
        assert!(MONTH_ABBREVIATIONS.iter().all(|m| m.len() == 3));
    }
}
