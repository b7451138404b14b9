//! Screen layout for the weather station display.
//!
//! Every element on the screen has a fixed top-left pixel position in
//! [`PORTRAIT_LAYOUT`]. The renderer looks positions up either by field or by
//! [`ElementId`] through [`Layout::position`].
//!
//! # Alignment
//!
//! Numeric values are right-justified to an alignment column per group, and
//! every unit string ends on the last pixel column:
//!
//! - Weather group: values end at x = 191, where the widest unit ("inHg") starts
//! - Sensor and pond groups: values end at x = 215
//! - Battery group: values end at x = 227
//!
//! The positions are written out as literals and checked against these rules
//! at compile time, so editing one without the other fails the build.

use embedded_graphics::prelude::Point;

use crate::config::display::{RIGHT_EDGE, center, fits, right_align};

/// Pixel position of the top-left corner of a text element.
pub type Coord = Point;

// =============================================================================
// Text Widths (characters, including the trailing separator space)
// =============================================================================

/// Temperature value, e.g. "100.1 ".
pub const TEMP_VALUE_CHARS: i32 = 6;

/// Illuminance value, e.g. "99999999 ".
pub const LUX_VALUE_CHARS: i32 = 9;

/// Relative humidity value, e.g. "58.2 ".
pub const RH_VALUE_CHARS: i32 = 5;

/// Barometric pressure value, e.g. "29.32 ".
pub const PRESSURE_VALUE_CHARS: i32 = 6;

/// Battery voltage value, e.g. "3.123 ".
pub const VOLTAGE_VALUE_CHARS: i32 = 6;

/// Garage door state, "Closed" (no units follow).
pub const DOOR_VALUE_CHARS: i32 = 6;

/// Time and date line, e.g. "14-Jun 09:41 AM CDT".
pub const TIME_AND_DATE_CHARS: i32 = 19;

// =============================================================================
// Alignment Columns
// =============================================================================

/// Value alignment column of the weather group.
pub const WEATHER_ALIGN_X: i32 = 191;

/// Value alignment column of the single-temperature groups (sensors, ponds, workshop).
pub const SENSOR_ALIGN_X: i32 = 215;

/// Value alignment column of the battery group.
pub const BATTERY_ALIGN_X: i32 = 227;

// =============================================================================
// Layout Table
// =============================================================================

/// Positions of all screen elements.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Layout {
    pub weather_title: Coord,
    pub weather_temp_value: Coord,
    pub weather_temp_units: Coord,
    pub weather_lux_value: Coord,
    pub weather_lux_units: Coord,
    pub weather_rh_value: Coord,
    pub weather_rh_units: Coord,
    pub weather_pressure_value: Coord,
    pub weather_pressure_units: Coord,
    pub sensor3_title: Coord,
    pub sensor3_temp_value: Coord,
    pub sensor3_temp_units: Coord,
    pub sensor5_title: Coord,
    pub sensor5_temp_value: Coord,
    pub sensor5_temp_units: Coord,
    pub fish_title: Coord,
    pub fish_temp_value: Coord,
    pub fish_temp_units: Coord,
    pub small_pond_title: Coord,
    pub small_pond_temp_value: Coord,
    pub small_pond_temp_units: Coord,
    pub workshop_title: Coord,
    pub workshop_low_battery: Coord,
    pub workshop_temp_value: Coord,
    pub workshop_temp_units: Coord,
    pub garage_door_title: Coord,
    pub garage_door_value: Coord,
    pub batteries_title: Coord,
    pub batt_outdoor_subtitle: Coord,
    pub batt_outdoor_value: Coord,
    pub batt_outdoor_units: Coord,
    pub batt_sensor3_subtitle: Coord,
    pub batt_sensor3_value: Coord,
    pub batt_sensor3_units: Coord,
    pub batt_sensor5_subtitle: Coord,
    pub batt_sensor5_value: Coord,
    pub batt_sensor5_units: Coord,
    /// Not drawn on the current screen; kept so a header can be re-enabled.
    pub time_and_date_title: Coord,
    pub time_and_date_value: Coord,
}

/// Portrait layout, 240x320, 12x16 font.
pub const PORTRAIT_LAYOUT: Layout = Layout {
    weather_title: Point::new(0, 0),
    weather_temp_value: Point::new(119, 16),
    weather_temp_units: Point::new(215, 16),
    weather_lux_value: Point::new(83, 32),
    weather_lux_units: Point::new(203, 32),
    weather_rh_value: Point::new(131, 48),
    weather_rh_units: Point::new(203, 48),
    weather_pressure_value: Point::new(119, 64),
    weather_pressure_units: Point::new(191, 64),
    sensor3_title: Point::new(0, 88),
    sensor3_temp_value: Point::new(143, 88),
    sensor3_temp_units: Point::new(215, 88),
    sensor5_title: Point::new(0, 112),
    sensor5_temp_value: Point::new(143, 112),
    sensor5_temp_units: Point::new(215, 112),
    fish_title: Point::new(0, 136),
    fish_temp_value: Point::new(143, 136),
    fish_temp_units: Point::new(215, 136),
    small_pond_title: Point::new(0, 160),
    small_pond_temp_value: Point::new(143, 160),
    small_pond_temp_units: Point::new(215, 160),
    workshop_title: Point::new(0, 184),
    workshop_low_battery: Point::new(96, 184),
    workshop_temp_value: Point::new(143, 184),
    workshop_temp_units: Point::new(215, 184),
    garage_door_title: Point::new(0, 208),
    garage_door_value: Point::new(167, 208),
    batteries_title: Point::new(0, 232),
    batt_outdoor_subtitle: Point::new(24, 248),
    batt_outdoor_value: Point::new(155, 248),
    batt_outdoor_units: Point::new(227, 248),
    batt_sensor3_subtitle: Point::new(24, 264),
    batt_sensor3_value: Point::new(155, 264),
    batt_sensor3_units: Point::new(227, 264),
    batt_sensor5_subtitle: Point::new(24, 280),
    batt_sensor5_value: Point::new(155, 280),
    batt_sensor5_units: Point::new(227, 280),
    time_and_date_title: Point::new(0, 0),
    time_and_date_value: Point::new(5, 304),
};

// Compile-time validation: values end at their alignment column
const _: () = assert!(PORTRAIT_LAYOUT.weather_temp_value.x == right_align(WEATHER_ALIGN_X, TEMP_VALUE_CHARS));
const _: () = assert!(PORTRAIT_LAYOUT.weather_lux_value.x == right_align(WEATHER_ALIGN_X, LUX_VALUE_CHARS));
const _: () = assert!(PORTRAIT_LAYOUT.weather_rh_value.x == right_align(WEATHER_ALIGN_X, RH_VALUE_CHARS));
const _: () = assert!(PORTRAIT_LAYOUT.weather_pressure_value.x == right_align(WEATHER_ALIGN_X, PRESSURE_VALUE_CHARS));
const _: () = assert!(PORTRAIT_LAYOUT.sensor3_temp_value.x == right_align(SENSOR_ALIGN_X, TEMP_VALUE_CHARS));
const _: () = assert!(PORTRAIT_LAYOUT.fish_temp_value.x == right_align(SENSOR_ALIGN_X, TEMP_VALUE_CHARS));
const _: () = assert!(PORTRAIT_LAYOUT.batt_outdoor_value.x == right_align(BATTERY_ALIGN_X, VOLTAGE_VALUE_CHARS));
const _: () = assert!(PORTRAIT_LAYOUT.garage_door_value.x == right_align(RIGHT_EDGE, DOOR_VALUE_CHARS));
const _: () = assert!(PORTRAIT_LAYOUT.time_and_date_value.x == center(TIME_AND_DATE_CHARS));
// Compile-time validation: nothing is clipped
const _: () = assert!(PORTRAIT_LAYOUT.all_fit());

// =============================================================================
// Element Identifiers
// =============================================================================

/// Named screen element, for keyed lookup into a [`Layout`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ElementId {
    WeatherTitle,
    WeatherTempValue,
    WeatherTempUnits,
    WeatherLuxValue,
    WeatherLuxUnits,
    WeatherRhValue,
    WeatherRhUnits,
    WeatherPressureValue,
    WeatherPressureUnits,
    Sensor3Title,
    Sensor3TempValue,
    Sensor3TempUnits,
    Sensor5Title,
    Sensor5TempValue,
    Sensor5TempUnits,
    FishTitle,
    FishTempValue,
    FishTempUnits,
    SmallPondTitle,
    SmallPondTempValue,
    SmallPondTempUnits,
    WorkshopTitle,
    WorkshopLowBattery,
    WorkshopTempValue,
    WorkshopTempUnits,
    GarageDoorTitle,
    GarageDoorValue,
    BatteriesTitle,
    BattOutdoorSubtitle,
    BattOutdoorValue,
    BattOutdoorUnits,
    BattSensor3Subtitle,
    BattSensor3Value,
    BattSensor3Units,
    BattSensor5Subtitle,
    BattSensor5Value,
    BattSensor5Units,
    TimeAndDateTitle,
    TimeAndDateValue,
}

impl ElementId {
    /// Every element, in top-to-bottom drawing order.
    pub const ALL: [Self; 39] = [
        Self::WeatherTitle,
        Self::WeatherTempValue,
        Self::WeatherTempUnits,
        Self::WeatherLuxValue,
        Self::WeatherLuxUnits,
        Self::WeatherRhValue,
        Self::WeatherRhUnits,
        Self::WeatherPressureValue,
        Self::WeatherPressureUnits,
        Self::Sensor3Title,
        Self::Sensor3TempValue,
        Self::Sensor3TempUnits,
        Self::Sensor5Title,
        Self::Sensor5TempValue,
        Self::Sensor5TempUnits,
        Self::FishTitle,
        Self::FishTempValue,
        Self::FishTempUnits,
        Self::SmallPondTitle,
        Self::SmallPondTempValue,
        Self::SmallPondTempUnits,
        Self::WorkshopTitle,
        Self::WorkshopLowBattery,
        Self::WorkshopTempValue,
        Self::WorkshopTempUnits,
        Self::GarageDoorTitle,
        Self::GarageDoorValue,
        Self::BatteriesTitle,
        Self::BattOutdoorSubtitle,
        Self::BattOutdoorValue,
        Self::BattOutdoorUnits,
        Self::BattSensor3Subtitle,
        Self::BattSensor3Value,
        Self::BattSensor3Units,
        Self::BattSensor5Subtitle,
        Self::BattSensor5Value,
        Self::BattSensor5Units,
        Self::TimeAndDateTitle,
        Self::TimeAndDateValue,
    ];

    /// Fixed text drawn at this element, or `None` for live values.
    pub const fn static_text(self) -> Option<&'static str> {
        use crate::labels::*;

        let text = match self {
            Self::WeatherTitle => WEATHER_TITLE,
            Self::WeatherTempUnits
            | Self::Sensor3TempUnits
            | Self::Sensor5TempUnits
            | Self::FishTempUnits
            | Self::SmallPondTempUnits
            | Self::WorkshopTempUnits => DEGREES_F,
            Self::WeatherLuxUnits => LUX,
            Self::WeatherRhUnits => RELATIVE_HUMIDITY,
            Self::WeatherPressureUnits => INCHES_HG,
            Self::Sensor3Title => SENSOR3_TITLE,
            Self::Sensor5Title => SENSOR5_TITLE,
            Self::FishTitle => FISH_TITLE,
            Self::SmallPondTitle => SMALL_POND_TITLE,
            Self::WorkshopTitle => WORKSHOP_TITLE,
            Self::WorkshopLowBattery => WORKSHOP_LOW_BATTERY,
            Self::GarageDoorTitle => GARAGE_DOOR_TITLE,
            Self::BatteriesTitle => BATTERIES_TITLE,
            Self::BattOutdoorSubtitle => OUTDOOR_SUBTITLE,
            Self::BattSensor3Subtitle => SENSOR3_SUBTITLE,
            Self::BattSensor5Subtitle => SENSOR5_SUBTITLE,
            Self::BattOutdoorUnits | Self::BattSensor3Units | Self::BattSensor5Units => VOLTS,
            Self::TimeAndDateTitle => TIME_AND_DATE_TITLE,
            Self::WeatherTempValue
            | Self::WeatherLuxValue
            | Self::WeatherRhValue
            | Self::WeatherPressureValue
            | Self::Sensor3TempValue
            | Self::Sensor5TempValue
            | Self::FishTempValue
            | Self::SmallPondTempValue
            | Self::WorkshopTempValue
            | Self::GarageDoorValue
            | Self::BattOutdoorValue
            | Self::BattSensor3Value
            | Self::BattSensor5Value
            | Self::TimeAndDateValue => return None,
        };
        Some(text)
    }

    /// Widest text, in characters, ever drawn at this element.
    pub const fn max_chars(self) -> i32 {
        match self {
            Self::WeatherTempValue
            | Self::Sensor3TempValue
            | Self::Sensor5TempValue
            | Self::FishTempValue
            | Self::SmallPondTempValue
            | Self::WorkshopTempValue => TEMP_VALUE_CHARS,
            Self::WeatherLuxValue => LUX_VALUE_CHARS,
            Self::WeatherRhValue => RH_VALUE_CHARS,
            Self::WeatherPressureValue => PRESSURE_VALUE_CHARS,
            Self::GarageDoorValue => DOOR_VALUE_CHARS,
            Self::BattOutdoorValue | Self::BattSensor3Value | Self::BattSensor5Value => VOLTAGE_VALUE_CHARS,
            Self::TimeAndDateValue => TIME_AND_DATE_CHARS,
            // Fixed text is ASCII apart from the degree sign, which is one glyph
            Self::WeatherTempUnits
            | Self::Sensor3TempUnits
            | Self::Sensor5TempUnits
            | Self::FishTempUnits
            | Self::SmallPondTempUnits
            | Self::WorkshopTempUnits => 2,
            _ => match self.static_text() {
                Some(text) => text.len() as i32,
                None => 0,
            },
        }
    }
}

impl Layout {
    /// Position of a named element.
    pub const fn position(
        &self,
        id: ElementId,
    ) -> Coord {
        match id {
            ElementId::WeatherTitle => self.weather_title,
            ElementId::WeatherTempValue => self.weather_temp_value,
            ElementId::WeatherTempUnits => self.weather_temp_units,
            ElementId::WeatherLuxValue => self.weather_lux_value,
            ElementId::WeatherLuxUnits => self.weather_lux_units,
            ElementId::WeatherRhValue => self.weather_rh_value,
            ElementId::WeatherRhUnits => self.weather_rh_units,
            ElementId::WeatherPressureValue => self.weather_pressure_value,
            ElementId::WeatherPressureUnits => self.weather_pressure_units,
            ElementId::Sensor3Title => self.sensor3_title,
            ElementId::Sensor3TempValue => self.sensor3_temp_value,
            ElementId::Sensor3TempUnits => self.sensor3_temp_units,
            ElementId::Sensor5Title => self.sensor5_title,
            ElementId::Sensor5TempValue => self.sensor5_temp_value,
            ElementId::Sensor5TempUnits => self.sensor5_temp_units,
            ElementId::FishTitle => self.fish_title,
            ElementId::FishTempValue => self.fish_temp_value,
            ElementId::FishTempUnits => self.fish_temp_units,
            ElementId::SmallPondTitle => self.small_pond_title,
            ElementId::SmallPondTempValue => self.small_pond_temp_value,
            ElementId::SmallPondTempUnits => self.small_pond_temp_units,
            ElementId::WorkshopTitle => self.workshop_title,
            ElementId::WorkshopLowBattery => self.workshop_low_battery,
            ElementId::WorkshopTempValue => self.workshop_temp_value,
            ElementId::WorkshopTempUnits => self.workshop_temp_units,
            ElementId::GarageDoorTitle => self.garage_door_title,
            ElementId::GarageDoorValue => self.garage_door_value,
            ElementId::BatteriesTitle => self.batteries_title,
            ElementId::BattOutdoorSubtitle => self.batt_outdoor_subtitle,
            ElementId::BattOutdoorValue => self.batt_outdoor_value,
            ElementId::BattOutdoorUnits => self.batt_outdoor_units,
            ElementId::BattSensor3Subtitle => self.batt_sensor3_subtitle,
            ElementId::BattSensor3Value => self.batt_sensor3_value,
            ElementId::BattSensor3Units => self.batt_sensor3_units,
            ElementId::BattSensor5Subtitle => self.batt_sensor5_subtitle,
            ElementId::BattSensor5Value => self.batt_sensor5_value,
            ElementId::BattSensor5Units => self.batt_sensor5_units,
            ElementId::TimeAndDateTitle => self.time_and_date_title,
            ElementId::TimeAndDateValue => self.time_and_date_value,
        }
    }

    /// Check that the widest text of every element stays on screen.
    pub const fn all_fit(&self) -> bool {
        let mut i = 0;
        while i < ElementId::ALL.len() {
            let id = ElementId::ALL[i];
            if !fits(self.position(id), id.max_chars()) {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl Default for Layout {
    fn default() -> Self { PORTRAIT_LAYOUT }
}

// =============================================================================
// Tests
// =============================================================================
