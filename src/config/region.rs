//! Time zone configuration for the installation site.
//!
//! Offsets and abbreviations are region constants, not derived from any rule.
//! Edit [`ILLINOIS`] (or add another [`Region`]) for other locations; the
//! matching transition dates live in [`crate::dst::table`].

/// A fixed UTC offset with its display abbreviation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZoneOffset {
    /// Whole hours east of UTC (negative for the Americas).
    pub utc_offset_hours: i8,
    /// Abbreviation shown on screen, e.g. "CST".
    pub abbreviation: &'static str,
}

/// Offsets and transition hour for one region.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    /// Human-readable name of the region.
    pub name: &'static str,
    /// Offset in effect outside the daylight saving period.
    pub standard: ZoneOffset,
    /// Offset in effect during the daylight saving period.
    pub daylight: ZoneOffset,
    /// Local hour at which a transition takes effect on its transition day.
    pub effective_hour: u8,
}

impl Region {
    /// Check the region constants for consistency.
    ///
    /// Daylight time must be exactly one hour ahead of standard time and the
    /// effective hour must be a valid clock hour.
    pub const fn is_valid(&self) -> bool {
        self.effective_hour < 24 && self.daylight.utc_offset_hours == self.standard.utc_offset_hours + 1
    }
}

// =============================================================================
// Illinois, USA (US Central)
// =============================================================================

/// US Central time as observed in Illinois.
pub const ILLINOIS: Region = Region {
    name: "Illinois",
    standard: ZoneOffset {
        utc_offset_hours: -6,
        abbreviation: "CST",
    },
    daylight: ZoneOffset {
        utc_offset_hours: -5,
        abbreviation: "CDT",
    },
    effective_hour: 2,
};

const _: () = assert!(ILLINOIS.is_valid());

// =============================================================================
// Tests
// =============================================================================
