//! Daylight saving time resolution.
//!
//! Classifies a local date and hour as standard or daylight time using the
//! per-year transition dates in [`table`] and the offsets of a
//! [`Region`](crate::config::Region).
//!
//! # Transition Boundaries
//!
//! Both transitions happen at the region's effective hour (02:00 in Illinois):
//!
//! - Start day: hours before the effective hour are standard, the effective
//!   hour and later are daylight.
//! - End day: hours before the effective hour are daylight, the effective hour
//!   and later are standard.
//!
//! # Usage
//!
//! ```ignore
//! use weather_station::dst::{resolve, TimeKind};
//!
//! let offset = resolve(2025, 3, 9, 2)?;
//! assert_eq!(offset.kind, TimeKind::Daylight);
//! assert_eq!(offset.utc_offset_hours, -5);
//! ```

pub mod table;

use crate::config::region::{ILLINOIS, Region, ZoneOffset};
use crate::error::DstError;
use table::{ILLINOIS_TRANSITIONS, TransitionTable};

/// Whether standard or daylight time is in effect.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeKind {
    /// Standard (winter) time.
    Standard,
    /// Daylight saving (summer) time.
    Daylight,
}

impl TimeKind {
    /// Lowercase label for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Daylight => "daylight",
        }
    }
}

/// UTC offset in effect at a local instant.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OffsetResult {
    /// Whole hours east of UTC.
    pub utc_offset_hours: i8,
    /// Standard or daylight time.
    pub kind: TimeKind,
    /// Zone abbreviation for display, e.g. "CDT".
    pub abbreviation: &'static str,
}

impl OffsetResult {
    pub(crate) const fn from_zone(
        zone: ZoneOffset,
        kind: TimeKind,
    ) -> Self {
        Self {
            utc_offset_hours: zone.utc_offset_hours,
            kind,
            abbreviation: zone.abbreviation,
        }
    }
}

/// A transition table paired with the region it describes.
#[derive(Clone, Copy, Debug)]
pub struct Resolver {
    table: TransitionTable,
    region: Region,
}

impl Resolver {
    /// Illinois offsets with the compiled-in 2018-2029 table.
    pub const ILLINOIS: Self = Self::new(ILLINOIS_TRANSITIONS, ILLINOIS);

    /// Pair a table with a region.
    pub const fn new(
        table: TransitionTable,
        region: Region,
    ) -> Self {
        Self { table, region }
    }

    /// Transition table used by this resolver.
    #[inline]
    pub const fn table(&self) -> &TransitionTable { &self.table }

    /// Region used by this resolver.
    #[inline]
    pub const fn region(&self) -> &Region { &self.region }

    /// Resolve the offset in effect at a local date and hour.
    ///
    /// `month` must be 1-12, `day` valid for the month and `hour` 0-23.
    ///
    /// # Errors
    ///
    /// Returns [`DstError::UnsupportedYear`] if `year` has no table entry.
    pub fn resolve(
        &self,
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
    ) -> Result<OffsetResult, DstError> {
        debug_assert!((1..=12).contains(&month), "month out of range");
        debug_assert!((1..=31).contains(&day), "day out of range");
        debug_assert!(hour < 24, "hour out of range");

        let record = self.table.get(year).inspect_err(|_| {
            station_warn!("no DST table entry for year {}", year);
        })?;

        // (month, day, hour) tuples compare lexicographically
        let instant = (month, day, hour);
        let effective = self.region.effective_hour;
        let start = (record.start.month, record.start.day, effective);
        let end = (record.end.month, record.end.day, effective);

        let result = if start <= instant && instant < end {
            OffsetResult::from_zone(self.region.daylight, TimeKind::Daylight)
        } else {
            OffsetResult::from_zone(self.region.standard, TimeKind::Standard)
        };
        Ok(result)
    }
}

/// Resolve the Illinois offset in effect at a local date and hour.
///
/// # Errors
///
/// Returns [`DstError::UnsupportedYear`] outside 2018-2029.
#[inline]
pub fn resolve(
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
) -> Result<OffsetResult, DstError> {
    Resolver::ILLINOIS.resolve(year, month, day, hour)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::table::{DST_FIRST_YEAR, DST_LAST_YEAR, MonthDay, TransitionRecord};
    use super::*;

    const CST: OffsetResult = OffsetResult {
        utc_offset_hours: -6,
        kind: TimeKind::Standard,
        abbreviation: "CST",
    };

    const CDT: OffsetResult = OffsetResult {
        utc_offset_hours: -5,
        kind: TimeKind::Daylight,
        abbreviation: "CDT",
    };

    fn records() -> impl Iterator<Item = &'static TransitionRecord> { ILLINOIS_TRANSITIONS.records().iter() }

    #[test]
    fn test_2025_boundaries() {
        assert_eq!(resolve(2025, 3, 9, 1), Ok(CST));
        assert_eq!(resolve(2025, 3, 9, 2), Ok(CDT));
        assert_eq!(resolve(2025, 11, 2, 1), Ok(CDT));
        assert_eq!(resolve(2025, 11, 2, 2), Ok(CST));
    }

    #[test]
    fn test_time_kind_labels() {
        assert_eq!(TimeKind::Standard.as_str(), "standard");
        assert_eq!(TimeKind::Daylight.as_str(), "daylight");
    }

    #[test]
    fn test_start_day_every_year() {
        for record in records() {
            let MonthDay { month, day } = record.start;
            for hour in 0..2 {
                assert_eq!(resolve(record.year, month, day, hour), Ok(CST), "{record:?} {hour}");
            }
            for hour in 2..24 {
                assert_eq!(resolve(record.year, month, day, hour), Ok(CDT), "{record:?} {hour}");
            }
        }
    }

    #[test]
    fn test_end_day_every_year() {
        for record in records() {
            let MonthDay { month, day } = record.end;
            for hour in 0..2 {
                assert_eq!(resolve(record.year, month, day, hour), Ok(CDT), "{record:?} {hour}");
            }
            for hour in 2..24 {
                assert_eq!(resolve(record.year, month, day, hour), Ok(CST), "{record:?} {hour}");
            }
        }
    }

    #[test]
    fn test_inside_daylight_period() {
        for record in records() {
            // Day after start, every month in between, day before end
            let dates = [
                (3, record.start.day + 1),
                (4, 1),
                (6, 21),
                (7, 4),
                (9, 30),
                (10, 31),
                (11, record.end.day - 1),
            ];
            for (month, day) in dates {
                if day == 0 {
                    continue;
                }
                for hour in [0, 12, 23] {
                    assert_eq!(resolve(record.year, month, day, hour), Ok(CDT), "{} {month}/{day} {hour}", record.year);
                }
            }
            // Start day late evening
            assert_eq!(resolve(record.year, 3, record.start.day, 23), Ok(CDT));
        }
    }

    #[test]
    fn test_outside_daylight_period() {
        for record in records() {
            let dates = [
                (1, 1),
                (2, 28),
                (3, 1),
                (3, record.start.day - 1),
                (11, record.end.day + 1),
                (11, 30),
                (12, 25),
                (12, 31),
            ];
            for (month, day) in dates {
                for hour in [0, 1, 2, 23] {
                    assert_eq!(resolve(record.year, month, day, hour), Ok(CST), "{} {month}/{day} {hour}", record.year);
                }
            }
        }
    }

    #[test]
    fn test_unsupported_years() {
        for year in [0, 1970, DST_FIRST_YEAR - 1, DST_LAST_YEAR + 1, 2100] {
            assert_eq!(
                resolve(year, 6, 1, 12),
                Err(DstError::UnsupportedYear {
                    year,
                    first: DST_FIRST_YEAR,
                    last: DST_LAST_YEAR,
                })
            );
        }
    }

    #[test]
    fn test_custom_region_and_table() {
        const RECORDS: [TransitionRecord; 1] = [TransitionRecord {
            year: 2025,
            start: MonthDay { month: 3, day: 30 },
            end: MonthDay { month: 10, day: 26 },
        }];
        let region = Region {
            name: "Test",
            standard: ZoneOffset {
                utc_offset_hours: 1,
                abbreviation: "CET",
            },
            daylight: ZoneOffset {
                utc_offset_hours: 2,
                abbreviation: "CEST",
            },
            effective_hour: 3,
        };
        let resolver = Resolver::new(TransitionTable::new(&RECORDS), region);

        assert_eq!(resolver.resolve(2025, 3, 30, 2).unwrap().abbreviation, "CET");
        assert_eq!(resolver.resolve(2025, 3, 30, 3).unwrap().abbreviation, "CEST");
        assert_eq!(resolver.resolve(2025, 10, 26, 2).unwrap().utc_offset_hours, 2);
        assert_eq!(resolver.resolve(2025, 10, 26, 3).unwrap().utc_offset_hours, 1);
        assert!(resolver.resolve(2024, 6, 1, 0).is_err());
    }
}
