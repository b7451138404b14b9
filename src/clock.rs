//! Local wall clock for the time and date line.
//!
//! The real-time clock keeps UTC. This module turns a UTC reading into local
//! wall time using the DST resolver and formats the line drawn at
//! [`ElementId::TimeAndDateValue`](crate::layout::ElementId::TimeAndDateValue).
//!
//! # UTC to Local
//!
//! The resolver classifies *local* hours, so a UTC reading is first shifted by
//! the standard offset. If that wall clock is still standard time the answer
//! is final. Otherwise the reading is shifted by the daylight offset as well,
//! and daylight time applies only if that wall clock agrees. This places the
//! spring-forward gap and the repeated autumn hour on the right UTC instants:
//!
//! | UTC (2025) | Local |
//! |---|---|
//! | 03-09 07:59 | 01:59 CST |
//! | 03-09 08:00 | 03:00 CDT |
//! | 11-02 06:59 | 01:59 CDT |
//! | 11-02 07:00 | 01:00 CST |

use core::fmt::Write;

use heapless::String;

use crate::dst::{OffsetResult, Resolver, TimeKind};
use crate::error::DstError;
use crate::labels::MONTH_ABBREVIATIONS;

/// Capacity of the formatted time and date line.
///
/// 16 characters of date and time plus a zone abbreviation of up to 8.
pub const TIME_AND_DATE_CAPACITY: usize = 24;

// =============================================================================
// Calendar Helpers
// =============================================================================

/// Gregorian leap year check.
#[inline]
pub const fn is_leap_year(year: u16) -> bool { (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 }

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub const fn days_in_month(
    year: u16,
    month: u8,
) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

// =============================================================================
// Civil Date and Time
// =============================================================================

/// A validated calendar date and time of day, minute resolution, no zone.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CivilDateTime {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
}

impl CivilDateTime {
    /// Create a date and time, or `None` if any field is out of range.
    pub const fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
    ) -> Option<Self> {
        if month < 1 || month > 12 || day < 1 || day > days_in_month(year, month) || hour > 23 || minute > 59 {
            return None;
        }
        Some(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    #[inline]
    pub const fn year(&self) -> u16 { self.year }

    #[inline]
    pub const fn month(&self) -> u8 { self.month }

    #[inline]
    pub const fn day(&self) -> u8 { self.day }

    #[inline]
    pub const fn hour(&self) -> u8 { self.hour }

    #[inline]
    pub const fn minute(&self) -> u8 { self.minute }

    /// Move by a whole number of hours, rolling over days, months and years.
    ///
    /// Returns `None` if the year would leave the `u16` range.
    pub fn shift_hours(
        self,
        hours: i8,
    ) -> Option<Self> {
        let mut hour = i16::from(self.hour) + i16::from(hours);
        let (mut year, mut month, mut day) = (self.year, self.month, self.day);

        while hour < 0 {
            hour += 24;
            if day > 1 {
                day -= 1;
            } else {
                if month > 1 {
                    month -= 1;
                } else {
                    month = 12;
                    year = year.checked_sub(1)?;
                }
                day = days_in_month(year, month);
            }
        }

        while hour > 23 {
            hour -= 24;
            if day < days_in_month(year, month) {
                day += 1;
            } else {
                day = 1;
                if month < 12 {
                    month += 1;
                } else {
                    month = 1;
                    year = year.checked_add(1)?;
                }
            }
        }

        Some(Self {
            year,
            month,
            day,
            hour: hour as u8,
            minute: self.minute,
        })
    }
}

// =============================================================================
// Local Date and Time
// =============================================================================

/// Wall clock time with the offset that produced it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LocalDateTime {
    /// Local date and time.
    pub civil: CivilDateTime,
    /// Offset in effect at that time.
    pub offset: OffsetResult,
}

impl LocalDateTime {
    /// Format as `"DD-Mon hh:mm AM ZZZ"`, e.g. `"14-Jun 09:41 AM CDT"`.
    ///
    /// Uses a 12-hour clock; midnight and noon display as 12.
    pub fn format_time_and_date(&self) -> String<TIME_AND_DATE_CAPACITY> {
        let civil = &self.civil;
        let (hour, meridiem) = match civil.hour {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        let month = MONTH_ABBREVIATIONS[usize::from(civil.month - 1)];

        let mut line = String::new();
        // Only fails on overflow, which leaves the line truncated
        write!(
            line,
            "{:02}-{} {:02}:{:02} {} {}",
            civil.day, month, hour, civil.minute, meridiem, self.offset.abbreviation
        )
        .ok();
        line
    }
}

impl Resolver {
    /// Convert a UTC date and time to local wall time.
    ///
    /// # Errors
    ///
    /// Returns [`DstError::UnsupportedYear`] if the local date falls outside
    /// the transition table, including when the offset moves a UTC reading
    /// across New Year into an unsupported year.
    pub fn to_local(
        &self,
        utc: CivilDateTime,
    ) -> Result<LocalDateTime, DstError> {
        let region = self.region();
        let out_of_range = || DstError::UnsupportedYear {
            year: utc.year,
            first: self.table().first_year(),
            last: self.table().last_year(),
        };

        let standard = utc.shift_hours(region.standard.utc_offset_hours).ok_or_else(out_of_range)?;
        let standard_offset = OffsetResult::from_zone(region.standard, TimeKind::Standard);
        if self.resolve(standard.year, standard.month, standard.day, standard.hour)?.kind == TimeKind::Standard {
            return Ok(LocalDateTime {
                civil: standard,
                offset: standard_offset,
            });
        }

        let daylight = utc.shift_hours(region.daylight.utc_offset_hours).ok_or_else(out_of_range)?;
        let offset = self.resolve(daylight.year, daylight.month, daylight.day, daylight.hour)?;
        let local = match offset.kind {
            TimeKind::Daylight => LocalDateTime {
                civil: daylight,
                offset,
            },
            // Repeated hour after the end transition
            TimeKind::Standard => LocalDateTime {
                civil: standard,
                offset: standard_offset,
            },
        };

        station_debug!(
            "local {}:{} {}",
            local.civil.hour,
            local.civil.minute,
            local.offset.abbreviation
        );
        Ok(local)
    }
}

/// Convert a UTC date and time to Illinois wall time.
///
/// # Errors
///
/// Returns [`DstError::UnsupportedYear`] if the local date is outside 2018-2029.
#[inline]
pub fn to_local(utc: CivilDateTime) -> Result<LocalDateTime, DstError> { Resolver::ILLINOIS.to_local(utc) }

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
    ) -> CivilDateTime {
        CivilDateTime::new(year, month, day, hour, minute).unwrap()
    }

    fn local_line(utc: CivilDateTime) -> String<TIME_AND_DATE_CAPACITY> { to_local(utc).unwrap().format_time_and_date() }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2025));
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
        assert_eq!(days_in_month(2025, 13), 0);
    }

    #[test]
    fn test_civil_validation() {
        assert!(CivilDateTime::new(2024, 2, 29, 0, 0).is_some());
        assert!(CivilDateTime::new(2025, 2, 29, 0, 0).is_none());
        assert!(CivilDateTime::new(2025, 0, 1, 0, 0).is_none());
        assert!(CivilDateTime::new(2025, 13, 1, 0, 0).is_none());
        assert!(CivilDateTime::new(2025, 1, 0, 0, 0).is_none());
        assert!(CivilDateTime::new(2025, 1, 1, 24, 0).is_none());
        assert!(CivilDateTime::new(2025, 1, 1, 23, 60).is_none());
    }

    #[test]
    fn test_shift_within_day() {
        assert_eq!(utc(2025, 6, 15, 12, 30).shift_hours(-5), Some(utc(2025, 6, 15, 7, 30)));
        assert_eq!(utc(2025, 6, 15, 12, 30).shift_hours(0), Some(utc(2025, 6, 15, 12, 30)));
    }

    #[test]
    fn test_shift_rollover() {
        // Previous day, month and year
        assert_eq!(utc(2025, 6, 15, 3, 0).shift_hours(-6), Some(utc(2025, 6, 14, 21, 0)));
        assert_eq!(utc(2025, 3, 1, 2, 0).shift_hours(-6), Some(utc(2025, 2, 28, 20, 0)));
        assert_eq!(utc(2024, 3, 1, 2, 0).shift_hours(-6), Some(utc(2024, 2, 29, 20, 0)));
        assert_eq!(utc(2025, 1, 1, 0, 15).shift_hours(-6), Some(utc(2024, 12, 31, 18, 15)));

        // Next day, month and year
        assert_eq!(utc(2025, 4, 30, 22, 0).shift_hours(5), Some(utc(2025, 5, 1, 3, 0)));
        assert_eq!(utc(2025, 12, 31, 23, 0).shift_hours(1), Some(utc(2026, 1, 1, 0, 0)));
    }

    #[test]
    fn test_shift_year_overflow() {
        assert_eq!(utc(0, 1, 1, 0, 0).shift_hours(-1), None);
        assert_eq!(utc(u16::MAX, 12, 31, 23, 0).shift_hours(1), None);
    }

    #[test]
    fn test_to_local_spring_forward() {
        let before = to_local(utc(2025, 3, 9, 7, 59)).unwrap();
        assert_eq!(before.civil, utc(2025, 3, 9, 1, 59));
        assert_eq!(before.offset.kind, TimeKind::Standard);
        assert_eq!(before.offset.abbreviation, "CST");

        let after = to_local(utc(2025, 3, 9, 8, 0)).unwrap();
        assert_eq!(after.civil, utc(2025, 3, 9, 3, 0));
        assert_eq!(after.offset.kind, TimeKind::Daylight);
        assert_eq!(after.offset.utc_offset_hours, -5);
    }

    #[test]
    fn test_to_local_fall_back() {
        let first = to_local(utc(2025, 11, 2, 6, 59)).unwrap();
        assert_eq!(first.civil, utc(2025, 11, 2, 1, 59));
        assert_eq!(first.offset.abbreviation, "CDT");

        let repeated = to_local(utc(2025, 11, 2, 7, 0)).unwrap();
        assert_eq!(repeated.civil, utc(2025, 11, 2, 1, 0));
        assert_eq!(repeated.offset.abbreviation, "CST");
        assert_eq!(repeated.offset.utc_offset_hours, -6);
    }

    #[test]
    fn test_to_local_summer_and_winter() {
        let summer = to_local(utc(2024, 7, 4, 17, 0)).unwrap();
        assert_eq!(summer.civil, utc(2024, 7, 4, 12, 0));
        assert_eq!(summer.offset.kind, TimeKind::Daylight);

        let winter = to_local(utc(2024, 1, 15, 17, 0)).unwrap();
        assert_eq!(winter.civil, utc(2024, 1, 15, 11, 0));
        assert_eq!(winter.offset.kind, TimeKind::Standard);
    }

    #[test]
    fn test_to_local_new_year_rollover() {
        let local = to_local(utc(2026, 1, 1, 3, 30)).unwrap();
        assert_eq!(local.civil, utc(2025, 12, 31, 21, 30));
        assert_eq!(local.offset.abbreviation, "CST");
    }

    #[test]
    fn test_to_local_table_edges() {
        // Local time is still 2017
        assert_eq!(
            to_local(utc(2018, 1, 1, 3, 0)),
            Err(DstError::UnsupportedYear {
                year: 2017,
                first: 2018,
                last: 2029,
            })
        );
        // Local time is still 2029
        let last = to_local(utc(2030, 1, 1, 5, 0)).unwrap();
        assert_eq!(last.civil, utc(2029, 12, 31, 23, 0));
        // Local time is 2030
        assert!(to_local(utc(2030, 1, 1, 6, 0)).is_err());
    }

    #[test]
    fn test_format_time_and_date() {
        assert_eq!(local_line(utc(2025, 6, 14, 14, 41)).as_str(), "14-Jun 09:41 AM CDT");
        assert_eq!(local_line(utc(2025, 6, 14, 22, 5)).as_str(), "14-Jun 05:05 PM CDT");
        assert_eq!(local_line(utc(2025, 1, 2, 6, 0)).as_str(), "02-Jan 12:00 AM CST");
        assert_eq!(local_line(utc(2025, 1, 2, 18, 0)).as_str(), "02-Jan 12:00 PM CST");
    }

    #[test]
    fn test_format_width_matches_layout() {
        use crate::layout::TIME_AND_DATE_CHARS;

        let line = local_line(utc(2025, 12, 25, 23, 59));
        assert_eq!(line.len(), TIME_AND_DATE_CHARS as usize);
    }
}
