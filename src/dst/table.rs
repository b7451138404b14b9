//! Compiled-in daylight saving transition dates.
//!
//! Dates are listed per year instead of being computed from the "second
//! Sunday in March / first Sunday in November" rule. Extend the table by
//! appending records; the compile-time checks below reject gaps, duplicates
//! and inverted periods.

use crate::error::DstError;

/// A month/day pair within an unspecified year.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonthDay {
    /// Month, 1-12.
    pub month: u8,
    /// Day of month, 1-31.
    pub day: u8,
}

impl MonthDay {
    /// Create a new month/day pair.
    pub const fn new(
        month: u8,
        day: u8,
    ) -> Self {
        Self { month, day }
    }

    const fn is_plausible(self) -> bool { self.month >= 1 && self.month <= 12 && self.day >= 1 && self.day <= 31 }

    const fn is_before(
        self,
        other: Self,
    ) -> bool {
        self.month < other.month || (self.month == other.month && self.day < other.day)
    }
}

/// Daylight saving period for one year.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransitionRecord {
    /// Calendar year the record applies to.
    pub year: u16,
    /// Day daylight time begins (at the region's effective hour).
    pub start: MonthDay,
    /// Day daylight time ends (at the region's effective hour).
    pub end: MonthDay,
}

impl TransitionRecord {
    const fn new(
        year: u16,
        start: (u8, u8),
        end: (u8, u8),
    ) -> Self {
        Self {
            year,
            start: MonthDay::new(start.0, start.1),
            end: MonthDay::new(end.0, end.1),
        }
    }
}

/// Ordered, contiguous per-year transition records.
#[derive(Clone, Copy, Debug)]
pub struct TransitionTable {
    records: &'static [TransitionRecord],
}

impl TransitionTable {
    /// Wrap a record slice. Use [`TransitionTable::is_well_formed`] in a
    /// `const` assertion to validate it.
    pub const fn new(records: &'static [TransitionRecord]) -> Self { Self { records } }

    /// First year covered by the table.
    ///
    /// Returns 0 for an empty table.
    #[inline]
    pub const fn first_year(&self) -> u16 {
        match self.records.first() {
            Some(record) => record.year,
            None => 0,
        }
    }

    /// Last year covered by the table.
    ///
    /// Returns 0 for an empty table.
    #[inline]
    pub const fn last_year(&self) -> u16 {
        match self.records.last() {
            Some(record) => record.year,
            None => 0,
        }
    }

    /// Number of years in the table.
    #[inline]
    pub const fn len(&self) -> usize { self.records.len() }

    /// Check if the table has no records.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.records.is_empty() }

    /// All records, oldest year first.
    pub const fn records(&self) -> &'static [TransitionRecord] { self.records }

    /// Look up the record for `year`.
    pub fn get(
        &self,
        year: u16,
    ) -> Result<&'static TransitionRecord, DstError> {
        let first = self.first_year();
        year.checked_sub(first)
            .and_then(|index| self.records.get(usize::from(index)))
            .filter(|record| record.year == year)
            .ok_or(DstError::UnsupportedYear {
                year,
                first,
                last: self.last_year(),
            })
    }

    /// Validate table structure.
    ///
    /// Requires at least one record, consecutive years, plausible dates and
    /// a start date strictly before the end date in every year.
    pub const fn is_well_formed(&self) -> bool {
        if self.records.is_empty() {
            return false;
        }
        let first = self.records[0].year;
        let mut i = 0;
        while i < self.records.len() {
            let record = self.records[i];
            if record.year as usize != first as usize + i {
                return false;
            }
            if !record.start.is_plausible() || !record.end.is_plausible() {
                return false;
            }
            if !record.start.is_before(record.end) {
                return false;
            }
            i += 1;
        }
        true
    }
}

// =============================================================================
// Illinois, USA (US Central)
// =============================================================================

/// First year with a transition entry.
pub const DST_FIRST_YEAR: u16 = 2018;

/// Last year with a transition entry.
pub const DST_LAST_YEAR: u16 = 2029;

const ILLINOIS_RECORDS: [TransitionRecord; 12] = [
    TransitionRecord::new(2018, (3, 11), (11, 4)),
    TransitionRecord::new(2019, (3, 10), (11, 3)),
    TransitionRecord::new(2020, (3, 8), (11, 1)),
    TransitionRecord::new(2021, (3, 14), (11, 7)),
    TransitionRecord::new(2022, (3, 13), (11, 6)),
    TransitionRecord::new(2023, (3, 12), (11, 5)),
    TransitionRecord::new(2024, (3, 10), (11, 3)),
    TransitionRecord::new(2025, (3, 9), (11, 2)),
    TransitionRecord::new(2026, (3, 8), (11, 1)),
    TransitionRecord::new(2027, (3, 14), (11, 7)),
    TransitionRecord::new(2028, (3, 12), (11, 5)),
    TransitionRecord::new(2029, (3, 11), (11, 4)),
];

/// Transition dates for Illinois, 2018 through 2029.
pub const ILLINOIS_TRANSITIONS: TransitionTable = TransitionTable::new(&ILLINOIS_RECORDS);

// Compile-time validation: contiguous years matching the declared range
const _: () = assert!(ILLINOIS_TRANSITIONS.is_well_formed());
const _: () = assert!(ILLINOIS_TRANSITIONS.first_year() == DST_FIRST_YEAR);
const _: () = assert!(ILLINOIS_TRANSITIONS.last_year() == DST_LAST_YEAR);

// =============================================================================
// Tests
// =============================================================================
