//! Error type for DST resolution.

use thiserror::Error;

/// Errors returned by the DST resolver.
///
/// Transition dates are enumerated per year rather than computed from a rule,
/// so a year outside the table cannot be answered and is never clamped.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DstError {
    /// The requested year has no entry in the transition table.
    #[error("year {year} is outside the DST table range {first}..={last}")]
    UnsupportedYear {
        /// Year that was requested.
        year: u16,
        /// First year covered by the table.
        first: u16,
        /// Last year covered by the table.
        last: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_year_message() {
        let err = DstError::UnsupportedYear {
            year: 2030,
            first: 2018,
            last: 2029,
        };
        assert_eq!(
            err.to_string(),
            "year 2030 is outside the DST table range 2018..=2029"
        );
    }
}
