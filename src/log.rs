//! Logging macros.
//!
//! With the `defmt` feature enabled these forward to `defmt` (RTT on the
//! device). Without it they compile to nothing, so host builds and tests carry
//! no logging backend.
//!
//! Format strings must stick to plain `{}` placeholders so the same call site
//! is valid for both configurations.
//!
//! # Usage
//!
//! ```ignore
//! station_debug!("local time {}:{}", hour, minute);
//! station_warn!("no DST entry for year {}", year);
//! ```

/// Log a message at Debug level.
#[cfg(feature = "defmt")]
macro_rules! station_debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        defmt::debug!($fmt $(, $arg)*)
    };
}

/// Log a message at Warn level.
#[cfg(feature = "defmt")]
macro_rules! station_warn {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        defmt::warn!($fmt $(, $arg)*)
    };
}

#[cfg(not(feature = "defmt"))]
macro_rules! station_debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        $( let _ = &$arg; )*
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! station_warn {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        $( let _ = &$arg; )*
    }};
}
