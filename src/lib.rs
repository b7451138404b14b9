//! Weather station display core - layout tables and local time handling.
//!
//! This library contains everything the weather station display needs that is
//! not tied to a particular display driver or sensor:
//!
//! - [`dst`]: Daylight saving time resolution from a compiled-in transition table
//! - [`clock`]: UTC to local wall time conversion and the time/date line
//! - [`config`]: Display geometry, font metrics and region (time zone) constants
//! - [`layout`]: Pixel coordinates of every element on the screen
//! - [`labels`]: Static titles, subtitles and unit strings
//! - [`error`]: Error type returned by the resolver
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the firmware build stays `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

#[macro_use]
mod log;

pub mod clock;
pub mod config;
pub mod dst;
pub mod error;
pub mod labels;
pub mod layout;

// Re-export commonly used items
pub use clock::{CivilDateTime, LocalDateTime, to_local};
pub use dst::{OffsetResult, Resolver, TimeKind, resolve};
pub use error::DstError;
pub use layout::{Coord, ElementId, Layout, PORTRAIT_LAYOUT};
