#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derived views over normalized earthquake records.
//!
//! Everything here is a pure function over in-memory records: daily event
//! counts for trend inspection, and per-event marker styling for map
//! rendering. No I/O, no clock reads.

pub mod daily;
pub mod style;

pub use daily::aggregate_daily;
pub use style::style_for;
