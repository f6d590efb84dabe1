#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Core data types for the earthquake monitoring pipeline.
//!
//! Every stage of the pipeline, from query construction through export,
//! exchanges the types defined here. Records preserve field absence: a
//! missing magnitude or depth stays `None` rather than being coerced to
//! zero, because zero is itself a valid reading.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Display format for event timestamps: 12-hour clock with AM/PM marker,
/// always UTC.
const TIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p";

/// Default lower magnitude bound offered to users.
pub const DEFAULT_MIN_MAGNITUDE: f64 = 1.0;

/// Default upper magnitude bound offered to users.
///
/// The provider documents magnitudes in the 0.0–10.0 range but does not
/// enforce it; neither do we.
pub const DEFAULT_MAX_MAGNITUDE: f64 = 8.0;

/// Fixed query region covering Ethiopia.
pub const ETHIOPIA_BOUNDS: BoundingBox = BoundingBox {
    min_latitude: 3.4,
    max_latitude: 14.9,
    min_longitude: 32.9,
    max_longitude: 47.9,
};

/// The time window a query covers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum TimeFilter {
    /// The 24 hours leading up to the current moment.
    #[serde(rename = "last-24-hours")]
    #[strum(serialize = "last-24-hours")]
    Last24Hours,
    /// The 7 days leading up to the current moment.
    #[serde(rename = "past-7-days")]
    #[strum(serialize = "past-7-days")]
    Past7Days,
    /// The 30 days leading up to the current moment.
    #[serde(rename = "past-30-days")]
    #[strum(serialize = "past-30-days")]
    Past30Days,
    /// An explicit start/end date pair supplied by the caller.
    #[serde(rename = "custom-range")]
    #[strum(serialize = "custom-range")]
    CustomRange,
}

impl TimeFilter {
    /// All filters, in the order they are presented to users.
    pub const ALL: &[Self] = &[
        Self::Last24Hours,
        Self::Past7Days,
        Self::Past30Days,
        Self::CustomRange,
    ];

    /// Human-readable label for menus and tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Last24Hours => "Last 24 Hours",
            Self::Past7Days => "Past 7 Days",
            Self::Past30Days => "Past 30 Days",
            Self::CustomRange => "Custom Date Range",
        }
    }

    /// Length of the rolling window in days, or `None` for
    /// [`TimeFilter::CustomRange`], whose bounds come from the caller.
    #[must_use]
    pub const fn window_days(self) -> Option<i64> {
        match self {
            Self::Last24Hours => Some(1),
            Self::Past7Days => Some(7),
            Self::Past30Days => Some(30),
            Self::CustomRange => None,
        }
    }
}

/// Rectangular lat/lon region used to scope provider queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    /// Southern edge (degrees, WGS84).
    pub min_latitude: f64,
    /// Northern edge (degrees, WGS84).
    pub max_latitude: f64,
    /// Western edge (degrees, WGS84).
    pub min_longitude: f64,
    /// Eastern edge (degrees, WGS84).
    pub max_longitude: f64,
}

/// A validated, immutable description of one provider query.
///
/// Constructed fresh per fetch by the query builder; never mutated. The
/// builder guarantees `start_time <= end_time` and
/// `min_magnitude <= max_magnitude`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryDescriptor {
    /// Inclusive start of the queried window (UTC).
    pub start_time: DateTime<Utc>,
    /// Inclusive end of the queried window (UTC).
    pub end_time: DateTime<Utc>,
    /// Lower magnitude bound, passed through to the provider unclamped.
    pub min_magnitude: f64,
    /// Upper magnitude bound, passed through to the provider unclamped.
    pub max_magnitude: f64,
    /// Geographic region the query is scoped to.
    pub bounds: BoundingBox,
}

/// One earthquake event, normalized from the provider's feature format.
///
/// All fields except the record itself are optional: the provider may omit
/// any of them, and an event without coordinates still belongs in a tabular
/// listing even though it cannot be placed on a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarthquakeRecord {
    /// When the event occurred (UTC). `None` when the source feature is
    /// missing its timestamp.
    pub time: Option<DateTime<Utc>>,
    /// Latitude (degrees, WGS84).
    pub latitude: Option<f64>,
    /// Longitude (degrees, WGS84).
    pub longitude: Option<f64>,
    /// Hypocenter depth in kilometers.
    pub depth_km: Option<f64>,
    /// Event magnitude as reported by the provider.
    pub magnitude: Option<f64>,
    /// Free-text description of where the event occurred.
    pub place: Option<String>,
}

impl EarthquakeRecord {
    /// Renders the event time for display: `YYYY-MM-DD hh:mm:ss AM/PM`,
    /// always in UTC. Returns `None` when the record has no timestamp.
    #[must_use]
    pub fn display_time(&self) -> Option<String> {
        self.time
            .map(|t| t.format(TIME_DISPLAY_FORMAT).to_string())
    }

    /// Calendar date (UTC) the event falls on, used for daily bucketing.
    #[must_use]
    pub fn event_date(&self) -> Option<NaiveDate> {
        self.time.map(|t| t.date_naive())
    }
}

/// Number of earthquakes on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCount {
    /// Calendar date (UTC), no time component.
    pub date: NaiveDate,
    /// Number of events whose time falls on that date.
    pub count: u64,
}

/// How a single event should be drawn on a map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    /// Fill color as a `#rrggbb` hex string.
    pub color: &'static str,
    /// Marker radius, proportional to magnitude.
    pub radius: f64,
}
