#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Earthquake query construction, USGS fetch, and record normalization.
//!
//! The pipeline is a straight-line transform with no internal state:
//! [`query::build_query`] turns user filter selections into a validated
//! [`QueryDescriptor`](quake_watch_models::QueryDescriptor), [`usgs::fetch`]
//! issues the provider request, and [`normalize::normalize`] flattens the
//! response into [`EarthquakeRecord`]s. [`fetch_and_normalize`] chains the
//! three for callers that want the composed operation.

pub mod normalize;
pub mod query;
pub mod usgs;

use chrono::NaiveDate;
use quake_watch_models::{EarthquakeRecord, TimeFilter};

/// Errors that can occur during query construction or fetching.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Custom range bounds missing or inverted.
    #[error("invalid time range: {message}")]
    InvalidTimeRange {
        /// Description of what the caller got wrong.
        message: String,
    },

    /// Lower magnitude bound exceeds the upper bound.
    #[error("invalid magnitude range: min {min} exceeds max {max}")]
    InvalidMagnitudeRange {
        /// The offending lower bound.
        min: f64,
        /// The offending upper bound.
        max: f64,
    },

    /// HTTP request failed (DNS, connect, timeout, or body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider rejected the request with a non-success status.
    #[error("provider returned {status}: {body}")]
    Provider {
        /// HTTP status the provider answered with.
        status: reqwest::StatusCode,
        /// Response body, captured for logging.
        body: String,
    },
}

/// Composed pipeline entry point: build the query, fetch, normalize.
///
/// Query-construction and fetch failures abort with their distinct
/// [`SourceError`]; a response with no features is a successful empty
/// result, never conflated with failure.
///
/// # Errors
///
/// Returns [`SourceError`] if the filter selection is inconsistent or the
/// provider request fails.
pub async fn fetch_and_normalize(
    filter: TimeFilter,
    custom_start: Option<NaiveDate>,
    custom_end: Option<NaiveDate>,
    min_magnitude: f64,
    max_magnitude: f64,
) -> Result<Vec<EarthquakeRecord>, SourceError> {
    let descriptor = query::build_query(
        filter,
        custom_start,
        custom_end,
        min_magnitude,
        max_magnitude,
    )?;
    let raw = usgs::fetch(&descriptor).await?;
    let records = normalize::normalize(&raw);

    log::info!("{filter}: {} earthquake record(s)", records.len());
    Ok(records)
}
