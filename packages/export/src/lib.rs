#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CSV export.
//!
//! Two table shapes: the full record listing and the per-day counts. Cell
//! rendering is lossless where it can be: absent fields become empty cells,
//! never zeros, and numbers use their shortest decimal form.

use std::io;

use quake_watch_models::{DailyCount, EarthquakeRecord};
use thiserror::Error;

/// Header row of the record listing export.
pub const RECORD_HEADERS: [&str; 6] = [
    "Time",
    "Latitude",
    "Longitude",
    "Depth",
    "Magnitude",
    "Location",
];

/// Header row of the daily count export.
pub const DAILY_HEADERS: [&str; 2] = ["Date", "Number of Earthquakes"];

/// Errors that can occur while exporting.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Writes the record listing as CSV to any writer.
///
/// An empty record slice still produces the header row.
///
/// # Errors
///
/// Returns [`ExportError`] when serialization or the underlying writer
/// fails.
pub fn write_records_csv<W: io::Write>(
    writer: W,
    records: &[EarthquakeRecord],
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(RECORD_HEADERS)?;
    for record in records {
        csv_writer.write_record([
            record.display_time().unwrap_or_default(),
            number_cell(record.latitude),
            number_cell(record.longitude),
            number_cell(record.depth_km),
            number_cell(record.magnitude),
            record.place.clone().unwrap_or_default(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Renders the record listing as an in-memory CSV string.
///
/// # Errors
///
/// Returns [`ExportError`] when serialization fails.
pub fn records_csv(records: &[EarthquakeRecord]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_records_csv(&mut buffer, records)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Writes the daily count table as CSV to any writer.
///
/// # Errors
///
/// Returns [`ExportError`] when serialization or the underlying writer
/// fails.
pub fn write_daily_counts_csv<W: io::Write>(
    writer: W,
    counts: &[DailyCount],
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(DAILY_HEADERS)?;
    for entry in counts {
        csv_writer.write_record([entry.date.to_string(), entry.count.to_string()])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Renders the daily count table as an in-memory CSV string.
///
/// # Errors
///
/// Returns [`ExportError`] when serialization fails.
pub fn daily_counts_csv(counts: &[DailyCount]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_daily_counts_csv(&mut buffer, counts)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn number_cell(value: Option<f64>) -> String {
    value.map(|x| x.to_string()).unwrap_or_default()
}
