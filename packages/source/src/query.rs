//! Query construction: filter selections become validated descriptors.
//!
//! Pure functions of their inputs and a reference instant. The rolling
//! windows (`last-24-hours`, `past-7-days`, `past-30-days`) end at the
//! reference instant; a custom range is taken as midnight-to-midnight UTC
//! calendar dates supplied by the caller.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use quake_watch_models::{ETHIOPIA_BOUNDS, QueryDescriptor, TimeFilter};

use crate::SourceError;

/// Builds a query descriptor using the current wall-clock time as the
/// reference instant.
///
/// # Errors
///
/// Returns [`SourceError`] if the custom range is missing a bound or
/// inverted, or if `min_magnitude > max_magnitude`.
pub fn build_query(
    filter: TimeFilter,
    custom_start: Option<NaiveDate>,
    custom_end: Option<NaiveDate>,
    min_magnitude: f64,
    max_magnitude: f64,
) -> Result<QueryDescriptor, SourceError> {
    build_query_at(
        filter,
        custom_start,
        custom_end,
        min_magnitude,
        max_magnitude,
        Utc::now(),
    )
}

/// Builds a query descriptor relative to an explicit reference instant.
///
/// Magnitude bounds are passed through unclamped; the provider documents
/// 0.0–10.0 but does not enforce it, and neither do we.
///
/// # Panics
///
/// Panics if a window length constant cannot be represented as a
/// `chrono::Duration` (should never happen in practice).
///
/// # Errors
///
/// Returns [`SourceError::InvalidTimeRange`] if the custom range is missing
/// a bound or has `start > end`, and
/// [`SourceError::InvalidMagnitudeRange`] if `min_magnitude > max_magnitude`.
pub fn build_query_at(
    filter: TimeFilter,
    custom_start: Option<NaiveDate>,
    custom_end: Option<NaiveDate>,
    min_magnitude: f64,
    max_magnitude: f64,
    now: DateTime<Utc>,
) -> Result<QueryDescriptor, SourceError> {
    if min_magnitude > max_magnitude {
        return Err(SourceError::InvalidMagnitudeRange {
            min: min_magnitude,
            max: max_magnitude,
        });
    }

    let (start_time, end_time) = match filter.window_days() {
        Some(days) => {
            let window = Duration::try_days(days).expect("window length fits in Duration");
            (now - window, now)
        }
        None => {
            let (Some(start), Some(end)) = (custom_start, custom_end) else {
                return Err(SourceError::InvalidTimeRange {
                    message: "custom range requires both a start and an end date".to_string(),
                });
            };
            if start > end {
                return Err(SourceError::InvalidTimeRange {
                    message: format!("start {start} is after end {end}"),
                });
            }
            (midnight_utc(start), midnight_utc(end))
        }
    };

    Ok(QueryDescriptor {
        start_time,
        end_time,
        min_magnitude,
        max_magnitude,
        bounds: ETHIOPIA_BOUNDS,
    })
}

/// Interprets a calendar date as midnight UTC.
fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    fn reference_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn last_24_hours_ends_at_reference_instant() {
        let now = reference_instant();
        let descriptor =
            build_query_at(TimeFilter::Last24Hours, None, None, 1.0, 8.0, now).unwrap();

        assert_eq!(descriptor.end_time, now);
        assert_eq!(descriptor.end_time - descriptor.start_time, Duration::days(1));
    }

    #[test]
    fn rolling_windows_span_their_day_counts() {
        let now = reference_instant();

        let week = build_query_at(TimeFilter::Past7Days, None, None, 1.0, 8.0, now).unwrap();
        assert_eq!(week.end_time - week.start_time, Duration::days(7));

        let month = build_query_at(TimeFilter::Past30Days, None, None, 1.0, 8.0, now).unwrap();
        assert_eq!(month.end_time - month.start_time, Duration::days(30));
    }

    #[test]
    fn custom_range_bounds_pass_through_unchanged() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let descriptor = build_query_at(
            TimeFilter::CustomRange,
            Some(start),
            Some(end),
            2.5,
            6.0,
            reference_instant(),
        )
        .unwrap();

        assert_eq!(descriptor.start_time, midnight_utc(start));
        assert_eq!(descriptor.end_time, midnight_utc(end));
        assert_eq!(descriptor.start_time.date_naive(), start);
        assert_eq!(descriptor.end_time.date_naive(), end);
    }

    #[test]
    fn custom_range_requires_both_bounds() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let result = build_query_at(
            TimeFilter::CustomRange,
            Some(start),
            None,
            1.0,
            8.0,
            reference_instant(),
        );
        assert!(matches!(result, Err(SourceError::InvalidTimeRange { .. })));
    }

    #[test]
    fn inverted_custom_range_is_rejected() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let result = build_query_at(
            TimeFilter::CustomRange,
            Some(start),
            Some(end),
            1.0,
            8.0,
            reference_instant(),
        );
        assert!(matches!(result, Err(SourceError::InvalidTimeRange { .. })));
    }

    #[test]
    fn inverted_magnitude_range_is_rejected() {
        let result =
            build_query_at(TimeFilter::Last24Hours, None, None, 6.0, 2.0, reference_instant());
        assert!(matches!(
            result,
            Err(SourceError::InvalidMagnitudeRange { .. })
        ));
    }

    #[test]
    fn magnitude_bounds_are_not_clamped() {
        let descriptor =
            build_query_at(TimeFilter::Last24Hours, None, None, -1.0, 12.0, reference_instant())
                .unwrap();
        assert!((descriptor.min_magnitude - -1.0).abs() < f64::EPSILON);
        assert!((descriptor.max_magnitude - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn descriptor_is_scoped_to_ethiopia() {
        let descriptor =
            build_query_at(TimeFilter::Last24Hours, None, None, 1.0, 8.0, reference_instant())
                .unwrap();
        assert_eq!(descriptor.bounds, ETHIOPIA_BOUNDS);
    }
}
