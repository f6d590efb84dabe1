//! Daily event counts.
//!
//! Buckets records by the UTC calendar date of their event time and counts
//! each bucket. Records without a timestamp cannot be bucketed and are
//! skipped.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use quake_watch_models::{DailyCount, EarthquakeRecord};

/// Counts events per UTC calendar date, ascending by date.
///
/// Dates with no events inside the span are not materialized, with one
/// exception: a result covering a single date gets a trailing zero-count
/// entry for the following day, so downstream consumers always see a
/// series of at least two points when there is any data at all.
#[must_use]
pub fn aggregate_daily(records: &[EarthquakeRecord]) -> Vec<DailyCount> {
    let mut buckets: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    let mut skipped = 0usize;

    for record in records {
        match record.event_date() {
            Some(date) => *buckets.entry(date).or_insert(0) += 1,
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        log::debug!("skipped {skipped} record(s) without a timestamp");
    }

    let mut counts: Vec<DailyCount> = buckets
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect();

    if counts.len() == 1
        && let Some(next) = counts[0].date.succ_opt()
    {
        counts.push(DailyCount {
            date: next,
            count: 0,
        });
    }

    counts
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone as _, Utc};

    use super::*;

    fn record_at(year: i32, month: u32, day: u32, hour: u32) -> EarthquakeRecord {
        EarthquakeRecord {
            time: Some(Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()),
            latitude: Some(9.0),
            longitude: Some(40.0),
            depth_km: Some(10.0),
            magnitude: Some(4.0),
            place: None,
        }
    }

    fn timeless_record() -> EarthquakeRecord {
        EarthquakeRecord {
            time: None,
            latitude: Some(9.0),
            longitude: Some(40.0),
            depth_km: None,
            magnitude: Some(2.0),
            place: None,
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn counts_are_grouped_by_calendar_date_ascending() {
        let records = vec![
            record_at(2024, 1, 3, 9),
            record_at(2024, 1, 1, 0),
            record_at(2024, 1, 2, 5),
            record_at(2024, 1, 2, 23),
            record_at(2024, 1, 1, 12),
            record_at(2024, 1, 2, 1),
        ];

        let counts = aggregate_daily(&records);

        assert_eq!(
            counts,
            vec![
                DailyCount { date: date(2024, 1, 1), count: 2 },
                DailyCount { date: date(2024, 1, 2), count: 3 },
                DailyCount { date: date(2024, 1, 3), count: 1 },
            ],
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(aggregate_daily(&[]).is_empty());
    }

    #[test]
    fn single_date_gets_a_trailing_zero_entry() {
        let records = vec![record_at(2024, 1, 15, 8), record_at(2024, 1, 15, 20)];

        let counts = aggregate_daily(&records);

        assert_eq!(
            counts,
            vec![
                DailyCount { date: date(2024, 1, 15), count: 2 },
                DailyCount { date: date(2024, 1, 16), count: 0 },
            ],
        );
    }

    #[test]
    fn multiple_dates_are_not_zero_filled() {
        let records = vec![record_at(2024, 1, 1, 8), record_at(2024, 1, 5, 8)];

        let counts = aggregate_daily(&records);

        // Interior gap days (Jan 2-4) stay absent.
        assert_eq!(counts.len(), 2);
        assert!(counts.iter().all(|x| x.count > 0));
    }

    #[test]
    fn records_without_time_are_skipped() {
        let records = vec![
            record_at(2024, 1, 1, 8),
            timeless_record(),
            record_at(2024, 1, 1, 9),
        ];

        let counts = aggregate_daily(&records);

        assert_eq!(
            counts,
            vec![
                DailyCount { date: date(2024, 1, 1), count: 2 },
                DailyCount { date: date(2024, 1, 2), count: 0 },
            ],
        );
    }

    #[test]
    fn only_timeless_records_yield_empty_output() {
        assert!(aggregate_daily(&[timeless_record(), timeless_record()]).is_empty());
    }

    #[test]
    fn day_boundary_is_utc_midnight() {
        let records = vec![record_at(2024, 1, 1, 23), record_at(2024, 1, 2, 0)];

        let counts = aggregate_daily(&records);

        assert_eq!(
            counts,
            vec![
                DailyCount { date: date(2024, 1, 1), count: 1 },
                DailyCount { date: date(2024, 1, 2), count: 1 },
            ],
        );
    }
}
