#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the quake watch toolchain.
//!
//! Fetches recent earthquake activity for the Ethiopian region from the
//! USGS event service, prints it as tables, and optionally exports CSV
//! files. Run without a subcommand for guided prompts.

mod interactive;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use quake_watch_models::{
    DEFAULT_MAX_MAGNITUDE, DEFAULT_MIN_MAGNITUDE, DailyCount, EarthquakeRecord, TimeFilter,
};

#[derive(Parser)]
#[command(name = "quake_watch_cli", about = "Ethiopian earthquake data tool")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch earthquake records and print them as a table
    Fetch {
        /// Time window: `last-24-hours`, `past-7-days`, `past-30-days`, or
        /// `custom-range`
        #[arg(long, default_value = "last-24-hours")]
        window: String,
        /// Range start date (YYYY-MM-DD), required with `--window custom-range`
        #[arg(long)]
        start: Option<String>,
        /// Range end date (YYYY-MM-DD), required with `--window custom-range`
        #[arg(long)]
        end: Option<String>,
        /// Only include events at or above this magnitude
        #[arg(long, default_value_t = DEFAULT_MIN_MAGNITUDE)]
        min_magnitude: f64,
        /// Only include events at or below this magnitude
        #[arg(long, default_value_t = DEFAULT_MAX_MAGNITUDE)]
        max_magnitude: f64,
        /// Also write the records to this CSV file
        #[arg(long)]
        output: Option<String>,
    },
    /// Fetch earthquake records and print per-day event counts
    Daily {
        /// Time window: `last-24-hours`, `past-7-days`, `past-30-days`, or
        /// `custom-range`
        #[arg(long, default_value = "last-24-hours")]
        window: String,
        /// Range start date (YYYY-MM-DD), required with `--window custom-range`
        #[arg(long)]
        start: Option<String>,
        /// Range end date (YYYY-MM-DD), required with `--window custom-range`
        #[arg(long)]
        end: Option<String>,
        /// Only include events at or above this magnitude
        #[arg(long, default_value_t = DEFAULT_MIN_MAGNITUDE)]
        min_magnitude: f64,
        /// Only include events at or below this magnitude
        #[arg(long, default_value_t = DEFAULT_MAX_MAGNITUDE)]
        max_magnitude: f64,
        /// Also write the daily counts to this CSV file
        #[arg(long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return interactive::run().await;
    };

    match command {
        Commands::Fetch {
            window,
            start,
            end,
            min_magnitude,
            max_magnitude,
            output,
        } => {
            let (filter, custom_start, custom_end) =
                parse_filter(&window, start.as_deref(), end.as_deref())?;
            let records = quake_watch_source::fetch_and_normalize(
                filter,
                custom_start,
                custom_end,
                min_magnitude,
                max_magnitude,
            )
            .await?;

            if records.is_empty() {
                println!("No earthquake data is available for the selected filters.");
                return Ok(());
            }

            print_records(&records);

            if let Some(path) = output {
                write_records(&path, &records)?;
            }
        }
        Commands::Daily {
            window,
            start,
            end,
            min_magnitude,
            max_magnitude,
            output,
        } => {
            let (filter, custom_start, custom_end) =
                parse_filter(&window, start.as_deref(), end.as_deref())?;
            let records = quake_watch_source::fetch_and_normalize(
                filter,
                custom_start,
                custom_end,
                min_magnitude,
                max_magnitude,
            )
            .await?;
            let counts = quake_watch_analytics::aggregate_daily(&records);

            if counts.is_empty() {
                println!("No earthquake data is available for the selected filters.");
                return Ok(());
            }

            print_daily(&counts);

            if let Some(path) = output {
                write_daily(&path, &counts)?;
            }
        }
    }

    Ok(())
}

/// Resolves the `--window`/`--start`/`--end` arguments into a filter and
/// its optional custom bounds.
fn parse_filter(
    window: &str,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(TimeFilter, Option<NaiveDate>, Option<NaiveDate>), Box<dyn std::error::Error>> {
    let filter = window.parse::<TimeFilter>().map_err(|_| {
        let expected: Vec<String> = TimeFilter::ALL.iter().map(ToString::to_string).collect();
        format!("unknown window '{window}' (expected one of: {})", expected.join(", "))
    })?;
    let custom_start = start.map(parse_date).transpose()?;
    let custom_end = end.map(parse_date).transpose()?;
    Ok((filter, custom_start, custom_end))
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    value
        .parse::<NaiveDate>()
        .map_err(|e| format!("invalid date '{value}' (expected YYYY-MM-DD): {e}"))
}

/// Prints the record listing as an aligned table.
fn print_records(records: &[EarthquakeRecord]) {
    println!(
        "{:<24} {:>9} {:>10} {:>7} {:>5} LOCATION",
        "TIME", "LATITUDE", "LONGITUDE", "DEPTH", "MAG"
    );
    println!("{}", "-".repeat(80));
    for record in records {
        println!(
            "{:<24} {:>9} {:>10} {:>7} {:>5} {}",
            record.display_time().unwrap_or_default(),
            number_cell(record.latitude),
            number_cell(record.longitude),
            number_cell(record.depth_km),
            number_cell(record.magnitude),
            record.place.as_deref().unwrap_or(""),
        );
    }
    println!();
    println!("{} earthquake(s)", records.len());
}

/// Prints the per-day counts as an aligned table.
fn print_daily(counts: &[DailyCount]) {
    println!("{:<12} COUNT", "DATE");
    println!("{}", "-".repeat(20));
    for entry in counts {
        let date = entry.date.to_string();
        println!("{date:<12} {}", entry.count);
    }
}

fn number_cell(value: Option<f64>) -> String {
    value.map(|x| x.to_string()).unwrap_or_default()
}

fn write_records(
    path: &str,
    records: &[EarthquakeRecord],
) -> Result<(), Box<dyn std::error::Error>> {
    let file = std::fs::File::create(path)?;
    quake_watch_export::write_records_csv(file, records)?;
    log::info!("Wrote {} record(s) to {path}", records.len());
    Ok(())
}

fn write_daily(path: &str, counts: &[DailyCount]) -> Result<(), Box<dyn std::error::Error>> {
    let file = std::fs::File::create(path)?;
    quake_watch_export::write_daily_counts_csv(file, counts)?;
    log::info!("Wrote {} day(s) to {path}", counts.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_window_and_custom_bounds() {
        let (filter, start, end) =
            parse_filter("custom-range", Some("2024-01-01"), Some("2024-02-01")).unwrap();

        assert_eq!(filter, TimeFilter::CustomRange);
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 2, 1));
    }

    #[test]
    fn unknown_window_names_the_accepted_values() {
        let error = parse_filter("next-week", None, None).unwrap_err();

        assert_eq!(
            error.to_string(),
            "unknown window 'next-week' (expected one of: last-24-hours, past-7-days, \
            past-30-days, custom-range)"
        );
    }

    #[test]
    fn malformed_date_reports_the_expected_shape() {
        let error = parse_date("01/15/2024").unwrap_err();

        assert!(error.starts_with("invalid date '01/15/2024'"));
    }
}
