//! Guided prompts for fetching and summarizing earthquake data.
//!
//! Mirrors the `fetch` and `daily` subcommands without requiring any
//! flags: pick a time window, set the magnitude range, and optionally
//! write both CSV exports.

use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};
use quake_watch_models::{DEFAULT_MAX_MAGNITUDE, DEFAULT_MIN_MAGNITUDE, TimeFilter};

/// Runs the prompt flow: filter selection, fetch, tables, optional CSV
/// export.
///
/// # Errors
///
/// Returns an error if a prompt is aborted, the fetch fails, or a CSV
/// file cannot be written.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let labels: Vec<&str> = TimeFilter::ALL.iter().copied().map(TimeFilter::label).collect();

    let idx = Select::new()
        .with_prompt("Time window")
        .items(&labels)
        .default(0)
        .interact()?;
    let filter = TimeFilter::ALL[idx];

    let (custom_start, custom_end) = if matches!(filter, TimeFilter::CustomRange) {
        (
            Some(prompt_date("Start date (YYYY-MM-DD)")?),
            Some(prompt_date("End date (YYYY-MM-DD)")?),
        )
    } else {
        (None, None)
    };

    let min_magnitude = prompt_magnitude("Minimum magnitude", DEFAULT_MIN_MAGNITUDE)?;
    let max_magnitude = prompt_magnitude("Maximum magnitude", DEFAULT_MAX_MAGNITUDE)?;

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

    crate::print_records(&records);

    let counts = quake_watch_analytics::aggregate_daily(&records);
    println!();
    crate::print_daily(&counts);

    let export = Confirm::new()
        .with_prompt("Write CSV exports?")
        .default(false)
        .interact()?;

    if export {
        let records_path: String = Input::new()
            .with_prompt("Records file")
            .default("earthquake_data.csv".to_string())
            .interact_text()?;
        crate::write_records(&records_path, &records)?;

        let counts_path: String = Input::new()
            .with_prompt("Daily counts file")
            .default("earthquake_data_count.csv".to_string())
            .interact_text()?;
        crate::write_daily(&counts_path, &counts)?;
    }

    Ok(())
}

/// Prompts for a calendar date; rejects anything that does not parse as
/// `YYYY-MM-DD`.
fn prompt_date(prompt: &str) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(crate::parse_date(input.trim())?)
}

/// Prompts for a magnitude; malformed input falls back to the default.
fn prompt_magnitude(prompt: &str, default: f64) -> Result<f64, Box<dyn std::error::Error>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    Ok(input.trim().parse().unwrap_or(default))
}
