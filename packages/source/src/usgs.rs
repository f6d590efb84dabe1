//! USGS FDSN event service client.
//!
//! One endpoint, one GET per query. The service speaks `GeoJSON` when
//! asked with `format=geojson`; the body comes back as loosely-typed JSON
//! and is handed to [`crate::normalize`] untouched.

use std::time::Duration;

use quake_watch_models::QueryDescriptor;

use crate::SourceError;

const USGS_API_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";
const USER_AGENT: &str = "quake-watch/0.1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Renders the full request URL for a descriptor.
///
/// Dates are truncated to `YYYY-MM-DD`; the service interprets a bare date
/// as midnight UTC, which matches how the descriptors are built.
#[must_use]
pub fn request_url(descriptor: &QueryDescriptor) -> String {
    request_url_for(USGS_API_URL, descriptor)
}

fn request_url_for(endpoint: &str, descriptor: &QueryDescriptor) -> String {
    format!(
        "{endpoint}?format=geojson\
        &starttime={start}\
        &endtime={end}\
        &minmagnitude={min_mag}\
        &maxmagnitude={max_mag}\
        &minlatitude={min_lat}\
        &maxlatitude={max_lat}\
        &minlongitude={min_lon}\
        &maxlongitude={max_lon}",
        start = descriptor.start_time.format("%Y-%m-%d"),
        end = descriptor.end_time.format("%Y-%m-%d"),
        min_mag = descriptor.min_magnitude,
        max_mag = descriptor.max_magnitude,
        min_lat = descriptor.bounds.min_latitude,
        max_lat = descriptor.bounds.max_latitude,
        min_lon = descriptor.bounds.min_longitude,
        max_lon = descriptor.bounds.max_longitude,
    )
}

/// Fetches the raw `GeoJSON` payload for a descriptor from the USGS event
/// service.
///
/// # Errors
///
/// Returns [`SourceError::Http`] on transport or decode failures and
/// [`SourceError::Provider`] when the service answers with a non-success
/// status.
pub async fn fetch(descriptor: &QueryDescriptor) -> Result<serde_json::Value, SourceError> {
    fetch_from(USGS_API_URL, descriptor).await
}

async fn fetch_from(
    endpoint: &str,
    descriptor: &QueryDescriptor,
) -> Result<serde_json::Value, SourceError> {
    let url = request_url_for(endpoint, descriptor);
    log::info!("querying {url}");

    let client = build_client()?;
    let response = client.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("(no body)"));
        return Err(SourceError::Provider { status, body });
    }

    response.json::<serde_json::Value>().await.map_err(Into::into)
}

fn build_client() -> Result<reqwest::Client, SourceError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(Into::into)
}
