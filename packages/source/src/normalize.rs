//! Normalization of raw GeoJSON features into flat earthquake records.
//!
//! The provider payload is a `FeatureCollection`; each feature carries its
//! magnitude, epoch-milliseconds timestamp, and place under `properties`,
//! and its position under `geometry.coordinates` as `[longitude, latitude,
//! depth]`. Every feature yields a record. A field the provider omitted or
//! nulled stays absent rather than turning into a sentinel value.

use quake_watch_models::EarthquakeRecord;

/// Flattens a raw provider payload into one record per feature.
///
/// A payload with no `features` member, or one that is not an array,
/// produces an empty list.
#[must_use]
pub fn normalize(raw: &serde_json::Value) -> Vec<EarthquakeRecord> {
    raw.get("features")
        .and_then(serde_json::Value::as_array)
        .map(|features| features.iter().map(normalize_feature).collect())
        .unwrap_or_default()
}

fn normalize_feature(feature: &serde_json::Value) -> EarthquakeRecord {
    let properties = feature.get("properties");

    let time = properties
        .and_then(|x| x.get("time"))
        .and_then(serde_json::Value::as_i64)
        .and_then(chrono::DateTime::from_timestamp_millis);

    if time.is_none() {
        log::warn!("feature has no usable time: {feature}");
    }

    let coordinates = feature
        .get("geometry")
        .and_then(|x| x.get("coordinates"))
        .and_then(serde_json::Value::as_array)
        .map(Vec::as_slice);

    EarthquakeRecord {
        time,
        latitude: coordinate_at(coordinates, 1),
        longitude: coordinate_at(coordinates, 0),
        depth_km: coordinate_at(coordinates, 2),
        magnitude: properties
            .and_then(|x| x.get("mag"))
            .and_then(serde_json::Value::as_f64),
        place: properties
            .and_then(|x| x.get("place"))
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned),
    }
}

fn coordinate_at(coordinates: Option<&[serde_json::Value]>, index: usize) -> Option<f64> {
    coordinates
        .and_then(|x| x.get(index))
        .and_then(serde_json::Value::as_f64)
}
