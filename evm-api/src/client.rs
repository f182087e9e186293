//! Typed calls for the five backend endpoints.

use crate::csrf;
use crate::endpoints;
use crate::error::ApiError;
use crate::http;
use evm_model::{normalize, EventCollection, NearestResponse, NewEvent};
use serde_json::{json, Value};

/// Fetch the full event collection.
///
/// Tries the GeoJSON endpoint first; any transport, HTTP, or shape failure
/// there falls through to the paginated endpoint. The fallback is one level
/// deep — its failure is the caller's to surface.
pub async fn load_all() -> Result<EventCollection, ApiError> {
    match load_from(endpoints::EVENTS_GEOJSON).await {
        Ok(collection) => Ok(collection),
        Err(error) => {
            log::warn!("primary events endpoint failed ({error}), trying fallback");
            load_from(endpoints::EVENTS).await
        }
    }
}

async fn load_from(url: &str) -> Result<EventCollection, ApiError> {
    let body = http::get_json(url).await?;
    let collection = normalize(&body)?;
    log::info!("loaded {} events from {url}", collection.len());
    Ok(collection)
}

/// Server-side text search.
///
/// An unrecognized response shape is an error here so the caller can fall
/// back to filtering the last loaded collection client-side.
pub async fn search(query: &str) -> Result<EventCollection, ApiError> {
    let encoded = String::from(js_sys::encode_uri_component(query));
    let url = format!("{}?q={}", endpoints::SEARCH, encoded);
    let body = http::get_json(&url).await?;
    Ok(normalize(&body)?)
}

/// POST a validated record to the creation endpoint.
///
/// Returns the created record as raw JSON; callers re-load the full
/// collection rather than appending locally.
pub async fn create_event(record: &NewEvent) -> Result<Value, ApiError> {
    let body = serde_json::to_value(record).map_err(|err| ApiError::Parse(err.to_string()))?;
    http::post_json(endpoints::EVENTS, &body, &csrf::csrf_token()).await
}

/// Ask the ranking endpoint for the nearest events to a clicked point.
pub async fn find_nearest(lat: f64, lng: f64) -> Result<NearestResponse, ApiError> {
    let body = json!({ "lat": lat, "lng": lng });
    let value = http::post_json(endpoints::NEAREST, &body, &csrf::csrf_token()).await?;
    serde_json::from_value(value).map_err(|err| ApiError::Parse(err.to_string()))
}
