//! Response-shape normalization.
//!
//! The events backend can answer with a GeoJSON FeatureCollection, a bare
//! array of flat records, or a paginated `{"results": [...]}` envelope.
//! The shape is resolved exactly once here as a tagged union; everything
//! downstream only ever sees an [`EventCollection`].
//!
//! Coordinate values are coerced numerically but never range-checked at
//! this stage — geometrically invalid records stay in the collection until
//! the render filter drops them.

use crate::error::NormalizeError;
use crate::event::{coerce_coordinate, EventCollection, EventFeature, EventProperties};
use serde_json::Value;

/// The three recognized response shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum RawEvents {
    /// `{"features": [...]}` — already canonical.
    FeatureCollection(Vec<Value>),
    /// Bare array of flat event objects.
    Flat(Vec<Value>),
    /// Paginated `{"results": [...]}` envelope.
    Paginated(Vec<Value>),
}

/// Classify a parsed response body, or report why it cannot be used.
///
/// An explicit `{"error": ...}` field is a hard failure for the current
/// endpoint, distinct from an unrecognized shape only in its message.
pub fn classify(value: &Value) -> Result<RawEvents, NormalizeError> {
    if let Some(object) = value.as_object() {
        if let Some(error) = object.get("error") {
            let message = error
                .as_str()
                .map(str::to_owned)
                .unwrap_or_else(|| error.to_string());
            return Err(NormalizeError::Api(message));
        }
        if let Some(features) = object.get("features").and_then(Value::as_array) {
            return Ok(RawEvents::FeatureCollection(features.clone()));
        }
        if let Some(results) = object.get("results").and_then(Value::as_array) {
            return Ok(RawEvents::Paginated(results.clone()));
        }
    }
    if let Some(items) = value.as_array() {
        return Ok(RawEvents::Flat(items.clone()));
    }
    Err(NormalizeError::UnrecognizedShape)
}

/// Normalize any accepted response body into the canonical collection.
pub fn normalize(value: &Value) -> Result<EventCollection, NormalizeError> {
    Ok(match classify(value)? {
        RawEvents::FeatureCollection(features) => {
            features.into_iter().map(feature_from_geojson).collect()
        }
        RawEvents::Flat(items) | RawEvents::Paginated(items) => {
            items.into_iter().map(feature_from_flat).collect()
        }
    })
}

/// A malformed feature degrades to an empty one (no geometry) instead of
/// failing the whole load; the render filter excludes it later.
fn feature_from_geojson(value: Value) -> EventFeature {
    serde_json::from_value(value).unwrap_or_default()
}

fn feature_from_flat(value: Value) -> EventFeature {
    let longitude = coerce_coordinate(value.get("longitude"));
    let latitude = coerce_coordinate(value.get("latitude"));
    let properties: EventProperties = serde_json::from_value(value).unwrap_or_default();
    EventFeature::point(longitude, latitude, properties)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::renderable;
    use serde_json::json;

    fn flat_record(name: &str, lat: f64, lng: f64) -> Value {
        json!({
            "id": 1,
            "name": name,
            "venue": "The Spot",
            "city": "Dublin",
            "country": "Ireland",
            "latitude": lat,
            "longitude": lng,
        })
    }

    fn geojson_record(name: &str, lat: f64, lng: f64) -> Value {
        json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [lng, lat]},
            "properties": {
                "id": 1,
                "name": name,
                "venue": "The Spot",
                "city": "Dublin",
                "country": "Ireland",
            },
        })
    }

    #[test]
    fn all_three_shapes_normalize_equivalently() {
        let geojson = json!({"type": "FeatureCollection", "features": [
            geojson_record("A", 53.3, -6.2),
            geojson_record("B", 48.8, 2.3),
        ]});
        let flat = json!([flat_record("A", 53.3, -6.2), flat_record("B", 48.8, 2.3)]);
        let paginated = json!({"count": 2, "results": [
            flat_record("A", 53.3, -6.2),
            flat_record("B", 48.8, 2.3),
        ]});

        let from_geojson = normalize(&geojson).unwrap();
        let from_flat = normalize(&flat).unwrap();
        let from_paginated = normalize(&paginated).unwrap();

        for collection in [&from_geojson, &from_flat, &from_paginated] {
            assert_eq!(collection.len(), 2);
            assert_eq!(collection[0].lat_lng(), Some((53.3, -6.2)));
            assert_eq!(collection[1].lat_lng(), Some((48.8, 2.3)));
            assert_eq!(collection[0].properties.display_name(), "A");
        }
    }

    #[test]
    fn explicit_error_field_is_a_hard_failure() {
        let body = json!({"error": "database unavailable"});
        assert_eq!(
            classify(&body),
            Err(NormalizeError::Api("database unavailable".to_owned()))
        );
    }

    #[test]
    fn unrecognized_shape_is_rejected() {
        assert_eq!(
            normalize(&json!({"status": "ok"})),
            Err(NormalizeError::UnrecognizedShape)
        );
        assert_eq!(normalize(&json!(42)), Err(NormalizeError::UnrecognizedShape));
    }

    #[test]
    fn missing_flat_coordinates_default_to_zero() {
        let body = json!([{"id": 3, "name": "No Coords"}]);
        let collection = normalize(&body).unwrap();
        assert_eq!(collection[0].lat_lng(), Some((0.0, 0.0)));
    }

    #[test]
    fn non_numeric_coordinates_survive_until_render_filtering() {
        let body = json!([
            flat_record("Good", 53.3, -6.2),
            {"id": 9, "name": "Bad", "latitude": "not-a-number", "longitude": -6.0},
        ]);
        let collection = normalize(&body).unwrap();
        assert_eq!(collection.len(), 2, "count includes the invalid record");
        assert_eq!(renderable(&collection).len(), 1);
    }

    #[test]
    fn malformed_geojson_feature_degrades_instead_of_failing() {
        let body = json!({"features": [
            geojson_record("Good", 53.3, -6.2),
            {"type": "Feature", "geometry": {"coordinates": "garbage"}},
        ]});
        let collection = normalize(&body).unwrap();
        assert_eq!(collection.len(), 2);
        assert_eq!(renderable(&collection).len(), 1);
    }

    #[test]
    fn string_coordinates_in_flat_records_are_coerced() {
        let body = json!([{"name": "S", "latitude": "53.5", "longitude": "-6.5"}]);
        let collection = normalize(&body).unwrap();
        assert_eq!(collection[0].lat_lng(), Some((53.5, -6.5)));
    }
}
