//! The canonical in-memory representation of one event record.
//!
//! Records arrive from the backend in several shapes (see
//! [`crate::normalize`]); all of them end up as an [`EventFeature`], which
//! mirrors a GeoJSON Feature: a point geometry in `[longitude, latitude]`
//! order plus a property bag of display fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Backend-assigned identifier.
///
/// The REST list endpoint returns integer ids while other serializers have
/// been seen emitting strings, so both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventId::Int(n) => write!(f, "{n}"),
            EventId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Display fields of one event record.
///
/// Any field may be absent in a malformed record; the popup and panel
/// builders substitute `Unknown <Field>` placeholders rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventProperties {
    #[serde(default)]
    pub id: Option<EventId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub area_km2: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Flat (non-GeoJSON) records carry coordinates inline. Kept as raw
    /// JSON values because the backend sometimes sends them as strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<Value>,
}

impl EventProperties {
    pub fn display_name(&self) -> &str {
        non_empty(&self.name).unwrap_or("Unknown Event")
    }

    pub fn display_venue(&self) -> &str {
        non_empty(&self.venue).unwrap_or("Unknown Venue")
    }

    pub fn display_city(&self) -> &str {
        non_empty(&self.city).unwrap_or("Unknown City")
    }

    pub fn display_country(&self) -> &str {
        non_empty(&self.country).unwrap_or("Unknown Country")
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// GeoJSON point geometry. Coordinates are `[longitude, latitude]`.
///
/// Length and range are deliberately not checked here; geometrically
/// invalid records survive normalization and are dropped at render time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

impl PointGeometry {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: "Point".to_owned(),
            coordinates: vec![longitude, latitude],
        }
    }
}

/// One event record wrapped with its geometry, mirroring a GeoJSON Feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventFeature {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub geometry: Option<PointGeometry>,
    #[serde(default)]
    pub properties: EventProperties,
}

/// The normalized form backing all rendering and search. Replaced wholesale
/// on every successful load or search, never mutated in place.
pub type EventCollection = Vec<EventFeature>;

impl EventFeature {
    /// Build a feature from a flat record's coerced coordinates.
    pub fn point(longitude: f64, latitude: f64, properties: EventProperties) -> Self {
        Self {
            kind: "Feature".to_owned(),
            geometry: Some(PointGeometry::new(longitude, latitude)),
            properties,
        }
    }

    /// Validated `(lat, lng)`, or `None` when the geometry is missing,
    /// malformed, non-finite, or out of range.
    pub fn lat_lng(&self) -> Option<(f64, f64)> {
        let geometry = self.geometry.as_ref()?;
        if geometry.coordinates.len() != 2 {
            return None;
        }
        let (lng, lat) = (geometry.coordinates[0], geometry.coordinates[1]);
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return None;
        }
        Some((lat, lng))
    }
}

/// `parseFloat`-style coercion for inline coordinate values.
///
/// Missing and empty values default to 0 (matching the backend clients this
/// replaces); present but non-numeric values become NaN so the render
/// filter excludes them.
pub fn coerce_coordinate(value: Option<&Value>) -> f64 {
    match value {
        None | Some(Value::Null) => 0.0,
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse().unwrap_or(f64::NAN)
            }
        }
        Some(_) => f64::NAN,
    }
}

/// Render-time filter: keeps features with a valid point geometry and logs
/// each drop. The count reported after a load may therefore exceed the
/// number of markers actually drawn.
pub fn renderable(collection: &[EventFeature]) -> Vec<&EventFeature> {
    collection
        .iter()
        .filter(|feature| {
            if feature.lat_lng().is_some() {
                true
            } else {
                log::warn!(
                    "Invalid coordinates for event: {}",
                    feature.properties.display_name()
                );
                false
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature(lng: f64, lat: f64) -> EventFeature {
        EventFeature::point(lng, lat, EventProperties::default())
    }

    #[test]
    fn lat_lng_accepts_in_range_coordinates() {
        assert_eq!(feature(-6.26, 53.35).lat_lng(), Some((53.35, -6.26)));
    }

    #[test]
    fn lat_lng_rejects_out_of_range_latitude() {
        assert_eq!(feature(0.0, 91.0).lat_lng(), None);
    }

    #[test]
    fn lat_lng_rejects_out_of_range_longitude() {
        assert_eq!(feature(200.0, 45.0).lat_lng(), None);
    }

    #[test]
    fn lat_lng_rejects_nan_and_missing_geometry() {
        assert_eq!(feature(f64::NAN, 10.0).lat_lng(), None);
        let no_geometry = EventFeature::default();
        assert_eq!(no_geometry.lat_lng(), None);
    }

    #[test]
    fn lat_lng_rejects_wrong_arity() {
        let mut f = feature(1.0, 2.0);
        f.geometry.as_mut().unwrap().coordinates.push(3.0);
        assert_eq!(f.lat_lng(), None);
    }

    #[test]
    fn renderable_drops_invalid_but_keeps_them_loaded() {
        let collection = vec![feature(-6.26, 53.35), feature(0.0, 91.0), feature(200.0, 45.0)];
        assert_eq!(collection.len(), 3, "all records count as loaded");
        let drawn = renderable(&collection);
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].lat_lng(), Some((53.35, -6.26)));
    }

    #[test]
    fn display_helpers_substitute_placeholders() {
        let props = EventProperties {
            name: Some(String::new()),
            city: Some("Dublin".to_owned()),
            ..Default::default()
        };
        assert_eq!(props.display_name(), "Unknown Event");
        assert_eq!(props.display_venue(), "Unknown Venue");
        assert_eq!(props.display_city(), "Dublin");
        assert_eq!(props.display_country(), "Unknown Country");
    }

    #[test]
    fn coerce_coordinate_handles_numbers_strings_and_junk() {
        assert_eq!(coerce_coordinate(Some(&json!(12.5))), 12.5);
        assert_eq!(coerce_coordinate(Some(&json!("-7.25"))), -7.25);
        assert_eq!(coerce_coordinate(None), 0.0);
        assert_eq!(coerce_coordinate(Some(&json!(null))), 0.0);
        assert_eq!(coerce_coordinate(Some(&json!(""))), 0.0);
        assert!(coerce_coordinate(Some(&json!("north"))).is_nan());
        assert!(coerce_coordinate(Some(&json!({"x": 1}))).is_nan());
    }

    #[test]
    fn event_id_accepts_integers_and_strings() {
        let int: EventId = serde_json::from_value(json!(7)).unwrap();
        let text: EventId = serde_json::from_value(json!("abc-1")).unwrap();
        assert_eq!(int, EventId::Int(7));
        assert_eq!(text, EventId::Text("abc-1".to_owned()));
        assert_eq!(int.to_string(), "7");
    }
}
