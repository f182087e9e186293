//! Nearest-neighbor query result types.
//!
//! The ranking itself happens server-side; these types only mirror the
//! response of the nearest-neighbor endpoint. A result set lives exactly
//! as long as one proximity query: it is discarded when proximity mode is
//! cleared or a new query runs.

use serde::{Deserialize, Serialize};

/// The clicked query point, echoed back by the ranking endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchPoint {
    pub lat: f64,
    pub lng: f64,
}

/// One ranked neighbor.
///
/// Only rank, name, coordinates and the two distances are guaranteed; the
/// endpoint's remaining fields vary by record kind and are all optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProximityResult {
    /// 1-based rank, embedded as the marker's display number.
    pub rank: u32,
    #[serde(default)]
    pub name: String,
    pub coordinates: SearchPoint,
    pub distance_km: f64,
    pub distance_miles: f64,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub founded_year: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
}

/// Full response of the nearest-neighbor endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestResponse {
    pub search_point: SearchPoint,
    pub total_found: u32,
    pub nearest_events: Vec<ProximityResult>,
}

impl NearestResponse {
    /// Every point a result display places on the map — the search point
    /// plus all ranked neighbors — as `(lat, lng)` pairs for bounds fitting.
    pub fn all_points(&self) -> Vec<(f64, f64)> {
        std::iter::once((self.search_point.lat, self.search_point.lng))
            .chain(
                self.nearest_events
                    .iter()
                    .map(|result| (result.coordinates.lat, result.coordinates.lng)),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::{bounds_of, FIT_PADDING};
    use serde_json::json;

    fn sample_response() -> NearestResponse {
        serde_json::from_value(json!({
            "search_point": {"lat": 53.35, "lng": -6.26},
            "total_found": 2,
            "nearest_events": [
                {
                    "rank": 1,
                    "name": "Dublin",
                    "country": "Ireland",
                    "population": 1_200_000,
                    "coordinates": {"lat": 53.34, "lng": -6.27},
                    "distance_km": 1.2,
                    "distance_miles": 0.75,
                },
                {
                    "rank": 2,
                    "name": "Bray",
                    "coordinates": {"lat": 53.20, "lng": -6.10},
                    "distance_km": 20.1,
                    "distance_miles": 12.5,
                    "founded_year": 1171,
                },
            ],
        }))
        .unwrap()
    }

    #[test]
    fn response_deserializes_with_optional_fields_missing() {
        let response = sample_response();
        assert_eq!(response.total_found, 2);
        assert_eq!(response.nearest_events[0].rank, 1);
        assert_eq!(response.nearest_events[0].population, Some(1_200_000));
        assert_eq!(response.nearest_events[1].country, None);
        assert_eq!(response.nearest_events[1].founded_year, Some(1171));
    }

    #[test]
    fn all_points_includes_search_point_and_every_result() {
        let response = sample_response();
        let points = response.all_points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], (53.35, -6.26));
    }

    #[test]
    fn fit_bounds_cover_search_point_and_results_with_padding() {
        let response = sample_response();
        let bounds = bounds_of(&response.all_points()).unwrap().padded(FIT_PADDING);
        for (lat, lng) in response.all_points() {
            assert!(bounds.contains(lat, lng));
        }
    }
}
