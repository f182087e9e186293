//! Backend endpoint paths.
//!
//! The primary events path is deliberately relative (it resolves under the
//! page the widget is served from); the rest are rooted.

/// Primary event list: GeoJSON FeatureCollection.
pub const EVENTS_GEOJSON: &str = "api/geojson/";

/// Secondary event list (also the creation endpoint): flat array or
/// paginated `{results}` envelope.
pub const EVENTS: &str = "/api/events/";

/// Server-side text search; takes a `q` query parameter.
pub const SEARCH: &str = "/api/search/";

/// Nearest-neighbor ranking; POST `{lat, lng}`.
pub const NEAREST: &str = "/api/nearest/";
