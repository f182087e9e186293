//! HTML builders for marker popups.
//!
//! Popups are plain HTML strings handed to the Leaflet glue. Missing fields
//! get `Unknown <Field>` placeholders, field values are escaped, and a URL
//! is only rendered as a link when it parses as an absolute URL. The popup
//! buttons dispatch back into Rust through the `window.__em*` callbacks.

use evm_model::{valid_absolute_url, EventFeature, ProximityResult};
use std::fmt::Write as _;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Popup for one event marker. `index` is the marker's position in the
/// rendered collection and is what the Zoom/Details buttons report back.
pub fn event_popup_html(feature: &EventFeature, index: usize) -> String {
    let properties = &feature.properties;
    let mut html = String::from(r#"<div class="em-event-popup">"#);
    let _ = write!(
        html,
        "<h6>{}, {}</h6>",
        escape_html(properties.display_name()),
        escape_html(properties.display_city())
    );
    html.push_str(r#"<div class="em-popup-info">"#);
    let _ = write!(html, "<span>Venue: {}</span>", escape_html(properties.display_venue()));
    let _ = write!(
        html,
        "<span>Country: {}</span>",
        escape_html(properties.display_country())
    );
    if let Some(date) = properties.start_date.as_deref().filter(|d| !d.is_empty()) {
        let _ = write!(html, "<span>Date: {}</span>", escape_html(date));
    }
    if let Some(area) = properties.area_km2 {
        let _ = write!(html, "<span>Area: {area} km&sup2;</span>");
    }
    if let Some((lat, lng)) = feature.lat_lng() {
        let _ = write!(html, "<span>{lat:.6}, {lng:.6}</span>");
    }
    if let Some(url) = properties.url.as_deref().filter(|u| valid_absolute_url(u)) {
        let _ = write!(
            html,
            r#"<div class="em-popup-link"><a href="{}" target="_blank">Click Here to view</a></div>"#,
            escape_html(url)
        );
    }
    html.push_str("</div>");
    let _ = write!(
        html,
        r#"<div class="em-popup-buttons"><button onclick="window.__emZoomEvent({index})">Zoom</button> <button onclick="window.__emShowDetails({index})">Details</button></div>"#
    );
    html.push_str("</div>");
    html
}

/// Popup for the red proximity search pin.
pub fn search_point_popup_html(lat: f64, lng: f64) -> String {
    format!("<strong>Search Point</strong><br>Lat: {lat:.6}<br>Lng: {lng:.6}")
}

/// Popup for one numbered proximity result marker.
pub fn proximity_popup_html(result: &ProximityResult) -> String {
    let mut html = String::from(r#"<div class="em-event-popup em-proximity-result">"#);
    let _ = write!(html, "<h6>#{} {}</h6>", result.rank, escape_html(&result.name));
    if let Some(country) = result.country.as_deref() {
        let _ = write!(html, "<p><strong>Country:</strong> {}</p>", escape_html(country));
    }
    if let Some(population) = result.population {
        let _ = write!(
            html,
            "<p><strong>Population:</strong> {}</p>",
            format_thousands(population)
        );
    }
    let _ = write!(
        html,
        "<p><strong>Distance:</strong> {} km ({} mi)</p>",
        result.distance_km, result.distance_miles
    );
    if let Some(year) = result.founded_year {
        let _ = write!(html, "<p><strong>Founded:</strong> {year}</p>");
    }
    if let Some(description) = result.description.as_deref() {
        let _ = write!(html, "<p><em>{}</em></p>", escape_html(description));
    }
    let _ = write!(
        html,
        r#"<button onclick="window.__emProximityZoom({}, {})">Zoom Here</button>"#,
        result.coordinates.lat, result.coordinates.lng
    );
    html.push_str("</div>");
    html
}

/// Group digits in threes, `toLocaleString`-style.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, ch) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use evm_model::{EventFeature, EventProperties, SearchPoint};

    fn feature_with(properties: EventProperties) -> EventFeature {
        EventFeature::point(-6.26, 53.35, properties)
    }

    #[test]
    fn missing_fields_get_placeholders() {
        let html = event_popup_html(&feature_with(EventProperties::default()), 0);
        assert!(html.contains("Unknown Event"));
        assert!(html.contains("Unknown City"));
        assert!(html.contains("Venue: Unknown Venue"));
        assert!(html.contains("Country: Unknown Country"));
        assert!(!html.contains("Date:"));
        assert!(!html.contains("<a href"));
    }

    #[test]
    fn field_values_are_escaped() {
        let html = event_popup_html(
            &feature_with(EventProperties {
                name: Some("<script>alert(1)</script>".to_owned()),
                ..Default::default()
            }),
            0,
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn coordinates_use_six_decimals() {
        let html = event_popup_html(&feature_with(EventProperties::default()), 0);
        assert!(html.contains("53.350000, -6.260000"));
    }

    #[test]
    fn url_is_linked_only_when_absolute() {
        let valid = event_popup_html(
            &feature_with(EventProperties {
                url: Some("https://example.com/fest".to_owned()),
                ..Default::default()
            }),
            0,
        );
        assert!(valid.contains(r#"href="https://example.com/fest""#));

        let invalid = event_popup_html(
            &feature_with(EventProperties {
                url: Some("not a url".to_owned()),
                ..Default::default()
            }),
            0,
        );
        assert!(!invalid.contains("<a href"));
    }

    #[test]
    fn buttons_carry_the_marker_index() {
        let html = event_popup_html(&feature_with(EventProperties::default()), 7);
        assert!(html.contains("window.__emZoomEvent(7)"));
        assert!(html.contains("window.__emShowDetails(7)"));
    }

    #[test]
    fn search_point_popup_has_six_decimal_coordinates() {
        let html = search_point_popup_html(53.3498, -6.2603);
        assert!(html.contains("Lat: 53.349800"));
        assert!(html.contains("Lng: -6.260300"));
    }

    #[test]
    fn proximity_popup_skips_absent_optionals() {
        let result = ProximityResult {
            rank: 2,
            name: "Bray".to_owned(),
            coordinates: SearchPoint { lat: 53.2, lng: -6.1 },
            distance_km: 20.1,
            distance_miles: 12.5,
            country: None,
            population: Some(1_200_000),
            founded_year: None,
            description: None,
            city: None,
            venue: None,
            start_date: None,
        };
        let html = proximity_popup_html(&result);
        assert!(html.contains("#2 Bray"));
        assert!(html.contains("1,200,000"));
        assert!(html.contains("20.1 km (12.5 mi)"));
        assert!(!html.contains("Country:"));
        assert!(!html.contains("Founded:"));
        assert!(html.contains("window.__emProximityZoom(53.2, -6.1)"));
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }
}
