//! Results card for the nearest-neighbor query.

use crate::actions;
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use evm_model::ProximityResult;

/// Fixed card listing ranked neighbors of the last proximity click.
/// Clicking a row recenters the map on that result's marker.
#[component]
pub fn ProximityPanel() -> Element {
    let mut state = use_context::<AppState>();
    let Some(response) = (state.nearest)() else {
        return rsx! {};
    };

    let point = response.search_point;
    let total = response.total_found;

    rsx! {
        div {
            id: "proximity-results",
            style: "position: fixed; bottom: 20px; left: 20px; z-index: 9000; background: white; border: 1px solid #E0E0E0; border-radius: 4px; padding: 12px 16px; width: 320px; max-height: 50vh; overflow-y: auto; box-shadow: 0 2px 8px rgba(0, 0, 0, 0.15);",
            div {
                style: "display: flex; justify-content: space-between; align-items: baseline;",
                h6 { style: "margin: 0 0 8px 0;", "Nearest Events" }
                button {
                    onclick: move |_| actions::clear_proximity(state),
                    "Close"
                }
            }
            div {
                style: "color: #616161; font-size: 13px; margin-bottom: 8px;",
                div { {format!("Search Point: {:.4}, {:.4}", point.lat, point.lng)} }
                div { "Found: {total}" }
            }
            for result in response.nearest_events {
                {
                    let heading = result_heading(&result);
                    let detail = result_detail(&result);
                    let (lat, lng) = (result.coordinates.lat, result.coordinates.lng);
                    rsx! {
                        div {
                            key: "{result.rank}",
                            style: "padding: 6px 4px; border-top: 1px solid #EEEEEE; cursor: pointer;",
                            onclick: move |_| js_bridge::set_view(lat, lng, 12),
                            div { style: "font-weight: bold;", "{heading}" }
                            div { style: "color: #616161; font-size: 13px;", "{detail}" }
                        }
                    }
                }
            }
        }
    }
}

/// "#rank name" plus any city/venue the endpoint included.
fn result_heading(result: &ProximityResult) -> String {
    let mut parts = vec![format!("#{} {}", result.rank, result.name)];
    if let Some(city) = result.city.as_deref().filter(|c| !c.is_empty()) {
        parts.push(city.to_string());
    }
    if let Some(venue) = result.venue.as_deref().filter(|v| !v.is_empty()) {
        parts.push(venue.to_string());
    }
    parts.join(", ")
}

/// Distance line, with the start date when the endpoint reports one.
fn result_detail(result: &ProximityResult) -> String {
    let mut detail = format!("{} km away", result.distance_km);
    if let Some(date) = result.start_date.as_deref().filter(|d| !d.is_empty()) {
        detail.push_str(&format!(" - Date: {date}"));
    }
    detail
}

#[cfg(test)]
mod tests {
    use super::*;
    use evm_model::SearchPoint;

    fn result() -> ProximityResult {
        ProximityResult {
            rank: 2,
            name: "Summer Fair".to_string(),
            coordinates: SearchPoint { lat: 53.3, lng: -6.2 },
            distance_km: 4.8,
            distance_miles: 2.98,
            country: None,
            population: None,
            founded_year: None,
            description: None,
            city: None,
            venue: None,
            start_date: None,
        }
    }

    #[test]
    fn heading_includes_rank_and_optional_parts() {
        let mut r = result();
        assert_eq!(result_heading(&r), "#2 Summer Fair");
        r.city = Some("Dublin".to_string());
        r.venue = Some("RDS".to_string());
        assert_eq!(result_heading(&r), "#2 Summer Fair, Dublin, RDS");
    }

    #[test]
    fn heading_skips_empty_strings() {
        let mut r = result();
        r.city = Some(String::new());
        assert_eq!(result_heading(&r), "#2 Summer Fair");
    }

    #[test]
    fn detail_appends_date_when_present() {
        let mut r = result();
        assert_eq!(result_detail(&r), "4.8 km away");
        r.start_date = Some("2026-06-01".to_string());
        assert_eq!(result_detail(&r), "4.8 km away - Date: 2026-06-01");
    }
}
