//! Detail side panel for a selected event.

use crate::actions;
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the selected record's fields with zoom-to and copy-coordinates
/// actions. Visibility is explicit show/hide state driven by the
/// `selected` signal, not re-created markup.
#[component]
pub fn EventInfoPanel() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selected)();
    let display = if selected.is_some() { "block" } else { "none" };

    let feature = selected.unwrap_or_default();
    let coordinates = feature.lat_lng();
    let title = format!(
        "{}, {}",
        feature.properties.display_name(),
        feature.properties.display_city()
    );
    let venue = feature.properties.display_venue().to_string();
    let coordinate_text = match coordinates {
        Some((lat, lng)) => format!("{lat:.6}, {lng:.6}"),
        None => "Unknown".to_string(),
    };
    let description = feature.properties.description.clone();

    rsx! {
        div {
            id: "event-info",
            style: "display: {display}; margin: 8px 0; padding: 12px 16px; background: #F5F5F5; border: 1px solid #E0E0E0; border-radius: 4px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: baseline;",
                h5 { style: "margin: 0 0 8px 0; color: #1565C0;", "{title}" }
                button {
                    id: "close-info",
                    onclick: move |_| state.selected.set(None),
                    "Close"
                }
            }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 8px;",
                div {
                    label { style: "font-weight: bold;", "Venue" }
                    div { "{venue}" }
                }
                div {
                    label { style: "font-weight: bold;", "Coordinates" }
                    div { "{coordinate_text}" }
                }
            }
            if let Some(description) = description {
                div {
                    style: "margin-top: 12px;",
                    label { style: "font-weight: bold;", "Description" }
                    div { "{description}" }
                }
            }
            div {
                style: "margin-top: 12px; display: flex; gap: 8px;",
                button {
                    onclick: move |_| {
                        if let Some((lat, lng)) = coordinates {
                            js_bridge::set_view(lat, lng, 12);
                        }
                    },
                    "Zoom to Event"
                }
                button {
                    onclick: move |_| {
                        if let Some((lat, lng)) = coordinates {
                            actions::copy_coordinates(state, lat, lng);
                        }
                    },
                    "Copy Coordinates"
                }
            }
        }
    }
}
