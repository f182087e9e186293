//! Interactive Event Mapper
//!
//! Single-page Dioxus 0.7 app that renders geographic event records as
//! Leaflet markers with popups, free-text search (with an offline
//! fallback over the last loaded collection), an add-event form, and a
//! click-driven nearest-events proximity mode.
//!
//! Data flow:
//! 1. On mount, the Leaflet bridge script is injected and initialized.
//! 2. Window callbacks for map/marker clicks are registered once.
//! 3. The event collection is fetched (GeoJSON endpoint first, plain
//!    event list as fallback) and rendered as markers.

use dioxus::prelude::*;
use evm_map_ui::components::{
    AddEventDialog, AlertStack, EventInfoPanel, ProximityPanel, SearchBar,
};
use evm_map_ui::state::AppState;
use evm_map_ui::{actions, callbacks, js_bridge};

/// DOM element ID the Leaflet map mounts into.
const MAP_CONTAINER_ID: &str = "event-map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("event-map-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // Bootstrap once: map, callbacks, initial load.
    use_effect(move || {
        js_bridge::init_map(MAP_CONTAINER_ID);
        callbacks::install(state);
        spawn(actions::load_events(state));
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h3 {
                style: "margin: 0 0 4px 0; color: #1565C0;",
                "Event Mapper"
            }
            div {
                style: "margin: 0 0 8px 0; font-size: 13px; color: #616161;",
                "Click the map to add an event, or enable proximity search to find the nearest events to a point."
            }

            SearchBar {}

            div {
                id: "{MAP_CONTAINER_ID}",
                style: "height: 70vh; min-height: 400px; border: 1px solid #E0E0E0; border-radius: 4px;",
            }

            EventInfoPanel {}
            ProximityPanel {}
            AddEventDialog {}
            AlertStack {}
        }
    }
}
