//! The typed operations behind every user interaction.
//!
//! Each async operation here is an independent task with no mutual
//! exclusion against the others; overlapping load/search/proximity calls
//! all funnel into the same clear-and-redraw entry point and the last
//! writer wins the marker layer. There is no cancellation and no timeout —
//! a hung request simply keeps the loading flag up until it rejects.

use crate::alerts::{push_alert, AlertLevel};
use dioxus::prelude::{ReadableExt, WritableExt};
use crate::js_bridge;
use crate::popup;
use crate::state::AppState;
use evm_model::{
    bounds_of, filter_by_name_or_city, renderable, validate, EventCollection, EventFeature,
    EventForm, FIT_PADDING,
};
use serde_json::{json, Value};

/// Clear the marker layer and redraw it from `collection`.
///
/// Out-of-range or malformed geometries are dropped (and logged) here, but
/// the reported count deliberately includes them. The viewport is fit to
/// the surviving markers with the fixed padding margin; an empty layer
/// leaves the viewport alone.
pub fn display_collection(mut state: AppState, collection: EventCollection) {
    let rendered: EventCollection = renderable(&collection).into_iter().cloned().collect();

    let markers: Vec<Value> = rendered
        .iter()
        .enumerate()
        .filter_map(|(index, feature)| {
            let (lat, lng) = feature.lat_lng()?;
            Some(json!({
                "lat": lat,
                "lng": lng,
                "index": index,
                "popup": popup::event_popup_html(feature, index),
            }))
        })
        .collect();
    js_bridge::render_markers(&Value::Array(markers).to_string());

    let points: Vec<(f64, f64)> = rendered.iter().filter_map(EventFeature::lat_lng).collect();
    if let Some(bounds) = bounds_of(&points) {
        let padded = bounds.padded(FIT_PADDING);
        js_bridge::fit_bounds(padded.south, padded.west, padded.north, padded.east);
    }

    state.displayed_count.set(collection.len());
    state.rendered.set(rendered);
}

/// Fetch the full collection (with the one-level endpoint fallback),
/// replace the canonical state and redraw. A total failure surfaces a
/// categorized alert and leaves the prior state untouched.
pub async fn load_events(mut state: AppState) {
    log::info!("Loading events...");
    state.loading.set(true);
    match evm_api::load_all().await {
        Ok(collection) => {
            log::info!("Successfully loaded {} events", collection.len());
            state.events.set(collection.clone());
            display_collection(state, collection);
        }
        Err(error) => {
            log::error!("Error loading events from both endpoints: {error}");
            push_alert(state, AlertLevel::Danger, error.user_message());
        }
    }
    state.loading.set(false);
}

/// Server-side search with client-side fallback filtering.
pub async fn run_search(mut state: AppState, query: String) {
    let query = query.trim().to_owned();
    if query.is_empty() {
        let all = state.events.read().clone();
        display_collection(state, all);
        return;
    }

    state.loading.set(true);
    match evm_api::search(&query).await {
        Ok(results) => {
            let count = results.len();
            display_collection(state, results);
            if count == 0 {
                push_alert(state, AlertLevel::Info, "No events found matching your search.");
            }
        }
        Err(error) => {
            log::warn!("search endpoint unusable ({error}), filtering locally");
            let matches = {
                let events = state.events.read();
                filter_by_name_or_city(events.as_slice(), &query)
            };
            let count = matches.len();
            display_collection(state, matches);
            if count == 0 {
                push_alert(state, AlertLevel::Info, "No events found matching your search.");
            } else {
                push_alert(
                    state,
                    AlertLevel::Warning,
                    "Search performed offline due to connection issues.",
                );
            }
        }
    }
    state.loading.set(false);
}

/// Reset the query box and show the full collection again.
pub fn clear_search(mut state: AppState) {
    state.search_query.set(String::new());
    let all = state.events.read().clone();
    display_collection(state, all);
}

/// Validate and submit the add-event form.
///
/// A validation failure never reaches the network. On success the dialog
/// closes, the form resets and a full reload runs — the created record is
/// never appended locally. On an HTTP failure the form stays filled for
/// correction.
pub async fn save_event(mut state: AppState) {
    let form = state.form.read().clone();
    let record = match validate(&form) {
        Ok(record) => record,
        Err(error) => {
            push_alert(state, AlertLevel::Warning, error.to_string());
            return;
        }
    };

    match evm_api::create_event(&record).await {
        Ok(_) => {
            push_alert(state, AlertLevel::Success, "Event added successfully!");
            state.show_add_dialog.set(false);
            state.form.set(EventForm::default());
            load_events(state).await;
        }
        Err(error) => {
            log::error!("Error saving event: {error}");
            push_alert(state, AlertLevel::Danger, "Error saving event. Please try again.");
        }
    }
}

/// Flip proximity mode. Leaving the mode always clears the prior query's
/// markers, results panel and cursor, even if no click ever happened.
pub fn toggle_proximity(mut state: AppState) {
    let active = !(state.proximity_mode)();
    state.proximity_mode.set(active);
    if active {
        js_bridge::set_cursor_crosshair(true);
        push_alert(
            state,
            AlertLevel::Info,
            "Click anywhere on the map to find nearest events",
        );
    } else {
        js_bridge::set_cursor_crosshair(false);
        clear_proximity(state);
    }
}

/// Remove the search pin, the numbered markers and the results panel.
pub fn clear_proximity(mut state: AppState) {
    js_bridge::clear_proximity();
    state.nearest.set(None);
}

/// One proximity query: clear prior visuals, pin the click point, ask the
/// ranking endpoint, then draw numbered markers and fit the viewport to the
/// pin plus all results. On failure the pin stays without results.
pub async fn run_proximity_query(mut state: AppState, lat: f64, lng: f64) {
    clear_proximity(state);
    js_bridge::set_search_marker(lat, lng, &popup::search_point_popup_html(lat, lng));

    state.loading.set(true);
    match evm_api::find_nearest(lat, lng).await {
        Ok(response) => {
            let markers: Vec<Value> = response
                .nearest_events
                .iter()
                .map(|result| {
                    json!({
                        "lat": result.coordinates.lat,
                        "lng": result.coordinates.lng,
                        "rank": result.rank,
                        "popup": popup::proximity_popup_html(result),
                    })
                })
                .collect();
            js_bridge::render_nearest(&Value::Array(markers).to_string());

            if let Some(bounds) = bounds_of(&response.all_points()) {
                let padded = bounds.padded(FIT_PADDING);
                js_bridge::fit_bounds(padded.south, padded.west, padded.north, padded.east);
            }
            state.nearest.set(Some(response));
        }
        Err(error) => {
            log::error!("Error finding nearest events: {error}");
            push_alert(
                state,
                AlertLevel::Danger,
                "Error performing proximity search. Please try again.",
            );
        }
    }
    state.loading.set(false);
}

/// Show the detail panel for a rendered marker.
pub fn select_rendered(mut state: AppState, index: usize) {
    let feature = state.rendered.read().get(index).cloned();
    if let Some(feature) = feature {
        state.selected.set(Some(feature));
    }
}

/// Jump the viewport to a rendered marker.
pub fn zoom_rendered(state: AppState, index: usize) {
    let target = state.rendered.read().get(index).and_then(EventFeature::lat_lng);
    if let Some((lat, lng)) = target {
        js_bridge::set_view(lat, lng, 12);
    }
}

/// Copy "lat, lng" to the clipboard and confirm with a notice.
pub fn copy_coordinates(state: AppState, lat: f64, lng: f64) {
    js_bridge::copy_text(&format!("{lat}, {lng}"));
    push_alert(state, AlertLevel::Info, "Coordinates copied to clipboard!");
}
