//! Search box and map control buttons.

use crate::actions;
use crate::state::AppState;
use dioxus::prelude::*;

/// Free-text search plus the control row: search/clear/refresh buttons,
/// the add-event button, the proximity toggle with its radius input, and
/// the loaded-count readout. The search button doubles as the loading
/// indicator, exactly like the widget this replaces.
#[component]
pub fn SearchBar() -> Element {
    let mut state = use_context::<AppState>();
    let loading = (state.loading)();
    let proximity = (state.proximity_mode)();
    let count = (state.displayed_count)();

    let run = move || {
        let query = (state.search_query)();
        spawn(actions::run_search(state, query));
    };

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; align-items: center; gap: 8px; margin: 8px 0;",
            input {
                id: "event-search",
                r#type: "text",
                placeholder: "Search events by name or city...",
                style: "flex: 1; min-width: 200px; padding: 6px 8px;",
                value: "{state.search_query}",
                oninput: move |evt| state.search_query.set(evt.value()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        run();
                    }
                },
            }
            button {
                id: "search-btn",
                disabled: loading,
                onclick: move |_| run(),
                if loading { "Loading..." } else { "Search" }
            }
            button {
                id: "clear-search",
                onclick: move |_| actions::clear_search(state),
                "Clear"
            }
            button {
                id: "refresh-map",
                onclick: move |_| {
                    spawn(actions::load_events(state));
                },
                "Refresh"
            }
            button {
                id: "add-event-btn",
                onclick: move |_| state.show_add_dialog.set(true),
                "Add Event"
            }
            button {
                id: "proximity-toggle",
                style: if proximity { "background: #C62828; color: white;" } else { "" },
                onclick: move |_| actions::toggle_proximity(state),
                if proximity { "Exit Proximity" } else { "Proximity Search" }
            }
            if proximity {
                input {
                    id: "radius-input",
                    r#type: "number",
                    placeholder: "Radius (km)",
                    style: "width: 120px; padding: 6px 8px;",
                    value: "{state.radius_km}",
                    oninput: move |evt| state.radius_km.set(evt.value()),
                }
            }
            span {
                id: "event-count",
                style: "margin-left: auto; color: #616161; font-size: 13px;",
                "{count} events loaded"
            }
        }
    }
}
