//! Modal form for creating a new event record.

use crate::actions;
use crate::state::AppState;
use dioxus::prelude::*;

/// Add-event modal. The form's text is kept in state so that cancelling
/// and reopening the dialog preserves what the user typed; only a
/// successful save resets it. Map clicks outside proximity mode prefill
/// the coordinate inputs before opening this dialog.
#[component]
pub fn AddEventDialog() -> Element {
    let mut state = use_context::<AppState>();
    if !(state.show_add_dialog)() {
        return rsx! {};
    }

    let form = state.form.read().clone();

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.45); z-index: 10000; display: flex; align-items: center; justify-content: center;",
            div {
                id: "add-event-dialog",
                style: "background: white; border-radius: 4px; padding: 20px 24px; width: 420px; max-height: 85vh; overflow-y: auto;",
                h5 { style: "margin: 0 0 16px 0;", "Add New Event" }
                div {
                    style: "display: grid; gap: 10px;",
                    label { "Name *"
                        input {
                            r#type: "text",
                            value: "{form.name}",
                            oninput: move |evt| state.form.write().name = evt.value(),
                        }
                    }
                    label { "Country *"
                        input {
                            r#type: "text",
                            value: "{form.country}",
                            oninput: move |evt| state.form.write().country = evt.value(),
                        }
                    }
                    label { "City *"
                        input {
                            r#type: "text",
                            value: "{form.city}",
                            oninput: move |evt| state.form.write().city = evt.value(),
                        }
                    }
                    label { "Venue *"
                        input {
                            r#type: "text",
                            value: "{form.venue}",
                            oninput: move |evt| state.form.write().venue = evt.value(),
                        }
                    }
                    label { "Latitude *"
                        input {
                            r#type: "text",
                            value: "{form.latitude}",
                            oninput: move |evt| state.form.write().latitude = evt.value(),
                        }
                    }
                    label { "Longitude *"
                        input {
                            r#type: "text",
                            value: "{form.longitude}",
                            oninput: move |evt| state.form.write().longitude = evt.value(),
                        }
                    }
                    label { "Date"
                        input {
                            r#type: "date",
                            value: "{form.date}",
                            oninput: move |evt| state.form.write().date = evt.value(),
                        }
                    }
                    label { "URL"
                        input {
                            r#type: "text",
                            placeholder: "https://example.com",
                            value: "{form.url}",
                            oninput: move |evt| state.form.write().url = evt.value(),
                        }
                    }
                }
                div {
                    style: "margin-top: 16px; display: flex; justify-content: flex-end; gap: 8px;",
                    button {
                        onclick: move |_| state.show_add_dialog.set(false),
                        "Cancel"
                    }
                    button {
                        id: "save-event",
                        onclick: move |_| {
                            spawn(actions::save_event(state));
                        },
                        "Save Event"
                    }
                }
            }
        }
    }
}
