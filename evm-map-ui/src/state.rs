//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. The canonical event collection is replaced
//! wholesale on every successful load or search, never edited in place.

use crate::alerts::Alert;
use dioxus::prelude::*;
use evm_model::{EventCollection, EventFeature, EventForm, NearestResponse};

/// Shared application state for the Event Mapper app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Last successfully loaded canonical collection (backs fallback search)
    pub events: Signal<EventCollection>,
    /// The subset currently drawn as markers, in marker order
    pub rendered: Signal<EventCollection>,
    /// Count reported to the user; includes records dropped at render time
    pub displayed_count: Signal<usize>,
    /// Whether a network operation is in flight
    pub loading: Signal<bool>,
    /// Transient user-facing alerts
    pub alerts: Signal<Vec<Alert>>,
    /// Record shown in the detail panel (None hides the panel)
    pub selected: Signal<Option<EventFeature>>,
    /// Whether the add-event dialog is open
    pub show_add_dialog: Signal<bool>,
    /// Raw text contents of the add-event form
    pub form: Signal<EventForm>,
    /// Current text in the search box
    pub search_query: Signal<String>,
    /// Whether proximity mode is active
    pub proximity_mode: Signal<bool>,
    /// Radius input revealed in proximity mode (display-only)
    pub radius_km: Signal<String>,
    /// Last proximity query's results (None hides the results panel)
    pub nearest: Signal<Option<NearestResponse>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            events: Signal::new(Vec::new()),
            rendered: Signal::new(Vec::new()),
            displayed_count: Signal::new(0),
            loading: Signal::new(true),
            alerts: Signal::new(Vec::new()),
            selected: Signal::new(None),
            show_add_dialog: Signal::new(false),
            form: Signal::new(EventForm::default()),
            search_query: Signal::new(String::new()),
            proximity_mode: Signal::new(false),
            radius_km: Signal::new("100".to_string()),
            nearest: Signal::new(None),
        }
    }
}
