//! Shared Dioxus components and Leaflet bridge for the Event Mapper app.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet glue via `js_sys::eval()`
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `actions`: the typed operations behind every user interaction
//! - `callbacks`: `window.*` hooks the map glue calls back into
//! - `popup`: HTML builders for marker popups
//! - `components`: reusable RSX components (search bar, panels, dialogs)

pub mod actions;
pub mod alerts;
pub mod callbacks;
pub mod components;
pub mod js_bridge;
pub mod popup;
pub mod state;
