//! `window.*` hooks the Leaflet glue calls back into.
//!
//! The glue only knows how to invoke plain window functions, so the app
//! registers leaked `Closure`s under well-known names once at startup.
//! Everything here goes through `wasm_bindgen_futures::spawn_local` rather
//! than the Dioxus task API because these closures fire from raw JS event
//! handlers.

use crate::actions;
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::WritableExt;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

/// Register all map callbacks. Call once at app startup.
pub fn install(state: AppState) {
    register_f64_f64("__emMapClick", move |lat, lng| on_map_click(state, lat, lng));
    register_f64("__emMarkerClick", move |index| {
        actions::select_rendered(state, index as usize);
    });
    register_f64("__emZoomEvent", move |index| {
        actions::zoom_rendered(state, index as usize);
    });
    register_f64("__emShowDetails", move |index| {
        actions::select_rendered(state, index as usize);
    });
    register_f64_f64("__emProximityZoom", move |lat, lng| {
        js_bridge::set_view(lat, lng, 12);
    });
}

/// A map click either runs a proximity query or prefills the add-event
/// form with the clicked coordinates and opens the dialog.
fn on_map_click(mut state: AppState, lat: f64, lng: f64) {
    if (state.proximity_mode)() {
        wasm_bindgen_futures::spawn_local(actions::run_proximity_query(state, lat, lng));
    } else {
        {
            let mut form = state.form.write();
            form.latitude = format!("{lat:.6}");
            form.longitude = format!("{lng:.6}");
        }
        state.show_add_dialog.set(true);
    }
}

fn register_f64(name: &str, callback: impl FnMut(f64) + 'static) {
    let closure = Closure::<dyn FnMut(f64)>::new(callback);
    expose(name, closure.as_ref());
    closure.forget();
}

fn register_f64_f64(name: &str, callback: impl FnMut(f64, f64) + 'static) {
    let closure = Closure::<dyn FnMut(f64, f64)>::new(callback);
    expose(name, closure.as_ref());
    closure.forget();
}

fn expose(name: &str, value: &JsValue) {
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(&window, &JsValue::from_str(name), value);
    }
}
