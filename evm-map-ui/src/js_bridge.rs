//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet glue lives in `assets/js/map-bridge.js` and is evaluated as
//! globals (no ES modules), then exposed via `window.*`. This module
//! provides safe Rust wrappers that serialize data and call those globals.
//! If Leaflet itself is not on the page, the init sequence injects its
//! script and stylesheet tags and polls until `L` exists.

// Embed the Leaflet glue at compile time
static MAP_BRIDGE_JS: &str = include_str!("../assets/js/map-bridge.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('EventMap JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Load the glue and create the map. Call once at app startup.
///
/// The glue defines functions via `function` declarations. To ensure they
/// become globally accessible (not block-scoped inside the setInterval
/// callback), we stash the script on `window`, evaluate it at global scope
/// via indirect eval once Leaflet and the container element exist, and then
/// explicitly promote each function to `window.*`.
pub fn init_map(container_id: &str) {
    let store_js = format!(
        "window.__emBridgeScript = {};",
        serde_json::to_string(MAP_BRIDGE_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (typeof L === 'undefined' && !document.getElementById('em-leaflet-js')) {{
                var css = document.createElement('link');
                css.id = 'em-leaflet-css';
                css.rel = 'stylesheet';
                css.href = 'https://unpkg.com/leaflet@1.9.4/dist/leaflet.css';
                document.head.appendChild(css);
                var js = document.createElement('script');
                js.id = 'em-leaflet-js';
                js.src = 'https://unpkg.com/leaflet@1.9.4/dist/leaflet.js';
                document.head.appendChild(js);
            }}
            var waitForLeaflet = setInterval(function() {{
                if (typeof L !== 'undefined' && document.getElementById('{container_id}')) {{
                    clearInterval(waitForLeaflet);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__emBridgeScript);
                    delete window.__emBridgeScript;
                    // Promote function declarations to window explicitly
                    if (typeof emInitMap !== 'undefined') window.emInitMap = emInitMap;
                    if (typeof emRenderMarkers !== 'undefined') window.emRenderMarkers = emRenderMarkers;
                    if (typeof emFitBounds !== 'undefined') window.emFitBounds = emFitBounds;
                    if (typeof emSetView !== 'undefined') window.emSetView = emSetView;
                    if (typeof emSetCursor !== 'undefined') window.emSetCursor = emSetCursor;
                    if (typeof emSetSearchMarker !== 'undefined') window.emSetSearchMarker = emSetSearchMarker;
                    if (typeof emRenderNearest !== 'undefined') window.emRenderNearest = emRenderNearest;
                    if (typeof emClearProximity !== 'undefined') window.emClearProximity = emClearProximity;
                    if (typeof emCopyText !== 'undefined') window.emCopyText = emCopyText;
                    window.emInitMap('{container_id}');
                    window.__emMapReady = true;
                    console.log('Event map initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Run a bridge call once the map has finished initializing.
fn when_ready(body: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__emMapReady) {{
                    clearInterval(poll);
                    try {{ {body} }} catch(e) {{ console.error('[EventMap] bridge call failed:', e); }}
                }}
            }}, 100);
        }})();
        "#
    ));
}

/// Clear the event layer and draw one marker per entry.
/// `markers_json` is a JSON array of `{lat, lng, index, popup}` objects.
pub fn render_markers(markers_json: &str) {
    when_ready(&format!("window.emRenderMarkers({markers_json});"));
}

/// Fit the viewport to a (already padded) corner box.
pub fn fit_bounds(south: f64, west: f64, north: f64, east: f64) {
    when_ready(&format!("window.emFitBounds({south}, {west}, {north}, {east});"));
}

pub fn set_view(lat: f64, lng: f64, zoom: u8) {
    when_ready(&format!("window.emSetView({lat}, {lng}, {zoom});"));
}

pub fn set_cursor_crosshair(enabled: bool) {
    when_ready(&format!("window.emSetCursor({enabled});"));
}

/// Drop the red search-point pin with its popup already open.
pub fn set_search_marker(lat: f64, lng: f64, popup_html: &str) {
    let popup = serde_json::to_string(popup_html).unwrap_or_default();
    when_ready(&format!("window.emSetSearchMarker({lat}, {lng}, {popup});"));
}

/// Draw numbered result markers.
/// `markers_json` is a JSON array of `{lat, lng, rank, popup}` objects.
pub fn render_nearest(markers_json: &str) {
    when_ready(&format!("window.emRenderNearest({markers_json});"));
}

/// Remove the search pin and all numbered result markers.
pub fn clear_proximity() {
    when_ready("window.emClearProximity();");
}

/// Copy text via the async clipboard API, with the legacy fallback.
pub fn copy_text(text: &str) {
    let text = serde_json::to_string(text).unwrap_or_default();
    when_ready(&format!("window.emCopyText({text});"));
}
