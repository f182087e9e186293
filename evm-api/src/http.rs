//! Thin JSON wrappers over the browser `fetch` API.

use crate::error::ApiError;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// GET a URL and parse the body as JSON.
pub async fn get_json(url: &str) -> Result<Value, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|err| ApiError::Js(js_message(&err)))?;
    log::info!("GET {url}");
    let response = run_fetch(&request).await?;
    read_json(response).await
}

/// POST a JSON body (with the CSRF header) and parse the response as JSON.
pub async fn post_json(url: &str, body: &Value, csrf_token: &str) -> Result<Value, ApiError> {
    let headers = Headers::new().map_err(|err| ApiError::Js(js_message(&err)))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|err| ApiError::Js(js_message(&err)))?;
    headers
        .set("X-CSRFToken", csrf_token)
        .map_err(|err| ApiError::Js(js_message(&err)))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&body.to_string()));
    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|err| ApiError::Js(js_message(&err)))?;
    log::info!("POST {url}");
    let response = run_fetch(&request).await?;
    read_json(response).await
}

/// A rejected fetch promise is a transport failure; everything after that
/// point has an HTTP status to report instead.
async fn run_fetch(request: &Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Js("window unavailable".to_owned()))?;
    let response = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|err| ApiError::Network(js_message(&err)))?;
    response
        .dyn_into::<Response>()
        .map_err(|err| ApiError::Js(js_message(&err)))
}

async fn read_json(response: Response) -> Result<Value, ApiError> {
    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
            status_text: response.status_text(),
        });
    }
    let text_promise = response.text().map_err(|err| ApiError::Js(js_message(&err)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|err| ApiError::Network(js_message(&err)))?;
    let text = text.as_string().unwrap_or_default();
    serde_json::from_str(&text).map_err(|err| ApiError::Parse(err.to_string()))
}

fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        text
    } else if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        String::from(error.message())
    } else {
        format!("{value:?}")
    }
}
