//! CSRF token retrieval.
//!
//! Lookup order matches what the backend's templates can provide: the
//! `csrftoken` cookie, then a `csrf-token` meta tag, then a hidden
//! `csrfmiddlewaretoken` form input. An empty string is sent when none of
//! them exist; the server rejects the write in that case.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Pull the `csrftoken` value out of a raw `document.cookie` string.
pub fn token_from_cookies(cookies: &str) -> Option<String> {
    cookies.split(';').find_map(|cookie| {
        let (name, value) = cookie.trim().split_once('=')?;
        (name == "csrftoken").then(|| value.to_owned())
    })
}

/// Best-effort CSRF token for POST requests.
pub fn csrf_token() -> String {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return String::new();
    };

    if let Some(html) = document.dyn_ref::<HtmlDocument>() {
        if let Ok(cookies) = html.cookie() {
            if let Some(token) = token_from_cookies(&cookies) {
                return token;
            }
        }
    }

    if let Ok(Some(meta)) = document.query_selector(r#"meta[name="csrf-token"]"#) {
        if let Some(content) = meta.get_attribute("content") {
            return content;
        }
    }

    if let Ok(Some(input)) = document.query_selector(r#"input[name="csrfmiddlewaretoken"]"#) {
        if let Some(value) = input.get_attribute("value") {
            return value;
        }
    }

    log::warn!("CSRF token not found");
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_token_among_other_cookies() {
        let cookies = "sessionid=abc123; csrftoken=tok-42; theme=dark";
        assert_eq!(token_from_cookies(cookies), Some("tok-42".to_owned()));
    }

    #[test]
    fn tolerates_leading_whitespace_and_missing_token() {
        assert_eq!(token_from_cookies("  csrftoken=x"), Some("x".to_owned()));
        assert_eq!(token_from_cookies("sessionid=abc"), None);
        assert_eq!(token_from_cookies(""), None);
    }

    #[test]
    fn does_not_match_prefixed_names() {
        assert_eq!(token_from_cookies("notcsrftoken=y"), None);
    }
}
