//! Backend API client for the Event Mapper app.
//!
//! Wraps the browser `fetch` API (via `web_sys`) behind typed async
//! functions for the five backend endpoints: the two event list endpoints
//! (primary GeoJSON plus paginated fallback), text search, event creation,
//! and the nearest-neighbor ranking endpoint.
//!
//! Every call is a single attempt with no timeout or retry; the only
//! recovery built in is the one-level primary-to-secondary fallback in
//! [`client::load_all`]. Failures carry enough structure for the UI to pick
//! a categorized message (see [`ApiError::user_message`]).

pub mod client;
pub mod csrf;
pub mod endpoints;
mod error;
mod http;

pub use client::{create_event, find_nearest, load_all, search};
pub use error::ApiError;
